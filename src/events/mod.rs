pub mod form;
pub mod pointer;
pub mod scroll;
