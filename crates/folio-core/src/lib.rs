pub mod config;
pub mod constants;
pub mod contact;
pub mod ease;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod style;
pub mod tween;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use config::*;
pub use constants::*;
pub use contact::*;
pub use ease::Ease;
pub use pointer::*;
pub use scene::*;
pub use scroll::*;
pub use tween::*;
