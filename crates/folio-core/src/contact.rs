//! Contact form submission flow.
//!
//! The flow is written against two small traits so the browser glue stays
//! thin: [`ContactForm`] is the form on the page and [`Transport`] performs
//! the HTTP POST. [`Submitter`] guarantees at most one submission in flight.

use crate::constants::{STATUS_FAILED, STATUS_NETWORK_ERROR, STATUS_SENDING, STATUS_SENT};
use serde::Serialize;
use std::cell::Cell;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// JSON body posted to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Values are trimmed and otherwise sent as typed.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    pub fn read<F: ContactForm + ?Sized>(form: &F) -> Self {
        Self::new(
            &form.field(Field::Name),
            &form.field(Field::Email),
            &form.field(Field::Message),
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response.
    Sent,
    /// Any other HTTP status. 4xx and 5xx are reported the same way.
    Rejected { status: u16 },
    /// The request never produced a response.
    NetworkError(TransportError),
    /// Another submission was still in flight.
    Ignored,
}

impl SubmitOutcome {
    pub fn from_response(result: Result<u16, TransportError>) -> Self {
        match result {
            Ok(status) if is_success(status) => SubmitOutcome::Sent,
            Ok(status) => SubmitOutcome::Rejected { status },
            Err(e) => SubmitOutcome::NetworkError(e),
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Sent => Some(STATUS_SENT),
            SubmitOutcome::Rejected { .. } => Some(STATUS_FAILED),
            SubmitOutcome::NetworkError(_) => Some(STATUS_NETWORK_ERROR),
            SubmitOutcome::Ignored => None,
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

#[inline]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// The contact form as seen by the submission flow.
pub trait ContactForm {
    fn field(&self, field: Field) -> String;
    fn set_status(&self, text: &str);
    /// Restore every field to its initial value.
    fn reset(&self);
    /// Disable or re-enable the submit control.
    fn set_busy(&self, busy: bool);
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `message` as JSON and return the HTTP status.
    async fn post_json(&self, url: &str, message: &ContactMessage) -> Result<u16, TransportError>;
}

#[derive(Debug)]
pub struct Submitter {
    endpoint: String,
    in_flight: Cell<bool>,
}

impl Submitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            in_flight: Cell::new(false),
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Synchronous half of a submission: claim the in-flight slot, read the
    /// fields and show the pending status. `None` if a submission is running.
    pub fn begin<F: ContactForm + ?Sized>(&self, form: &F) -> Option<ContactMessage> {
        if self.in_flight.replace(true) {
            log::debug!("[contact] submission already in flight; ignoring");
            return None;
        }
        form.set_busy(true);
        let message = ContactMessage::read(form);
        form.set_status(STATUS_SENDING);
        Some(message)
    }

    /// Asynchronous half: send, report the outcome on the form, release the slot.
    pub async fn finish<F, T>(&self, form: &F, transport: &T, message: ContactMessage) -> SubmitOutcome
    where
        F: ContactForm + ?Sized,
        T: Transport,
    {
        let outcome = SubmitOutcome::from_response(transport.post_json(&self.endpoint, &message).await);
        match &outcome {
            SubmitOutcome::Sent => log::info!("[contact] message sent"),
            SubmitOutcome::Rejected { status } => {
                log::warn!("[contact] endpoint rejected message with HTTP {status}")
            }
            SubmitOutcome::NetworkError(e) => log::error!("[contact] {e}"),
            SubmitOutcome::Ignored => {}
        }
        if let Some(text) = outcome.status_text() {
            form.set_status(text);
        }
        if outcome.clears_form() {
            form.reset();
        }
        form.set_busy(false);
        self.in_flight.set(false);
        outcome
    }

    pub async fn submit<F, T>(&self, form: &F, transport: &T) -> SubmitOutcome
    where
        F: ContactForm + ?Sized,
        T: Transport,
    {
        match self.begin(form) {
            Some(message) => self.finish(form, transport, message).await,
            None => SubmitOutcome::Ignored,
        }
    }
}
