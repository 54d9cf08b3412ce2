// Host-side tests for the contact form submission flow.
// The web crate is wasm-only, so these exercise folio-core directly.

use folio_core::*;
use pollster::block_on;
use std::cell::{Cell, RefCell};
use std::sync::{Mutex, Once};

struct CaptureLogger;

static LOGS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut logs) = LOGS.lock() {
            logs.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
}

fn logged(level: log::Level, needle: &str) -> bool {
    LOGS.lock()
        .map(|logs| logs.iter().any(|(l, m)| *l == level && m.contains(needle)))
        .unwrap_or(false)
}

#[derive(Default)]
struct FakeForm {
    name: RefCell<String>,
    email: RefCell<String>,
    message: RefCell<String>,
    statuses: RefCell<Vec<String>>,
    busy: Cell<bool>,
    resets: Cell<u32>,
}

impl FakeForm {
    fn filled(name: &str, email: &str, message: &str) -> Self {
        let form = Self::default();
        *form.name.borrow_mut() = name.to_owned();
        *form.email.borrow_mut() = email.to_owned();
        *form.message.borrow_mut() = message.to_owned();
        form
    }

    fn status(&self) -> Option<String> {
        self.statuses.borrow().last().cloned()
    }
}

impl ContactForm for FakeForm {
    fn field(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.borrow().clone(),
            Field::Email => self.email.borrow().clone(),
            Field::Message => self.message.borrow().clone(),
        }
    }

    fn set_status(&self, text: &str) {
        self.statuses.borrow_mut().push(text.to_owned());
    }

    fn reset(&self) {
        self.name.borrow_mut().clear();
        self.email.borrow_mut().clear();
        self.message.borrow_mut().clear();
        self.resets.set(self.resets.get() + 1);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

struct FakeTransport {
    response: Result<u16, TransportError>,
    sent: RefCell<Vec<(String, ContactMessage)>>,
}

impl FakeTransport {
    fn replying(response: Result<u16, TransportError>) -> Self {
        Self {
            response,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, message: &ContactMessage) -> Result<u16, TransportError> {
        self.sent
            .borrow_mut()
            .push((url.to_owned(), message.clone()));
        self.response.clone()
    }
}

#[test]
fn successful_submission_clears_the_form() {
    let form = FakeForm::filled("Ada", "ada@example.com", "Hello");
    let transport = FakeTransport::replying(Ok(200));
    let submitter = Submitter::new(CONTACT_ENDPOINT);

    let outcome = block_on(submitter.submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::Sent);

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, CONTACT_ENDPOINT);
    assert_eq!(
        sent[0].1,
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    );

    assert_eq!(
        *form.statuses.borrow(),
        vec![STATUS_SENDING.to_owned(), STATUS_SENT.to_owned()]
    );
    assert_eq!(form.resets.get(), 1);
    assert_eq!(form.field(Field::Name), "");
    assert!(!form.busy.get());
    assert!(!submitter.in_flight());
}

#[test]
fn rejected_submission_keeps_the_fields() {
    let form = FakeForm::filled("Ada", "ada@example.com", "Hello");
    let transport = FakeTransport::replying(Ok(500));
    let submitter = Submitter::new(CONTACT_ENDPOINT);

    let outcome = block_on(submitter.submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::Rejected { status: 500 });
    assert_eq!(form.status().as_deref(), Some(STATUS_FAILED));
    assert_eq!(form.resets.get(), 0);
    assert_eq!(form.field(Field::Message), "Hello");
    assert!(!form.busy.get());
}

#[test]
fn client_errors_are_reported_like_server_errors() {
    let form = FakeForm::filled("Ada", "ada@example.com", "Hello");
    let transport = FakeTransport::replying(Ok(404));
    let outcome = block_on(Submitter::new(CONTACT_ENDPOINT).submit(&form, &transport));
    assert_eq!(outcome.status_text(), Some(STATUS_FAILED));
    assert!(!outcome.clears_form());
}

#[test]
fn network_failure_is_logged_and_reported() {
    capture_logs();
    let form = FakeForm::filled("Ada", "ada@example.com", "Hello");
    let err = TransportError::Network("connection refused (offline test)".into());
    let transport = FakeTransport::replying(Err(err.clone()));
    let submitter = Submitter::new(CONTACT_ENDPOINT);

    let outcome = block_on(submitter.submit(&form, &transport));
    assert_eq!(outcome, SubmitOutcome::NetworkError(err));
    assert_eq!(form.status().as_deref(), Some(STATUS_NETWORK_ERROR));
    assert_eq!(form.field(Field::Email), "ada@example.com");
    assert!(!submitter.in_flight());
    assert!(logged(log::Level::Error, "connection refused (offline test)"));
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let form = FakeForm::filled("Ada", "ada@example.com", "Hello");
    let transport = FakeTransport::replying(Ok(204));
    let submitter = Submitter::new(CONTACT_ENDPOINT);

    let first = submitter.begin(&form).expect("first submission starts");
    assert!(submitter.in_flight());
    assert!(form.busy.get());
    assert!(submitter.begin(&form).is_none());
    assert_eq!(
        block_on(submitter.submit(&form, &transport)),
        SubmitOutcome::Ignored
    );
    // Only the first one showed a pending status.
    assert_eq!(form.statuses.borrow().len(), 1);

    assert_eq!(
        block_on(submitter.finish(&form, &transport, first)),
        SubmitOutcome::Sent
    );
    assert_eq!(transport.sent.borrow().len(), 1);

    // The slot is free again afterwards.
    assert!(submitter.begin(&form).is_some());
}

#[test]
fn field_values_are_trimmed() {
    let form = FakeForm::filled("  Ada ", "ada@example.com\n", "\tHello there  ");
    let message = ContactMessage::read(&form);
    assert_eq!(message, ContactMessage::new("Ada", "ada@example.com", "Hello there"));
}

#[test]
fn body_is_a_json_object_with_three_fields() {
    let message = ContactMessage::new("Ada", "ada@example.com", "Hello");
    let value = serde_json::to_value(&message).expect("serializes");
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello",
        })
    );
}

#[test]
fn success_range() {
    assert!(is_success(200));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(300));
    assert!(!is_success(500));
}
