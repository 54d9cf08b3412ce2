use crate::dom::{self, Listener};
use folio_core::{
    ContactForm, ContactMessage, Field, SiteConfig, Submitter, TargetError, TargetSpec, Transport,
    TransportError,
};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A text control that may be an `<input>` or a `<textarea>`.
enum TextField {
    Input(web::HtmlInputElement),
    Area(web::HtmlTextAreaElement),
}

impl TextField {
    fn resolve(document: &web::Document, spec: &TargetSpec) -> Result<Self, TargetError> {
        let el: web::Element = dom::require(document, spec, "Element")?;
        let el = match el.dyn_into::<web::HtmlInputElement>() {
            Ok(input) => return Ok(TextField::Input(input)),
            Err(el) => el,
        };
        el.dyn_into::<web::HtmlTextAreaElement>()
            .map(TextField::Area)
            .map_err(|_| TargetError::WrongType {
                name: spec.name,
                selector: spec.selector,
                expected: "input or textarea",
            })
    }

    fn value(&self) -> String {
        match self {
            TextField::Input(el) => el.value(),
            TextField::Area(el) => el.value(),
        }
    }
}

struct PageForm {
    form: web::HtmlFormElement,
    name: TextField,
    email: TextField,
    message: TextField,
    status: web::HtmlElement,
    submit: Option<web::Element>,
}

impl PageForm {
    fn resolve(document: &web::Document, config: &SiteConfig) -> Result<Self, TargetError> {
        let form: web::HtmlFormElement =
            dom::require(document, &config.contact_form, "HtmlFormElement")?;
        let submit = form.query_selector("[type=submit]").ok().flatten();
        Ok(Self {
            name: TextField::resolve(document, &config.name_field)?,
            email: TextField::resolve(document, &config.email_field)?,
            message: TextField::resolve(document, &config.message_field)?,
            status: dom::require(document, &config.form_status, "HtmlElement")?,
            submit,
            form,
        })
    }
}

impl ContactForm for PageForm {
    fn field(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.value(),
            Field::Email => self.email.value(),
            Field::Message => self.message.value(),
        }
    }

    fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn set_busy(&self, busy: bool) {
        if let Some(btn) = &self.submit {
            _ = if busy {
                btn.set_attribute("disabled", "")
            } else {
                btn.remove_attribute("disabled")
            };
        }
    }
}

/// JSON POST through the browser's fetch.
struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, message: &ContactMessage) -> Result<u16, TransportError> {
        let request = Request::post(url)
            .json(message)
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

/// Intercept the contact form's submit and post it to the configured endpoint.
pub fn wire_contact_form(document: &web::Document, config: &SiteConfig) -> anyhow::Result<()> {
    let form = Rc::new(PageForm::resolve(document, config)?);
    let submitter = Rc::new(Submitter::new(config.contact_endpoint));
    let target = form.form.clone();

    Listener::new(target.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        let Some(message) = submitter.begin(form.as_ref()) else {
            return;
        };
        let (form, submitter) = (form.clone(), submitter.clone());
        spawn_local(async move {
            submitter
                .finish(form.as_ref(), &FetchTransport, message)
                .await;
        });
    })
    .forget();

    log::info!("[contact] posting to {}", config.contact_endpoint);
    Ok(())
}
