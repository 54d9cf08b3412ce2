//! The page's DOM contract.
//!
//! Every element the front-end binds to is listed here with whether its
//! absence disables one feature quietly or is a fault in the page.

use crate::constants::CONTACT_ENDPOINT;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// The feature cannot mount without it.
    Required,
    /// The feature is skipped without it.
    Optional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: &'static str,
    pub selector: &'static str,
    pub requirement: Requirement,
}

impl TargetSpec {
    pub const fn required(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            selector,
            requirement: Requirement::Required,
        }
    }

    pub const fn optional(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            selector,
            requirement: Requirement::Optional,
        }
    }

    /// Outcome of looking the target up: `Ok(None)` means an optional target is absent.
    pub fn resolve<T>(&self, found: Option<T>) -> Result<Option<T>, TargetError> {
        match (found, self.requirement) {
            (Some(el), _) => Ok(Some(el)),
            (None, Requirement::Optional) => Ok(None),
            (None, Requirement::Required) => Err(TargetError::Missing {
                name: self.name,
                selector: self.selector,
            }),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("required element `{name}` ({selector}) is missing")]
    Missing {
        name: &'static str,
        selector: &'static str,
    },
    #[error("element `{name}` ({selector}) is not a {expected}")]
    WrongType {
        name: &'static str,
        selector: &'static str,
        expected: &'static str,
    },
}

/// Selectors of element groups. An empty group is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSelectors {
    pub magnetic: &'static str,
    pub interactive: &'static str,
    pub hero_fragments: &'static str,
    pub reveal: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub cursor: TargetSpec,
    pub cursor_grow_class: &'static str,
    pub groups: GroupSelectors,
    pub gallery_track: TargetSpec,
    pub gallery_section: TargetSpec,
    pub background_canvas: TargetSpec,
    pub contact_form: TargetSpec,
    pub name_field: TargetSpec,
    pub email_field: TargetSpec,
    pub message_field: TargetSpec,
    pub form_status: TargetSpec,
    pub contact_endpoint: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cursor: TargetSpec::required("cursor", ".cursor"),
            cursor_grow_class: "cursor-grow",
            groups: GroupSelectors {
                magnetic: ".magnetic-btn",
                interactive: "a, button, .skill-card, .project-card",
                hero_fragments: ".hero-title span",
                reveal: ".reveal-up",
            },
            gallery_track: TargetSpec::optional("gallery track", ".project-gallery"),
            gallery_section: TargetSpec::optional("gallery section", ".horizontal-scroll-section"),
            background_canvas: TargetSpec::required("background canvas", "#bg-canvas"),
            contact_form: TargetSpec::required("contact form", "#contact-form"),
            name_field: TargetSpec::required("name field", "#name"),
            email_field: TargetSpec::required("email field", "#email"),
            message_field: TargetSpec::required("message field", "#message"),
            form_status: TargetSpec::required("form status", "#form-status"),
            contact_endpoint: CONTACT_ENDPOINT,
        }
    }
}

impl SiteConfig {
    /// All single-element targets, for logging what a page provides.
    pub fn targets(&self) -> [&TargetSpec; 9] {
        [
            &self.cursor,
            &self.gallery_track,
            &self.gallery_section,
            &self.background_canvas,
            &self.contact_form,
            &self.name_field,
            &self.email_field,
            &self.message_field,
            &self.form_status,
        ]
    }
}
