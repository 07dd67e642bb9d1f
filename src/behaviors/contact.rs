//! Contact form: validation, simulated submission and the transient
//! feedback message.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::PageBehaviors;
use crate::timer::Scheduler;
use crate::view::{MessageKind, PageView};

pub const SENDING_LABEL: &str = "Enviando...";
pub const SUCCESS_MESSAGE: &str = "¡Gracias! Te responderemos dentro de 24 horas.";

/// Form field names, in validation order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "projectType", "message"];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `Display` is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor completa todos los campos requeridos.")]
    MissingField(&'static str),
    #[error("Por favor ingresa una dirección de email válida.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from a field lookup; absent fields are empty.
    pub fn from_fields<F>(field: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| field(name).unwrap_or_default();
        Self {
            name: value("name"),
            email: value("email"),
            project_type: value("projectType"),
            message: value("message"),
        }
    }

    fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "projectType" => &self.project_type,
            "message" => &self.message,
            _ => "",
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|f| self.field(f).is_empty())
        {
            return Err(ValidationError::MissingField(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl<V, S> PageBehaviors<V, S>
where
    V: PageView + 'static,
    S: Scheduler,
{
    /// Form submit with the default already prevented by the caller.
    pub fn on_contact_submit(&self, submission: ContactSubmission) -> Result<(), ValidationError> {
        if let Err(err) = submission.validate() {
            debug!("Contact form rejected: {:?}", err);
            self.show_form_message(MessageKind::Error, &err.to_string());
            return Err(err);
        }

        match serde_json::to_string(&submission) {
            Ok(payload) => info!("Form submitted: {}", payload),
            Err(_) => info!("Form submitted: {:?}", submission),
        }
        self.simulate_submission();
        Ok(())
    }

    fn simulate_submission(&self) {
        let original_label = self.view.submit_label();
        self.view.set_submit_label(SENDING_LABEL);
        self.view.set_submit_enabled(false);
        self.state.borrow_mut().submitting = true;

        let page = self.this.clone();
        self.scheduler.defer(self.config.submit_delay_ms, move || {
            let Some(page) = page.upgrade() else {
                return;
            };
            page.view.set_submit_label(&original_label);
            page.view.set_submit_enabled(true);
            page.state.borrow_mut().submitting = false;

            page.show_form_message(MessageKind::Success, SUCCESS_MESSAGE);
            page.view.reset_form();
        });
    }

    /// Replaces the current message, then fades and removes it on its own.
    pub fn show_form_message(&self, kind: MessageKind, text: &str) {
        let message = self.view.show_form_message(kind, text);

        let view = self.view.clone();
        let scheduler = self.scheduler.clone();
        let fade_ms = self.config.message_fade_ms;
        self.scheduler.defer(self.config.message_lifetime_ms, move || {
            view.fade_form_message(&message, fade_ms);
            scheduler.defer(fade_ms, move || view.remove_form_message(&message));
        });
    }
}
