//! Form controller: field state, validation gate, and submit phases.
//!
//! DESIGN
//! ======
//! A submit is split in two halves so the network call can live in whatever
//! async runtime the caller has. `begin_submit` runs the validation gate and
//! hands back the payload to send; `finish_submit` takes the transport result,
//! always returns the form to `Idle`, and yields the notice to show.
//!
//! Idle -> Validating -> Idle (invalid) | Submitting -> Idle (success or error)

use crate::notice::{Notice, busy_notice, failure_notice, success_notice, validation_notice};
use crate::outcome::{Delivery, SubmitError};
use crate::payload::{DeliveryMode, EmailDraft, WebhookPayload};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("subject and content are both required")]
    MissingField,
}

/// Trim both fields and require each to be non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when either trimmed value is empty.
pub fn validate(subject: &str, content: &str) -> Result<EmailDraft, ValidationError> {
    let subject = subject.trim();
    let content = content.trim();
    if subject.is_empty() || content.is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(EmailDraft { subject: subject.to_owned(), content: content.to_owned() })
}

/// State owned by one form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailForm {
    subject: String,
    content: String,
    phase: Phase,
}

impl EmailForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Replace the subject. Inputs are disabled while submitting, so edits are
    /// dropped and `false` is returned.
    pub fn set_subject(&mut self, value: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.subject = value.into();
        true
    }

    /// Replace the content; same rule as [`EmailForm::set_subject`].
    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.content = value.into();
        true
    }

    /// Run the validation gate and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns the notice to show when the fields are invalid (form goes back to
    /// `Idle`) or when a request is already in flight (state is untouched). No
    /// request may be sent in either case.
    pub fn begin_submit(&mut self, mode: DeliveryMode) -> Result<WebhookPayload, Notice> {
        if self.is_loading() {
            return Err(busy_notice());
        }
        self.phase = Phase::Validating;
        match validate(&self.subject, &self.content) {
            Ok(draft) => {
                self.phase = Phase::Submitting;
                Ok(WebhookPayload::new(mode.shape(), draft))
            }
            Err(ValidationError::MissingField) => {
                self.phase = Phase::Idle;
                Err(validation_notice())
            }
        }
    }

    /// Settle the in-flight submit. Fields are cleared only on success; the
    /// phase is always reset so the form re-enables.
    pub fn finish_submit(&mut self, mode: DeliveryMode, result: Result<Delivery, SubmitError>) -> Notice {
        self.phase = Phase::Idle;
        match result {
            Ok(_) => {
                self.subject.clear();
                self.content.clear();
                success_notice()
            }
            Err(err) => failure_notice(mode, &err),
        }
    }
}
