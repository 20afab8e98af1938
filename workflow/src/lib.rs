//! Shared submit contract for the email workflow form.
//!
//! This crate owns everything the browser form and the CLI must agree on: the
//! validation gate, the controller phases, the webhook payload shapes, outcome
//! classification, and the notice texts shown to the user. It performs no I/O;
//! each surface plugs its own HTTP transport in between
//! [`EmailForm::begin_submit`] and [`EmailForm::finish_submit`].

pub mod form;
pub mod notice;
pub mod outcome;
pub mod payload;

pub use form::{EmailForm, Phase, ValidationError, validate};
pub use notice::{Notice, NoticeLevel, failure_notice, success_notice, validation_notice};
pub use outcome::{Delivery, SubmitError, classify_status};
pub use payload::{DEFAULT_WEBHOOK_URL, DeliveryMode, EmailDraft, PayloadShape, WebhookPayload};
