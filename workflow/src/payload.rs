//! Webhook payload shapes and delivery modes.
//!
//! The receiving workflow accepts a flat JSON object. Two shapes are in use:
//! status-checked delivery sends `{subject, content}`, opaque delivery sends
//! `{subject, message}`. The mode picks the shape so callers never mix them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

/// Endpoint the workflow-automation server listens on.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/Email";

/// How a submit is delivered and judged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Inspect the response; only 2xx counts as success.
    #[default]
    Checked,
    /// Response is unobservable; success once the request is dispatched.
    Opaque,
}

impl DeliveryMode {
    /// Payload shape used by this mode.
    #[must_use]
    pub fn shape(self) -> PayloadShape {
        match self {
            Self::Checked => PayloadShape::Content,
            Self::Opaque => PayloadShape::Message,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "checked" => Ok(Self::Checked),
            "opaque" => Ok(Self::Opaque),
            other => Err(format!("unknown delivery mode '{other}' (expected 'checked' or 'opaque')")),
        }
    }
}

/// Name of the body field carrying the message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadShape {
    Content,
    Message,
}

impl PayloadShape {
    #[must_use]
    pub fn body_field(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Message => "message",
        }
    }
}

/// Validated, trimmed form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub content: String,
}

/// JSON body posted to the webhook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookPayload {
    pub shape: PayloadShape,
    pub draft: EmailDraft,
}

impl WebhookPayload {
    #[must_use]
    pub fn new(shape: PayloadShape, draft: EmailDraft) -> Self {
        Self { shape, draft }
    }

    /// Render the body as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("subject".to_owned(), Value::String(self.draft.subject.clone()));
        body.insert(self.shape.body_field().to_owned(), Value::String(self.draft.content.clone()));
        Value::Object(body)
    }
}

impl Serialize for WebhookPayload {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
