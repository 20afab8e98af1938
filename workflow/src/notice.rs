//! User-facing notices for each submit outcome.
//!
//! Both surfaces render the same texts: the browser as toasts, the CLI as
//! plain lines on stdout/stderr.

use serde::Serialize;

use crate::outcome::SubmitError;
use crate::payload::DeliveryMode;

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

pub const VALIDATION_TITLE: &str = "Please fill in both subject and content fields";
pub const BUSY_TITLE: &str = "A submission is already in progress";
pub const SUCCESS_TITLE: &str = "Email workflow triggered successfully!";
pub const SUCCESS_DESCRIPTION: &str = "Your emails are being sent via n8n workflow";
pub const FAILURE_TITLE: &str = "Failed to trigger workflow";
pub const FAILURE_DESCRIPTION: &str = "Please check your n8n server and try again";
pub const CONNECT_HINT: &str = "Cannot connect to localhost from hosted app. Use ngrok or run locally!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One notification shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, description: Option<&str>) -> Self {
        Self { level, title: title.to_owned(), description: description.map(str::to_owned) }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

#[must_use]
pub fn validation_notice() -> Notice {
    Notice::new(NoticeLevel::Warning, VALIDATION_TITLE, None)
}

#[must_use]
pub fn busy_notice() -> Notice {
    Notice::new(NoticeLevel::Warning, BUSY_TITLE, None)
}

#[must_use]
pub fn success_notice() -> Notice {
    Notice::new(NoticeLevel::Success, SUCCESS_TITLE, Some(SUCCESS_DESCRIPTION))
}

/// Map a transport failure to its notice.
///
/// Only status-checked delivery can tell a connectivity failure apart, so the
/// localhost hint is reserved for [`DeliveryMode::Checked`].
#[must_use]
pub fn failure_notice(mode: DeliveryMode, err: &SubmitError) -> Notice {
    let description = match mode {
        DeliveryMode::Checked if err.is_connect() => CONNECT_HINT,
        DeliveryMode::Checked | DeliveryMode::Opaque => FAILURE_DESCRIPTION,
    };
    Notice::new(NoticeLevel::Error, FAILURE_TITLE, Some(description))
}
