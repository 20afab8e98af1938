//! Submit outcomes reported by a transport.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

/// A request that counts as delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The webhook answered with a 2xx status.
    Confirmed { status: u16 },
    /// The request left the client; the response was not observable.
    Dispatched,
}

/// Errors a transport can report for one submit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The webhook answered, but not with a 2xx status.
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// The webhook host could not be reached at all.
    #[error("cannot connect to webhook: {0}")]
    Connect(String),

    /// Any other failure raised while sending the request.
    #[error("request failed: {0}")]
    Transport(String),
}

impl SubmitError {
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect(_))
    }
}

/// Judge a response status for status-checked delivery.
///
/// # Errors
///
/// Returns [`SubmitError::Status`] for anything outside `200..=299`.
pub fn classify_status(status: u16, status_text: &str) -> Result<Delivery, SubmitError> {
    if (200..300).contains(&status) {
        Ok(Delivery::Confirmed { status })
    } else {
        Err(SubmitError::Status { status, status_text: status_text.to_owned() })
    }
}
