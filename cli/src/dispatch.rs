//! Submit loop and HTTP transport for the CLI.
//!
//! DESIGN
//! ======
//! `submit` drives one `EmailForm` through begin -> post -> finish. The post
//! goes through the `WebhookTransport` trait so tests can script outcomes
//! without a network; `ReqwestTransport` is the real implementation.
//!
//! reqwest has no opaque response mode. `Opaque` delivery still reads the
//! response head (that is when `send` resolves) but never looks at the status.

use workflow::{Delivery, DeliveryMode, EmailForm, Notice, SubmitError, WebhookPayload, classify_status};

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Something that can deliver a payload to the webhook.
#[async_trait::async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn post(&self, mode: DeliveryMode, payload: &WebhookPayload) -> Result<Delivery, SubmitError>;
}

pub struct ReqwestTransport {
    http: reqwest::Client,
    url: String,
}

impl ReqwestTransport {
    /// Build a transport posting to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_connect() {
        SubmitError::Connect(err.to_string())
    } else {
        SubmitError::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl WebhookTransport for ReqwestTransport {
    async fn post(&self, mode: DeliveryMode, payload: &WebhookPayload) -> Result<Delivery, SubmitError> {
        let response = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        match mode {
            DeliveryMode::Checked => {
                // reqwest drops the wire reason phrase; use the standard one, or
                // the bare code when the status has none.
                let status = response.status();
                match status.canonical_reason() {
                    Some(reason) => classify_status(status.as_u16(), reason),
                    None => classify_status(status.as_u16(), status.as_str()),
                }
            }
            DeliveryMode::Opaque => Ok(Delivery::Dispatched),
        }
    }
}

/// Run one submit attempt and return the notice to show.
///
/// Validation failures return before the transport is touched.
pub async fn submit(form: &mut EmailForm, transport: &dyn WebhookTransport, mode: DeliveryMode) -> Notice {
    let payload = match form.begin_submit(mode) {
        Ok(payload) => payload,
        Err(notice) => {
            tracing::warn!(title = %notice.title, "submit rejected before sending");
            return notice;
        }
    };

    tracing::debug!(%mode, "posting workflow payload");
    let result = transport.post(mode, &payload).await;
    match &result {
        Ok(delivery) => tracing::info!(?delivery, "workflow triggered"),
        Err(e) => tracing::warn!(error = %e, "error triggering workflow"),
    }
    form.finish_submit(mode, result)
}
