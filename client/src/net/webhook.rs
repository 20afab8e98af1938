//! Browser transport for the email workflow webhook.
//!
//! Client-side (hydrate): real `fetch` via `gloo-net`.
//! Server-side (SSR): a stub error, since the POST only ever happens from the
//! browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! `fetch` rejects with a `TypeError` only for network-level failures (host
//! unreachable, blocked by the page's origin, CORS). Those become
//! `SubmitError::Connect`; everything else is `SubmitError::Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use workflow::{Delivery, DeliveryMode, SubmitError, WebhookPayload};

#[cfg(any(test, feature = "hydrate"))]
fn classify_js_error(name: &str, message: &str) -> SubmitError {
    if name == "TypeError" {
        SubmitError::Connect(message.to_owned())
    } else {
        SubmitError::Transport(format!("{name}: {message}"))
    }
}

#[cfg(feature = "hydrate")]
fn map_gloo_error(err: gloo_net::Error) -> SubmitError {
    match err {
        gloo_net::Error::JsError(js) => classify_js_error(&js.name, &js.message),
        other => SubmitError::Transport(other.to_string()),
    }
}

/// POST the payload to `url`.
///
/// `Checked` judges the response status; `Opaque` sends in `no-cors` mode and
/// reports [`Delivery::Dispatched`] as soon as `fetch` settles.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the request cannot be sent or, for `Checked`,
/// when the status is not 2xx.
pub async fn post_payload(url: &str, mode: DeliveryMode, payload: &WebhookPayload) -> Result<Delivery, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::post(url);
        if mode == DeliveryMode::Opaque {
            builder = builder.mode(web_sys::RequestMode::NoCors);
        }
        let request = builder.json(payload).map_err(map_gloo_error)?;
        let response = request.send().await.map_err(map_gloo_error)?;
        match mode {
            DeliveryMode::Checked => workflow::classify_status(response.status(), &response.status_text()),
            DeliveryMode::Opaque => Ok(Delivery::Dispatched),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, mode, payload);
        Err(SubmitError::Transport("not available on server".to_owned()))
    }
}
