//! Email workflow form: subject + message posted to the workflow webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds one `workflow::EmailForm` in a signal. Submit runs the validation gate
//! synchronously, then hands the payload to `net::webhook` on a local task.
//! While that request is in flight both inputs and the button are disabled,
//! which is what keeps submissions to one at a time.
//!
//! There is no timeout: a request that never settles leaves the form disabled.

use leptos::prelude::*;
use workflow::{DEFAULT_WEBHOOK_URL, DeliveryMode, EmailForm, WebhookPayload};

use crate::components::toaster::notify;
use crate::state::toasts::ToastState;

#[cfg(test)]
#[path = "email_workflow_form_test.rs"]
mod email_workflow_form_test;

fn submit_label(loading: bool) -> &'static str {
    if loading { "Sending Emails..." } else { "Send Emails" }
}

/// Run the validation gate. Rejections go straight to the toast stack; an
/// accepted submit returns the payload to post.
fn start_submit(form: RwSignal<EmailForm>, toasts: RwSignal<ToastState>, mode: DeliveryMode) -> Option<WebhookPayload> {
    match form.try_update(|f| f.begin_submit(mode))? {
        Ok(payload) => Some(payload),
        Err(notice) => {
            notify(toasts, notice);
            None
        }
    }
}

#[component]
pub fn EmailWorkflowForm(
    /// Delivery contract; status-checked unless told otherwise.
    #[prop(optional)]
    mode: DeliveryMode,
    /// Webhook endpoint override.
    #[prop(optional, into)]
    webhook_url: Option<String>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(EmailForm::new());
    let webhook_url = StoredValue::new(webhook_url.unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_owned()));

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = start_submit(form, toasts, mode) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let url = webhook_url.get_value();
            log::debug!("posting workflow payload to {url} ({mode})");
            let result = crate::net::webhook::post_payload(&url, mode, &payload).await;
            if let Err(e) = &result {
                log::error!("Error triggering workflow: {e}");
            }
            if let Some(notice) = form.try_update(|f| f.finish_submit(mode, result)) {
                notify(toasts, notice);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (webhook_url, payload);
        }
    });

    view! { <EmailFormCard form=form on_submit=on_submit/> }
}

/// Card markup bound to a form signal. Inputs and the button follow the
/// form's loading flag.
#[component]
fn EmailFormCard(form: RwSignal<EmailForm>, on_submit: Callback<leptos::ev::SubmitEvent>) -> impl IntoView {
    let loading = Memo::new(move |_| form.with(EmailForm::is_loading));

    view! {
        <div class="email-page">
            <div class="email-card">
                <header class="email-card__header">
                    <div class="email-card__badge" aria-hidden="true">"✉"</div>
                    <h1 class="email-card__title">"Email Manager"</h1>
                    <p class="email-card__subtitle">"Send personalized emails instantly"</p>
                </header>
                <form class="email-form" on:submit=move |ev| on_submit.run(ev)>
                    <div class="email-form__field">
                        <label class="email-form__label" for="subject">"Subject"</label>
                        <input
                            id="subject"
                            class="email-form__input"
                            type="text"
                            placeholder="Enter your email subject..."
                            prop:value=move || form.with(|f| f.subject().to_owned())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.set_subject(event_target_value(&ev));
                                });
                            }
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="email-form__field">
                        <label class="email-form__label" for="content">"Message"</label>
                        <textarea
                            id="content"
                            class="email-form__textarea"
                            placeholder="Write your email message here..."
                            prop:value=move || form.with(|f| f.content().to_owned())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.set_content(event_target_value(&ev));
                                });
                            }
                            disabled=move || loading.get()
                        ></textarea>
                    </div>
                    <button class="email-form__submit" type="submit" disabled=move || loading.get()>
                        <Show
                            when=move || loading.get()
                            fallback=|| view! { <span class="email-form__icon" aria-hidden="true">"➤"</span> }
                        >
                            <span class="email-form__spinner" aria-hidden="true"></span>
                        </Show>
                        {move || submit_label(loading.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
