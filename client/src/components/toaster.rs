//! Toast overlay for submit notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `ToastState` from context. Anything that wants to tell the user about
//! an outcome calls [`notify`]; the overlay renders the stack and each toast
//! removes itself after `AUTO_DISMISS_MS` in the browser.

use leptos::prelude::*;
use workflow::{Notice, NoticeLevel};

use crate::state::toasts::ToastState;

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

fn toast_class(level: NoticeLevel) -> String {
    format!("toast toast--{}", level.as_str())
}

fn toast_icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Warning | NoticeLevel::Error => "!",
    }
}

/// Push a notice onto the toast stack and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::state::toasts::AUTO_DISMISS_MS, move || {
            toasts.update(|t| {
                t.dismiss(id);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .visible()
                    .iter()
                    .cloned()
                    .map(|toast| {
                        let id = toast.id;
                        let level = toast.notice.level;
                        view! {
                            <li class=toast_class(level) role="status">
                                <span class="toast__icon" aria-hidden="true">{toast_icon(level)}</span>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.notice.title}</p>
                                    {toast
                                        .notice
                                        .description
                                        .map(|d| view! { <p class="toast__description">{d}</p> })}
                                </div>
                                <button
                                    class="toast__close"
                                    type="button"
                                    aria-label="Dismiss"
                                    on:click=move |_| {
                                        toasts.update(|t| {
                                            t.dismiss(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
