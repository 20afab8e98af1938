//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers set up
//! in `app::App`.

pub mod email_workflow_form;
pub mod toaster;
