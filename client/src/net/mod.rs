//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `webhook` posts form payloads straight from the browser to the workflow
//! webhook. The host server is never on that path.

pub mod webhook;
