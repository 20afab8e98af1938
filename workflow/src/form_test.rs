use super::*;
use crate::notice::{BUSY_TITLE, CONNECT_HINT, NoticeLevel, VALIDATION_TITLE};
use crate::payload::PayloadShape;

fn filled(subject: &str, content: &str) -> EmailForm {
    let mut form = EmailForm::new();
    assert!(form.set_subject(subject));
    assert!(form.set_content(content));
    form
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_trims_both_fields() {
    let draft = validate("  Hello ", "\n body \t").unwrap();
    assert_eq!(draft.subject, "Hello");
    assert_eq!(draft.content, "body");
}

#[test]
fn validate_rejects_blank_subject() {
    assert_eq!(validate("   ", "body"), Err(ValidationError::MissingField));
    assert_eq!(validate("", "body"), Err(ValidationError::MissingField));
}

#[test]
fn validate_rejects_blank_content() {
    assert_eq!(validate("Hello", " \n "), Err(ValidationError::MissingField));
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn new_form_is_idle_and_empty() {
    let form = EmailForm::new();
    assert_eq!(form.phase(), Phase::Idle);
    assert!(!form.is_loading());
    assert_eq!(form.subject(), "");
    assert_eq!(form.content(), "");
}

#[test]
fn whitespace_subject_yields_warning_and_stays_idle() {
    let mut form = filled("   ", "body");
    let notice = form.begin_submit(DeliveryMode::Checked).unwrap_err();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.title, VALIDATION_TITLE);
    assert_eq!(form.phase(), Phase::Idle);
    assert!(!form.is_loading());
    assert_eq!(form.content(), "body");
}

#[test]
fn valid_fields_enter_submitting_with_checked_payload() {
    let mut form = filled(" Launch ", " Today ");
    let payload = form.begin_submit(DeliveryMode::Checked).unwrap();
    assert_eq!(payload.shape, PayloadShape::Content);
    assert_eq!(payload.draft.subject, "Launch");
    assert_eq!(payload.draft.content, "Today");
    assert!(form.is_loading());
}

#[test]
fn opaque_mode_builds_message_payload() {
    let mut form = filled("Launch", "Today");
    let payload = form.begin_submit(DeliveryMode::Opaque).unwrap();
    assert_eq!(payload.to_value()["message"], "Today");
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Checked).unwrap();
    let notice = form.begin_submit(DeliveryMode::Checked).unwrap_err();
    assert_eq!(notice.title, BUSY_TITLE);
    assert_eq!(form.phase(), Phase::Submitting);
}

#[test]
fn edits_are_dropped_while_in_flight() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Checked).unwrap();
    assert!(!form.set_subject("Other"));
    assert!(!form.set_content("Other"));
    assert_eq!(form.subject(), "Launch");
    assert_eq!(form.content(), "Today");
}

// =============================================================
// finish_submit
// =============================================================

#[test]
fn confirmed_delivery_clears_fields_and_reports_success() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Checked).unwrap();
    let notice = form.finish_submit(DeliveryMode::Checked, Ok(Delivery::Confirmed { status: 200 }));
    assert!(notice.is_success());
    assert_eq!(form.subject(), "");
    assert_eq!(form.content(), "");
    assert!(!form.is_loading());
}

#[test]
fn status_failure_keeps_fields() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Checked).unwrap();
    let err = SubmitError::Status { status: 502, status_text: "Bad Gateway".to_owned() };
    let notice = form.finish_submit(DeliveryMode::Checked, Err(err));
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(form.subject(), "Launch");
    assert_eq!(form.content(), "Today");
    assert_eq!(form.phase(), Phase::Idle);
}

#[test]
fn connect_failure_surfaces_localhost_hint() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Checked).unwrap();
    let notice = form.finish_submit(DeliveryMode::Checked, Err(SubmitError::Connect("refused".to_owned())));
    assert_eq!(notice.description.as_deref(), Some(CONNECT_HINT));
    assert!(!form.is_loading());
}

#[test]
fn opaque_dispatch_clears_fields_immediately() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Opaque).unwrap();
    let notice = form.finish_submit(DeliveryMode::Opaque, Ok(Delivery::Dispatched));
    assert!(notice.is_success());
    assert_eq!(form.subject(), "");
    assert_eq!(form.content(), "");
}

#[test]
fn form_is_editable_again_after_failure() {
    let mut form = filled("Launch", "Today");
    form.begin_submit(DeliveryMode::Checked).unwrap();
    form.finish_submit(DeliveryMode::Checked, Err(SubmitError::Transport("boom".to_owned())));
    assert!(form.set_subject("Retry"));
    assert_eq!(form.subject(), "Retry");
}
