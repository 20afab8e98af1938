use super::*;
use workflow::{NoticeLevel, success_notice, validation_notice};

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.visible().is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(validation_notice());
    let b = state.push(success_notice());
    assert!(b > a);
    assert_eq!(state.visible().len(), 2);
    assert_eq!(state.visible()[1].notice.level, NoticeLevel::Success);
}

#[test]
fn push_drops_oldest_past_limit() {
    let mut state = ToastState::default();
    let first = state.push(validation_notice());
    for _ in 0..MAX_VISIBLE {
        state.push(success_notice());
    }
    assert_eq!(state.visible().len(), MAX_VISIBLE);
    assert!(state.visible().iter().all(|t| t.id != first));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(validation_notice());
    let b = state.push(success_notice());
    assert!(state.dismiss(a));
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.visible()[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(success_notice());
    assert!(!state.dismiss(99));
    assert_eq!(state.visible().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(success_notice());
    state.dismiss(a);
    let b = state.push(success_notice());
    assert_ne!(a, b);
}
