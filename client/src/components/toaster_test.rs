use super::*;

#[test]
fn toast_class_uses_level_modifier() {
    assert_eq!(toast_class(NoticeLevel::Success), "toast toast--success");
    assert_eq!(toast_class(NoticeLevel::Warning), "toast toast--warning");
    assert_eq!(toast_class(NoticeLevel::Error), "toast toast--error");
}

#[test]
fn toast_icon_distinguishes_success() {
    assert_ne!(toast_icon(NoticeLevel::Success), toast_icon(NoticeLevel::Error));
    assert_eq!(toast_icon(NoticeLevel::Warning), toast_icon(NoticeLevel::Error));
}

#[test]
fn notify_pushes_onto_stack() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        notify(toasts, workflow::validation_notice());
        assert_eq!(toasts.with_untracked(|t| t.visible().len()), 1);
    });
}
