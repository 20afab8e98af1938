use super::*;

#[test]
fn type_error_maps_to_connect() {
    assert_eq!(
        classify_js_error("TypeError", "Failed to fetch"),
        SubmitError::Connect("Failed to fetch".to_owned())
    );
}

#[test]
fn firefox_network_error_maps_to_connect() {
    let err = classify_js_error("TypeError", "NetworkError when attempting to fetch resource.");
    assert!(err.is_connect());
}

#[test]
fn other_js_errors_map_to_transport() {
    assert_eq!(
        classify_js_error("AbortError", "The user aborted a request."),
        SubmitError::Transport("AbortError: The user aborted a request.".to_owned())
    );
}
