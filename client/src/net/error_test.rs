use super::*;

// =============================================================================
// DISPLAY
// =============================================================================

#[test]
fn transport_error_displays_cause() {
    let err = RemoteError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn status_error_includes_server_message() {
    let err = RemoteError::Status { status: 403, message: Some("token expired".to_owned()) };
    assert_eq!(err.to_string(), "server returned 403: token expired");
}

#[test]
fn status_error_without_message_still_displays() {
    let err = RemoteError::Status { status: 500, message: None };
    assert_eq!(err.to_string(), "server returned 500: no detail");
}

#[test]
fn upload_storage_error_displays_status() {
    let err = UploadError::Storage { status: 413, message: None };
    assert_eq!(err.to_string(), "storage returned 413: no detail");
}

#[test]
fn validation_error_displays_raw_message() {
    let err = ValidationError("Project name is required".to_owned());
    assert_eq!(err.to_string(), "Project name is required");
}

// =============================================================================
// DETAIL
// =============================================================================

#[test]
fn detail_prefers_server_message() {
    let err = RemoteError::Status { status: 404, message: Some("page not found".to_owned()) };
    assert_eq!(err.detail(), "page not found");
}

#[test]
fn detail_falls_back_to_status() {
    let err = RemoteError::Status { status: 502, message: None };
    assert_eq!(err.detail(), "server returned 502");
}

#[test]
fn detail_passes_transport_cause_through() {
    let err = RemoteError::Transport("timeout".to_owned());
    assert_eq!(err.detail(), "timeout");
}

// =============================================================================
// NOTICE TEXT
// =============================================================================

#[test]
fn notice_text_prefers_server_message() {
    let err = RemoteError::Status { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.notice_text("Login failed"), "Invalid credentials");
}

#[test]
fn notice_text_falls_back_when_no_message() {
    let err = RemoteError::Status { status: 500, message: None };
    assert_eq!(err.notice_text("Login failed"), "Login failed");
}

#[test]
fn notice_text_falls_back_on_transport_errors() {
    let err = RemoteError::Transport("connection refused".to_owned());
    assert_eq!(err.notice_text("Registration failed"), "Registration failed");
}
