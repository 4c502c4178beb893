use super::*;

fn sample_session() -> AuthSession {
    serde_json::from_str(
        r#"{
            "user": { "UserID": 4, "Name": "Dana", "Email": "dana@clinic.example", "Role": "pm" },
            "token": "tok-123"
        }"#,
    )
    .unwrap()
}

// =============================================================
// Defaults and transitions
// =============================================================

#[test]
fn default_is_loading_and_anonymous() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn signed_in_carries_user_and_token() {
    let state = SessionState::signed_in(sample_session());
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-123"));
}

#[test]
fn signed_out_clears_everything() {
    let state = SessionState::signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_comes_from_user() {
    let state = SessionState::signed_in(sample_session());
    assert_eq!(state.display_name().as_deref(), Some("Dana"));
}

#[test]
fn display_name_is_none_when_anonymous() {
    assert!(SessionState::signed_out().display_name().is_none());
}
