use super::*;

fn signed_in_state() -> SessionState {
    let session: AuthSession = serde_json::from_str(
        r#"{
            "user": { "UserID": "u1", "Name": "Dana", "Email": "dana@clinic.example", "Role": "pm" },
            "token": "tok-123"
        }"#,
    )
    .unwrap();
    SessionState::signed_in(session)
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&SessionState::signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in_state()));
}

#[test]
fn restore_is_none_outside_the_browser() {
    assert!(restore_session().is_none());
}
