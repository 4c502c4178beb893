//! Shared auth session helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token and user profile are the only client-persisted state.
//! They live under fixed localStorage keys, written at login/register,
//! restored once at app start, and cleared at logout. Route components
//! apply identical unauthenticated redirect behavior through
//! [`install_unauth_redirect`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::{AuthSession, User};
use crate::state::session::SessionState;
use crate::util::storage;

const TOKEN_STORAGE_KEY: &str = "token";
const USER_STORAGE_KEY: &str = "user";

/// Persist a fresh session after login or register.
pub fn persist_session(session: &AuthSession) {
    storage::save_text(TOKEN_STORAGE_KEY, &session.token);
    storage::save_json(USER_STORAGE_KEY, &session.user);
}

/// Rebuild the stored session, if both halves are present and readable.
#[must_use]
pub fn restore_session() -> Option<AuthSession> {
    let token = storage::load_text(TOKEN_STORAGE_KEY)?;
    let user: User = storage::load_json(USER_STORAGE_KEY)?;
    Some(AuthSession { user, token })
}

/// Forget the stored session at logout.
pub fn clear_session() {
    storage::remove(TOKEN_STORAGE_KEY);
    storage::remove(USER_STORAGE_KEY);
}

/// Whether a guarded route should bounce to `/login`: the restore attempt
/// has finished and still no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever the session has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
