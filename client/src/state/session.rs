//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `loading` stays `true` until
//! the stored-session restore attempt has finished, so guards do not bounce
//! a user who is about to be restored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthSession, User};

/// Authentication state tracking the current user, bearer token, and
/// restore status.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl SessionState {
    /// State after a successful login, register, or restore.
    #[must_use]
    pub fn signed_in(session: AuthSession) -> Self {
        Self {
            user: Some(session.user),
            token: Some(session.token),
            loading: false,
        }
    }

    /// State after logout or a failed restore.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, token: None, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Name to show in the header chrome.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.display_name().to_owned())
    }
}
