//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navbar. The token itself lives in
//! `localStorage` (see `util::storage`); this mirrors it reactively so views
//! re-render when the user logs in or out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthSession, User};

/// Authentication state tracking the stored token and the current user.
///
/// `loading` stays `true` until hydration has read browser storage, so the
/// server render and the first client render agree.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Finish the startup check with whatever token storage held.
    pub fn restore(&mut self, token: Option<String>) {
        self.token = token;
        self.loading = false;
    }

    pub fn sign_in(&mut self, session: AuthSession) {
        self.token = Some(session.token);
        self.user = session.user;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Display name for the navbar, falling back to a generic label.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("Editor")
            .to_owned()
    }
}
