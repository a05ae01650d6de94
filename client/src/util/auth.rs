//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical unauthenticated redirect behavior: once the
//! stored token has been read, a missing token sends the visitor home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where unauthenticated visitors land.
pub const UNAUTH_REDIRECT: &str = "/";

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.token.is_none()
}

/// Redirect to `/` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(UNAUTH_REDIRECT, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
