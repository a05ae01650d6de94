//! Bearer-token persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only durable client state. Its presence gates the
//! dashboard and it is attached to every outgoing API request. SSR paths
//! no-op so server rendering never sees a session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Fixed `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Treat blank values and the literal `"undefined"` (left behind by a
/// failed login that stored `undefined`) as no token.
#[must_use]
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "undefined" || trimmed == "null" {
        return None;
    }
    Some(trimmed.to_owned())
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(TOKEN_KEY).ok().flatten();
        normalize_token(raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
