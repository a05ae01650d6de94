//! Normalized error type for every outbound call the browser makes.
//!
//! ERROR HANDLING
//! ==============
//! Callers only ever need a message to show in a toast, plus the ability to
//! recognize an expired session. Everything else collapses into a handful of
//! variants so pages can match on `Unauthorized` and otherwise call
//! [`ApiError::message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success HTTP status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A required client setting (cloud name, email ids) is missing.
    #[error("not configured: {0}")]
    Config(String),
    /// Called during server-side rendering, where no browser is available.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

const UNAUTHORIZED_FALLBACK: &str = "You are not logged in! Please log in to get access.";

impl ApiError {
    /// Build an error from a failed HTTP status and its raw response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        if status == 401 {
            return Self::Unauthorized(message.unwrap_or_else(|| UNAUTHORIZED_FALLBACK.to_owned()));
        }
        Self::Status { status, message: message.unwrap_or_else(|| status_failed_message(status)) }
    }

    /// User-facing message for toasts and inline form errors.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Pull `message` out of a `{ "message": ... }` JSON body, if present.
fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
