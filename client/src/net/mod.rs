//! Networking modules for the content backend and third-party integrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST backend, `upload` and `email` talk to external
//! services directly from the browser, `types` defines the wire schema and
//! `error` the single error type all of them return.

pub mod api;
#[cfg(any(test, feature = "hydrate"))]
pub mod email;
pub mod error;
pub mod types;
#[cfg(any(test, feature = "hydrate"))]
pub mod upload;
