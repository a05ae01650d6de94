//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed host configuration and one pooled HTTP client used
//! by the `/api/v1` proxy. Both are cheap to clone.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error when the TLS backend cannot be
    /// initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }

    #[must_use]
    pub fn upstream(&self) -> Option<&str> {
        self.config.api_upstream_url.as_deref()
    }
}
