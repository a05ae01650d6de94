//! Public client configuration.
//!
//! Only values that are safe to ship to the browser live in `SiteConfig`
//! (cloud name, unsigned upload preset, public email key).

use axum::Json;
use axum::extract::State;
use reelfolio_client::net::types::SiteConfig;

use crate::state::AppState;

/// `GET /api/site-config`
pub async fn site_config(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.config.site.clone())
}
