//! Same-origin forwarding of `/api/v1/*` to the REST backend.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host, so the REST backend needs no
//! CORS setup of its own. Requests are buffered (API bodies are small JSON;
//! media goes straight to the upload service) and replayed with an allowlist
//! of headers. The upstream status and body are passed through untouched so
//! the client sees real 401s and `{ "message": ... }` errors.
//!
//! ERROR HANDLING
//! ==============
//! Failures on this side of the hop are reported as JSON `{ "message": ... }`
//! so the client error mapping treats them like any backend error:
//! unconfigured upstream is 503, transport failure is 502, an oversized
//! request body is 413.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Prefix the proxy is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Largest request body accepted for forwarding.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, header::COOKIE];

const FORWARDED_RESPONSE_HEADERS: [HeaderName; 5] = [
    header::CONTENT_TYPE,
    header::CACHE_CONTROL,
    header::ETAG,
    header::LAST_MODIFIED,
    header::SET_COOKIE,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No `API_UPSTREAM_URL` and not running in development.
    #[error("API backend is not configured")]
    NotConfigured,

    #[error("request body too large")]
    BodyTooLarge,

    /// Connect, timeout, or read failure talking to the backend.
    #[error("API backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::NotConfigured => "Service temporarily unavailable",
            Self::BodyTooLarge => "Request is too large",
            Self::Upstream(_) => "Could not reach the server",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Upstream(e) => tracing::error!(error = %e, %status, "api forward failed"),
            other => tracing::warn!(error = %other, %status, "api forward rejected"),
        }
        (status, Json(serde_json::json!({ "message": self.public_message() }))).into_response()
    }
}

/// Join the upstream base, the captured tail path, and the original query.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

/// Copy the allowlisted headers from `source`.
#[must_use]
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Tail of the request path after [`API_PREFIX`], still percent-encoded so
/// an encoded `/` or `?` inside a segment reaches the backend unchanged.
#[must_use]
pub fn raw_tail(path: &str) -> &str {
    path.strip_prefix(API_PREFIX).unwrap_or(path).trim_start_matches('/')
}

/// `ANY /api/v1/{*path}`
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let base = state.upstream().ok_or(ProxyError::NotConfigured)?;
    let (parts, body) = req.into_parts();
    let url = upstream_url(base, raw_tail(parts.uri.path()), parts.uri.query());
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|_| ProxyError::BodyTooLarge)?;

    tracing::debug!(method = %parts.method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(filter_headers(&parts.headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%status, %url, "api backend returned server error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
