use super::*;

use axum::Router;
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::any;
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::config::ServerConfig;

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(
        upstream_url("http://up/api/v1", "video-reels", Some("category=wedding")),
        "http://up/api/v1/video-reels?category=wedding"
    );
    assert_eq!(upstream_url("http://up/api/v1/", "/auth/me", None), "http://up/api/v1/auth/me");
    assert_eq!(upstream_url("http://up/api/v1", "reviews", Some("")), "http://up/api/v1/reviews");
}

#[test]
fn raw_tail_keeps_encoded_segments() {
    assert_eq!(raw_tail("/api/v1/auth/resetPassword/a%2Fb%3Fc"), "auth/resetPassword/a%2Fb%3Fc");
    assert_eq!(raw_tail("/api/v1/reviews"), "reviews");
}

#[test]
fn filter_headers_keeps_only_allowlisted() {
    let mut source = HeaderMap::new();
    source.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    source.insert(header::HOST, HeaderValue::from_static("portfolio.test"));
    source.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));

    let out = filter_headers(&source, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(out.len(), 1);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
}

#[test]
fn filter_headers_keeps_repeated_values() {
    let mut source = HeaderMap::new();
    source.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    source.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

    let out = filter_headers(&source, &FORWARDED_RESPONSE_HEADERS);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// FORWARDING
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    if uri.path() == "/api/v1/auth/me" && headers.get(header::AUTHORIZATION).is_none() {
        return (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "message": "Not authorized" }))).into_response();
    }
    Json(serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "auth": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
        "host_header_forwarded": headers.get("x-secret").is_some(),
        "body": body,
    }))
    .into_response()
}

async fn spawn_upstream() -> String {
    let app = Router::new().route("/api/v1/{*path}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

fn app(upstream: Option<String>) -> Router {
    let mut config = ServerConfig::from_lookup(|_| None).unwrap();
    config.api_upstream_url = upstream;
    let state = AppState::new(config).unwrap();
    Router::new().route("/api/v1/{*path}", any(forward)).with_state(state)
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn forwards_method_path_query_and_auth() {
    let upstream = spawn_upstream().await;
    let req = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/v1/video-reels/r1?x=1")
        .header("authorization", "Bearer tok")
        .header("content-type", "application/json")
        .header("x-secret", "nope")
        .body(Body::from(r#"{"title":"Cut"}"#))
        .unwrap();

    let resp = app(Some(upstream)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["uri"], "/api/v1/video-reels/r1?x=1");
    assert_eq!(body["auth"], "Bearer tok");
    assert_eq!(body["host_header_forwarded"], false);
    assert_eq!(body["body"], r#"{"title":"Cut"}"#);
}

#[tokio::test]
async fn encoded_path_segments_reach_upstream_unchanged() {
    let upstream = spawn_upstream().await;
    let req = axum::http::Request::builder()
        .method("PATCH")
        .uri("/api/v1/auth/resetPassword/a%2Fb%3Fc%23d")
        .body(Body::empty())
        .unwrap();

    let resp = app(Some(upstream)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["uri"], "/api/v1/auth/resetPassword/a%2Fb%3Fc%23d");
}

#[tokio::test]
async fn passes_upstream_errors_through() {
    let upstream = spawn_upstream().await;
    let req = axum::http::Request::builder().uri("/api/v1/auth/me").body(Body::empty()).unwrap();

    let resp = app(Some(upstream)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["message"], "Not authorized");
}

#[tokio::test]
async fn unconfigured_upstream_is_503() {
    let req = axum::http::Request::builder().uri("/api/v1/reviews").body(Body::empty()).unwrap();

    let resp = app(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(json_body(resp).await["message"].is_string());
}

#[tokio::test]
async fn unreachable_upstream_is_502() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let req = axum::http::Request::builder().uri("/api/v1/reviews").body(Body::empty()).unwrap();
    let resp = app(Some(format!("http://{addr}/api/v1"))).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
