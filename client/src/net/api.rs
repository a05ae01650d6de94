//! REST client for the content backend under `/api/v1`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`]
//! without touching the network.
//!
//! ERROR HANDLING
//! ==============
//! Each operation returns the parsed `data` payload or a normalized
//! [`ApiError`]. A 401 from any call clears the stored token and forces a
//! full navigation to `/`; callers still receive the error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthSession, Category, LoginRequest, PasswordUpdate, RegisterRequest, ReelQuery, Review, ReviewInput, SiteConfig,
    User, VideoReel, VideoReelInput,
};
use crate::util::{nav, storage};

/// Same-origin prefix; the host server forwards it to the backend.
pub const API_BASE: &str = "/api/v1";
/// Public client settings served by the host itself.
pub const SITE_CONFIG_PATH: &str = "/api/site-config";

// =============================================================================
// ENVELOPES
// =============================================================================

#[derive(serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoReelsData {
    video_reels: Vec<VideoReel>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoReelData {
    video_reel: VideoReel,
}

#[derive(serde::Deserialize)]
struct ReviewsData {
    reviews: Vec<Review>,
}

#[derive(serde::Deserialize)]
struct ReviewData {
    review: Review,
}

#[derive(serde::Deserialize)]
struct UserData {
    user: User,
}

// =============================================================================
// REQUEST PLUMBING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Ids and tokens are percent-encoded so they stay a single path segment.
fn video_reel_path(id: &str) -> String {
    format!("/video-reels/{}", urlencoding::encode(id))
}

fn review_path(id: &str) -> String {
    format!("/reviews/{}", urlencoding::encode(id))
}

fn reset_password_path(token: &str) -> String {
    format!("/auth/resetPassword/{}", urlencoding::encode(token))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Side effects of the session-expiry policy.
pub trait SessionGate {
    fn clear_token(&self);
    fn navigate_home(&self);
}

/// The real browser session: `localStorage` plus a full page navigation.
pub struct BrowserSession;

impl SessionGate for BrowserSession {
    fn clear_token(&self) {
        storage::clear_token();
    }

    fn navigate_home(&self) {
        nav::hard_navigate("/");
    }
}

/// Turn a finished response into its body or a normalized error, applying
/// the 401 policy on the way out.
#[cfg(any(test, feature = "hydrate"))]
fn check_response<G: SessionGate>(gate: &G, status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let err = ApiError::from_status(status, &body);
    if err.is_unauthorized() {
        #[cfg(feature = "hydrate")]
        log::warn!("session rejected by backend; clearing token");
        gate.clear_token();
        gate.navigate_home();
    }
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    method: Method,
    url: &str,
    query: &[(&'static str, String)],
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};

    let http_method = match method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(url).method(http_method);
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    if let Some(token) = storage::read_token() {
        builder = builder.header("Authorization", &bearer_header(&token));
    }

    let resp = match body {
        Some(payload) => {
            builder
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    check_response(&BrowserSession, status, text)
}

#[cfg(not(feature = "hydrate"))]
async fn dispatch(
    method: Method,
    url: &str,
    query: &[(&'static str, String)],
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    let _ = (method, url, query, body);
    Err(ApiError::Unavailable)
}

async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let text = dispatch(method, &api_url(path), query, body).await?;
    decode(&text)
}

async fn request_empty(method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
    dispatch(method, &api_url(path), &[], body).await.map(|_| ())
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn register(req: &RegisterRequest) -> Result<AuthSession, ApiError> {
    let env: Envelope<AuthSession> = request(Method::Post, "/auth/register", &[], Some(to_body(req)?)).await?;
    Ok(env.data)
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn login(req: &LoginRequest) -> Result<AuthSession, ApiError> {
    let env: Envelope<AuthSession> = request(Method::Post, "/auth/login", &[], Some(to_body(req)?)).await?;
    Ok(env.data)
}

/// Drop the stored token, then tell the backend via `POST /auth/logout`.
///
/// # Errors
///
/// Returns the normalized backend or transport error. The local token is
/// cleared regardless.
pub async fn logout() -> Result<(), ApiError> {
    storage::clear_token();
    request_empty(Method::Post, "/auth/logout", None).await
}

/// `GET /auth/me`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn get_current_user() -> Result<User, ApiError> {
    let env: Envelope<UserData> = request(Method::Get, "/auth/me", &[], None).await?;
    Ok(env.data.user)
}

/// `POST /auth/forgotPassword`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "email": email });
    request_empty(Method::Post, "/auth/forgotPassword", Some(body)).await
}

/// `PATCH /auth/resetPassword/{token}`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn reset_password(token: &str, password: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "password": password });
    request_empty(Method::Patch, &reset_password_path(token), Some(body)).await
}

/// `PATCH /auth/updatePassword`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn update_password(update: &PasswordUpdate) -> Result<(), ApiError> {
    request_empty(Method::Patch, "/auth/updatePassword", Some(to_body(update)?)).await
}

// =============================================================================
// VIDEO REELS
// =============================================================================

/// `GET /video-reels` with optional filters.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn get_video_reels(query: &ReelQuery) -> Result<Vec<VideoReel>, ApiError> {
    let env: Envelope<VideoReelsData> = request(Method::Get, "/video-reels", &query.to_pairs(), None).await?;
    Ok(env.data.video_reels)
}

/// Reels in one category; `None` means "all" and requests the unfiltered
/// collection.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn get_video_reels_by_category(category: Option<Category>) -> Result<Vec<VideoReel>, ApiError> {
    get_video_reels(&ReelQuery { category, ..ReelQuery::default() }).await
}

/// Reels carrying any of `tags`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn get_video_reels_by_tags(tags: &[String]) -> Result<Vec<VideoReel>, ApiError> {
    get_video_reels(&ReelQuery { tags: tags.to_vec(), ..ReelQuery::default() }).await
}

/// Free-text reel search.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn search_video_reels(text: &str) -> Result<Vec<VideoReel>, ApiError> {
    get_video_reels(&ReelQuery { search: Some(text.to_owned()), ..ReelQuery::default() }).await
}

/// `GET /video-reels/{id}`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn get_video_reel(id: &str) -> Result<VideoReel, ApiError> {
    let env: Envelope<VideoReelData> = request(Method::Get, &video_reel_path(id), &[], None).await?;
    Ok(env.data.video_reel)
}

/// `POST /video-reels`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn create_video_reel(input: &VideoReelInput) -> Result<VideoReel, ApiError> {
    let env: Envelope<VideoReelData> = request(Method::Post, "/video-reels", &[], Some(to_body(input)?)).await?;
    Ok(env.data.video_reel)
}

/// `PATCH /video-reels/{id}`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn update_video_reel(id: &str, input: &VideoReelInput) -> Result<VideoReel, ApiError> {
    let env: Envelope<VideoReelData> =
        request(Method::Patch, &video_reel_path(id), &[], Some(to_body(input)?)).await?;
    Ok(env.data.video_reel)
}

/// `DELETE /video-reels/{id}`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn delete_video_reel(id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &video_reel_path(id), None).await
}

// =============================================================================
// REVIEWS
// =============================================================================

/// `GET /reviews`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn get_reviews() -> Result<Vec<Review>, ApiError> {
    let env: Envelope<ReviewsData> = request(Method::Get, "/reviews", &[], None).await?;
    Ok(env.data.reviews)
}

/// `POST /reviews`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn create_review(input: &ReviewInput) -> Result<Review, ApiError> {
    let env: Envelope<ReviewData> = request(Method::Post, "/reviews", &[], Some(to_body(input)?)).await?;
    Ok(env.data.review)
}

/// `PATCH /reviews/{id}`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn update_review(id: &str, input: &ReviewInput) -> Result<Review, ApiError> {
    let env: Envelope<ReviewData> = request(Method::Patch, &review_path(id), &[], Some(to_body(input)?)).await?;
    Ok(env.data.review)
}

/// `DELETE /reviews/{id}`.
///
/// # Errors
///
/// Returns the normalized backend or transport error.
pub async fn delete_review(id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &review_path(id), None).await
}

// =============================================================================
// HOST
// =============================================================================

/// Fetch public client settings from the host server.
///
/// # Errors
///
/// Returns the transport or decode error.
pub async fn fetch_site_config() -> Result<SiteConfig, ApiError> {
    let text = dispatch(Method::Get, SITE_CONFIG_PATH, &[], None).await?;
    decode(&text)
}
