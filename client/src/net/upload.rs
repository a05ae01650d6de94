//! Direct browser upload of dashboard media to the media host.
//!
//! The file never passes through the backend: it is posted as multipart form
//! data straight to the host's unsigned upload endpoint and the returned
//! secure URL is written into the dashboard form.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use serde::Deserialize;

use super::error::ApiError;
use super::types::{SiteConfig, UploadedMedia};

const UPLOAD_FAILED: &str = "Upload failed";

#[derive(Debug, Deserialize)]
struct HostUploadResponse {
    secure_url: String,
    public_id: String,
}

fn upload_endpoint(cloud_name: &str) -> String {
    format!("https://api.cloudinary.com/v1_1/{cloud_name}/upload")
}

/// Resolve the upload URL, or a config error when no cloud name is set.
fn endpoint_for(config: &SiteConfig) -> Result<String, ApiError> {
    config
        .cloudinary_cloud_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(upload_endpoint)
        .ok_or_else(|| ApiError::Config("media upload cloud name".to_owned()))
}

fn parse_upload_response(status: u16, body: &str) -> Result<UploadedMedia, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message: UPLOAD_FAILED.to_owned() });
    }
    let parsed: HostUploadResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(UploadedMedia { url: parsed.secure_url, public_id: parsed.public_id })
}

/// Upload one file and return its public URL.
///
/// # Errors
///
/// Returns [`ApiError::Config`] without a cloud name, a status error with
/// "Upload failed" on a non-2xx response, or a transport/decode error.
#[cfg(feature = "hydrate")]
pub async fn upload_file(config: &SiteConfig, file: web_sys::File) -> Result<UploadedMedia, ApiError> {
    let url = endpoint_for(config)?;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    form.append_with_str("upload_preset", &config.cloudinary_upload_preset)
        .map_err(|_| ApiError::Network("could not attach upload preset".to_owned()))?;

    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    parse_upload_response(status, &text)
}
