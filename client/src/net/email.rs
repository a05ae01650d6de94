//! Contact-form delivery through the template-based email service.
//!
//! The browser posts the visitor's name, address and message straight to the
//! service's REST endpoint using the public service/template/key ids from
//! [`SiteConfig`]; no backend is involved.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use serde::Serialize;

use super::error::ApiError;
use super::types::{ContactMessage, SiteConfig};

pub const EMAIL_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, PartialEq, Eq, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

fn required<'a>(value: Option<&'a String>, what: &str) -> Result<&'a str, ApiError> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Config(what.to_owned()))
}

fn build_send_request<'a>(config: &'a SiteConfig, msg: &'a ContactMessage) -> Result<SendRequest<'a>, ApiError> {
    Ok(SendRequest {
        service_id: required(config.emailjs_service_id.as_ref(), "email service id")?,
        template_id: required(config.emailjs_template_id.as_ref(), "email template id")?,
        user_id: required(config.emailjs_public_key.as_ref(), "email public key")?,
        template_params: TemplateParams { from_name: &msg.name, from_email: &msg.email, message: &msg.message },
    })
}

/// Send one contact message.
///
/// # Errors
///
/// Returns [`ApiError::Config`] when any email id is missing, otherwise the
/// service's status text or the transport error.
#[cfg(feature = "hydrate")]
pub async fn send_contact_email(config: &SiteConfig, msg: &ContactMessage) -> Result<(), ApiError> {
    let payload = build_send_request(config, msg)?;
    let resp = gloo_net::http::Request::post(EMAIL_SEND_URL)
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let message = if text.trim().is_empty() { format!("email send failed: {status}") } else { text };
    Err(ApiError::Status { status, message })
}
