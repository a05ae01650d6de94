//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values from the file and
//! the real environment look the same here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use reelfolio_client::net::types::{DEFAULT_UPLOAD_PRESET, SiteConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEV_API_UPSTREAM_URL: &str = "http://localhost:5000/api/v1";
pub const PROD_API_UPSTREAM_URL: &str = "https://jayed-talukder-server.vercel.app/api/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The upstream URL is not an absolute http(s) URL.
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub app_env: AppEnv,
    /// Base URL the `/api/v1` proxy forwards to, without a trailing slash.
    /// `None` (`API_UPSTREAM_URL=none`) disables the proxy; requests get 503.
    pub api_upstream_url: Option<String>,
    pub upstream_timeout_secs: u64,
    pub site: SiteConfig,
    /// Directory served at `/assets`.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `APP_ENV`: `development` (default) or `production`
    /// - `API_UPSTREAM_URL`: defaults to the local backend in development and
    ///   the hosted backend in production; `none` disables forwarding
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_UPLOAD_PRESET` (default `ml_default`)
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    /// - `ASSETS_DIR`: default `public/assets`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable has an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable has an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let app_env = parse_app_env(get("APP_ENV").as_deref())?;
        let api_upstream_url = match get("API_UPSTREAM_URL") {
            Some(raw) if raw.eq_ignore_ascii_case("none") => None,
            Some(raw) => Some(normalize_upstream(&raw)?),
            None => Some(app_env.default_upstream().to_owned()),
        };
        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", value: raw })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        let site = SiteConfig {
            cloudinary_cloud_name: get("CLOUDINARY_CLOUD_NAME"),
            cloudinary_upload_preset: get("CLOUDINARY_UPLOAD_PRESET").unwrap_or_else(|| DEFAULT_UPLOAD_PRESET.to_owned()),
            emailjs_service_id: get("EMAILJS_SERVICE_ID"),
            emailjs_template_id: get("EMAILJS_TEMPLATE_ID"),
            emailjs_public_key: get("EMAILJS_PUBLIC_KEY"),
        };
        let assets_dir = get("ASSETS_DIR").map_or_else(|| PathBuf::from("public/assets"), PathBuf::from);

        Ok(Self { port, app_env, api_upstream_url, upstream_timeout_secs, site, assets_dir })
    }
}

impl AppEnv {
    #[must_use]
    pub fn default_upstream(self) -> &'static str {
        match self {
            Self::Development => DEV_API_UPSTREAM_URL,
            Self::Production => PROD_API_UPSTREAM_URL,
        }
    }
}

fn parse_app_env(raw: Option<&str>) -> Result<AppEnv, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("development" | "dev") => Ok(AppEnv::Development),
        Some("production" | "prod") => Ok(AppEnv::Production),
        Some(_) => Err(ConfigError::Invalid { var: "APP_ENV", value: raw.unwrap_or_default().to_owned() }),
    }
}

fn normalize_upstream(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::UpstreamScheme(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
