//! Public site configuration fetched from the host at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::error::ApiError;
use crate::net::types::SiteConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigState {
    pub site: SiteConfig,
    pub loaded: bool,
}

impl ConfigState {
    /// Store the fetched config. A failed fetch keeps defaults, which leaves
    /// uploads and email unconfigured rather than blocking the page.
    pub fn apply(&mut self, result: Result<SiteConfig, ApiError>) {
        if let Ok(site) = result {
            self.site = site;
        }
        self.loaded = true;
    }

    #[must_use]
    pub fn uploads_enabled(&self) -> bool {
        self.site.cloudinary_cloud_name.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    #[must_use]
    pub fn email_enabled(&self) -> bool {
        [
            &self.site.emailjs_service_id,
            &self.site.emailjs_template_id,
            &self.site.emailjs_public_key,
        ]
        .iter()
        .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}
