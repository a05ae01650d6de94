//! Wire DTOs shared with the content backend, the media host and the host
//! server.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON with Mongo-style `_id` keys; the structs
//! here rename at the serde boundary so the rest of the crate stays in
//! snake_case. Decoding is lenient where a single odd record would otherwise
//! fail a whole list (unknown categories, out-of-range ratings).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// CATEGORY
// =============================================================================

/// Fixed classification for video reels.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Wedding,
    Commercial,
    Travel,
    ShortFilm,
    Islamic,
    Podcast,
    MyFirstEdit,
    MySelfIntro,
    BehindTheScenes,
    Bloopers,
    /// A category id this build does not know about.
    Other(String),
}

/// Every known category, in dashboard display order.
pub static KNOWN_CATEGORIES: [Category; 10] = [
    Category::Wedding,
    Category::Commercial,
    Category::Travel,
    Category::ShortFilm,
    Category::Islamic,
    Category::Podcast,
    Category::MyFirstEdit,
    Category::MySelfIntro,
    Category::BehindTheScenes,
    Category::Bloopers,
];

impl Category {
    /// Wire id as stored by the backend.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Wedding => "wedding",
            Self::Commercial => "commercial",
            Self::Travel => "travel",
            Self::ShortFilm => "shortfilm",
            Self::Islamic => "islamic",
            Self::Podcast => "podcast",
            Self::MyFirstEdit => "myFirstEdit",
            Self::MySelfIntro => "mySelfIntro",
            Self::BehindTheScenes => "behindTheScenes",
            Self::Bloopers => "bloopers",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label. Unknown ids display as-is.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Wedding => "Wedding Films",
            Self::Commercial => "Commercial",
            Self::Travel => "Travel",
            Self::ShortFilm => "Short Films",
            Self::Islamic => "Islamic",
            Self::Podcast => "Podcast",
            Self::MyFirstEdit => "My First Edit",
            Self::MySelfIntro => "My Self Introduction",
            Self::BehindTheScenes => "Behind The Scenes",
            Self::Bloopers => "Bloopers",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a wire id. Never fails; unknown ids become [`Category::Other`].
    #[must_use]
    pub fn from_id(raw: &str) -> Self {
        KNOWN_CATEGORIES
            .iter()
            .find(|c| c.id() == raw)
            .cloned()
            .unwrap_or_else(|| Self::Other(raw.to_owned()))
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::from_id(&raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.id().to_owned()
    }
}

// =============================================================================
// RATING
// =============================================================================

/// Star rating, always within `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Strict constructor; `None` outside `1..=5`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Clamp any value into range. Used when decoding backend data.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::clamped(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

// =============================================================================
// CONTENT ENTITIES
// =============================================================================

/// A portfolio video entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReel {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A client testimonial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
    pub content: String,
    #[serde(default)]
    pub rating: Rating,
    /// Proof screenshot URL, if one was uploaded.
    #[serde(default)]
    pub screenshot: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update body for `/video-reels`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReelInput {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub tags: Vec<String>,
}

/// Create/update body for `/reviews`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub content: String,
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    pub user_name: String,
}

/// Filters accepted by `GET /video-reels`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReelQuery {
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub search: Option<String>,
}

impl ReelQuery {
    /// Query-string pairs; empty filters are omitted entirely.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.id().to_owned()));
        }
        let tags = self
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        if !tags.is_empty() {
            pairs.push(("tags", tags.join(",")));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        pairs
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// The logged-in dashboard user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `data` payload of login/register responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    pub current_password: String,
    pub new_password: String,
}

// =============================================================================
// INTEGRATIONS
// =============================================================================

/// Result of a media-host upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedMedia {
    pub url: String,
    pub public_id: String,
}

/// Contact-form submission forwarded to the email service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub const DEFAULT_UPLOAD_PRESET: &str = "ml_default";

/// Public, non-secret settings served by the host at `/api/site-config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub cloudinary_cloud_name: Option<String>,
    #[serde(default = "default_upload_preset")]
    pub cloudinary_upload_preset: String,
    #[serde(default)]
    pub emailjs_service_id: Option<String>,
    #[serde(default)]
    pub emailjs_template_id: Option<String>,
    #[serde(default)]
    pub emailjs_public_key: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cloudinary_cloud_name: None,
            cloudinary_upload_preset: default_upload_preset(),
            emailjs_service_id: None,
            emailjs_template_id: None,
            emailjs_public_key: None,
        }
    }
}

fn default_upload_preset() -> String {
    DEFAULT_UPLOAD_PRESET.to_owned()
}
