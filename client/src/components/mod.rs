//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the public sections and dashboard chrome while
//! reading/writing shared state from Leptos context providers. Section
//! components own their fetches; dashboard pieces defer to page callbacks.

pub mod about;
pub mod confirm_dialog;
pub mod contact;
pub mod easter_egg;
pub mod error_fallback;
pub mod file_upload_field;
pub mod footer;
pub mod hero;
pub mod loading_spinner;
pub mod navbar;
pub mod review_form_modal;
pub mod services;
pub mod showreel;
pub mod testimonials;
pub mod toast_host;
pub mod video_form_modal;
