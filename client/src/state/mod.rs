//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page section (`dashboard`, `contact`, `riddle`, etc.) so
//! components depend on small focused models. Each model is a plain struct
//! held in an `RwSignal` context and tested without a browser.

pub mod auth;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod profile;
pub mod riddle;
pub mod showreel;
pub mod testimonials;
pub mod toast;
pub mod ui;
