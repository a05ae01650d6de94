//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, location, scroll) from
//! page and component logic. Each helper no-ops during server rendering.

pub mod auth;
pub mod nav;
pub mod scroll;
pub mod storage;
