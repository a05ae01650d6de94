//! # reelfolio-client
//!
//! Leptos + WASM frontend for a video editor's portfolio: public showreel,
//! testimonials and contact sections, plus an authenticated dashboard for
//! managing reels and reviews.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Network calls, storage, and timers only run under `hydrate`;
//! their server-side stand-ins are no-ops.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
