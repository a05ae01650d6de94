//! Window scroll metrics for the navbar and the scroll-unlock easter egg.

/// Current vertical scroll offset, `0.0` outside the browser.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `(viewport height, scroll offset, page height)` for bottom detection.
#[must_use]
pub fn page_metrics() -> Option<(f64, f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let viewport = window.inner_height().ok()?.as_f64()?;
        let scrolled = window.scroll_y().ok()?;
        let body = window.document()?.body()?;
        Some((viewport, scrolled, f64::from(body.offset_height())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
