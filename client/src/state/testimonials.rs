//! Public testimonials section state.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

use crate::net::error::ApiError;
use crate::net::types::Review;

/// Reviews visible before "Show all" is toggled.
pub const COLLAPSED_COUNT: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct TestimonialsState {
    pub reviews: Vec<Review>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_all: bool,
    /// Review whose screenshot is expanded.
    pub expanded: Option<String>,
}

impl TestimonialsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Review>, ApiError>) {
        self.loading = false;
        match result {
            Ok(reviews) => self.reviews = reviews,
            Err(e) => self.error = Some(e.message()),
        }
    }

    #[must_use]
    pub fn visible(&self) -> &[Review] {
        if self.show_all {
            &self.reviews
        } else {
            &self.reviews[..self.reviews.len().min(COLLAPSED_COUNT)]
        }
    }

    /// Whether the "Show all" toggle is worth rendering.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.reviews.len() > COLLAPSED_COUNT
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn toggle_expand(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }
}

/// Filled/empty star flags for a rating, five in total.
#[must_use]
pub fn stars(rating: crate::net::types::Rating) -> [bool; 5] {
    let filled = usize::from(rating.get());
    std::array::from_fn(|i| i < filled)
}
