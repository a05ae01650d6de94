//! Public showreel section: category filter, fetched reels, player modal.

#[cfg(test)]
#[path = "showreel_test.rs"]
mod showreel_test;

use crate::net::error::ApiError;
use crate::net::types::{Category, VideoReel};

/// Filter-bar selection. `All` requests the unfiltered collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Buttons shown in the filter bar, in display order.
    #[must_use]
    pub fn bar() -> Vec<Self> {
        vec![
            Self::All,
            Self::Only(Category::Wedding),
            Self::Only(Category::Commercial),
            Self::Only(Category::Travel),
            Self::Only(Category::ShortFilm),
        ]
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(c) => Some(c.clone()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Work",
            Self::Only(c) => c.label(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShowreelState {
    pub filter: CategoryFilter,
    pub reels: Vec<VideoReel>,
    pub loading: bool,
    pub error: Option<String>,
    /// Reel open in the player modal.
    pub playing: Option<VideoReel>,
    request_seq: u64,
}

impl ShowreelState {
    /// Select a filter and start a fetch. Returns the request sequence the
    /// response must carry, or `None` if the filter did not change.
    pub fn select(&mut self, filter: CategoryFilter) -> Option<u64> {
        if self.filter == filter && self.request_seq > 0 {
            return None;
        }
        self.filter = filter;
        Some(self.begin_fetch())
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a fetch result. Responses for a superseded filter are dropped.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<VideoReel>, ApiError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(reels) => self.reels = reels,
            Err(e) => {
                self.reels.clear();
                self.error = Some(e.message());
            }
        }
        true
    }

    pub fn play(&mut self, id: &str) {
        self.playing = self.reels.iter().find(|r| r.id == id).cloned();
    }

    pub fn stop(&mut self) {
        self.playing = None;
    }
}
