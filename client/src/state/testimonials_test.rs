use super::*;
use crate::net::types::Rating;

fn review(id: &str) -> Review {
    Review {
        id: id.to_owned(),
        user_name: format!("Client {id}"),
        content: "Great work".to_owned(),
        rating: Rating::clamped(4),
        screenshot: None,
        created_at: None,
    }
}

fn loaded(n: usize) -> TestimonialsState {
    let mut state = TestimonialsState::default();
    state.begin_fetch();
    state.finish_fetch(Ok((0..n).map(|i| review(&i.to_string())).collect()));
    state
}

#[test]
fn shows_first_three_until_toggled() {
    let mut state = loaded(5);
    assert!(state.has_more());
    assert_eq!(state.visible().len(), 3);
    state.toggle_show_all();
    assert_eq!(state.visible().len(), 5);
}

#[test]
fn short_lists_show_everything() {
    let state = loaded(2);
    assert!(!state.has_more());
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn expand_toggles_per_review() {
    let mut state = loaded(3);
    state.toggle_expand("1");
    assert_eq!(state.expanded.as_deref(), Some("1"));
    state.toggle_expand("2");
    assert_eq!(state.expanded.as_deref(), Some("2"));
    state.toggle_expand("2");
    assert_eq!(state.expanded, None);
}

#[test]
fn fetch_error_keeps_previous_reviews() {
    let mut state = loaded(2);
    state.begin_fetch();
    state.finish_fetch(Err(ApiError::Network("down".to_owned())));
    assert_eq!(state.reviews.len(), 2);
    assert!(state.error.is_some());
}

#[test]
fn stars_fill_to_rating() {
    assert_eq!(stars(Rating::clamped(3)), [true, true, true, false, false]);
    assert_eq!(stars(Rating::clamped(0)), [true, false, false, false, false]);
}
