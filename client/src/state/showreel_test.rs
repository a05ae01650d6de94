use super::*;

fn reel(id: &str, category: Category) -> VideoReel {
    VideoReel {
        id: id.to_owned(),
        title: format!("Reel {id}"),
        description: String::new(),
        video_url: format!("https://cdn.example/{id}.mp4"),
        thumbnail_url: String::new(),
        category: Some(category),
        tags: Vec::new(),
        created_at: None,
    }
}

#[test]
fn filter_bar_starts_with_all_work() {
    let bar = CategoryFilter::bar();
    assert_eq!(bar[0], CategoryFilter::All);
    assert_eq!(bar[0].label(), "All Work");
    let ids: Vec<_> = bar.iter().filter_map(CategoryFilter::category).map(|c| c.id().to_owned()).collect();
    assert_eq!(ids, vec!["wedding", "commercial", "travel", "shortfilm"]);
}

#[test]
fn all_maps_to_unfiltered_query() {
    assert_eq!(CategoryFilter::All.category(), None);
    assert_eq!(CategoryFilter::Only(Category::Travel).category(), Some(Category::Travel));
}

#[test]
fn selecting_same_filter_does_not_refetch() {
    let mut state = ShowreelState::default();
    let first = state.begin_fetch();
    state.finish_fetch(first, Ok(vec![reel("a", Category::Wedding)]));
    assert_eq!(state.select(CategoryFilter::All), None);
    assert!(state.select(CategoryFilter::Only(Category::Wedding)).is_some());
    assert!(state.loading);
}

#[test]
fn stale_responses_are_dropped() {
    let mut state = ShowreelState::default();
    let old = state.select(CategoryFilter::Only(Category::Travel)).unwrap();
    let new = state.select(CategoryFilter::Only(Category::Wedding)).unwrap();
    assert!(!state.finish_fetch(old, Ok(vec![reel("t", Category::Travel)])));
    assert!(state.loading);
    assert!(state.finish_fetch(new, Ok(vec![reel("w", Category::Wedding)])));
    assert_eq!(state.reels.len(), 1);
    assert_eq!(state.reels[0].id, "w");
}

#[test]
fn fetch_error_clears_list_and_records_message() {
    let mut state = ShowreelState::default();
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Err(ApiError::Network("offline".to_owned())));
    assert!(state.reels.is_empty());
    assert_eq!(state.error.as_deref(), Some("network error: offline"));
    assert!(!state.loading);
}

#[test]
fn play_opens_known_reel_only() {
    let mut state = ShowreelState::default();
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Ok(vec![reel("a", Category::Wedding)]));
    state.play("missing");
    assert!(state.playing.is_none());
    state.play("a");
    assert_eq!(state.playing.as_ref().map(|r| r.id.as_str()), Some("a"));
    state.stop();
    assert!(state.playing.is_none());
}
