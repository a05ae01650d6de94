use super::*;

#[test]
fn tab_labels_are_distinct() {
    assert_eq!(tab_label(DashboardTab::Videos), "Video Reels");
    assert_eq!(tab_label(DashboardTab::Reviews), "Reviews");
}

#[test]
fn delete_prompt_names_the_entity() {
    assert!(delete_prompt::<VideoReel>().contains("this video?"));
    assert!(delete_prompt::<Review>().contains("this review?"));
}

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  short  ", 10), "short");
}

#[test]
fn excerpt_cuts_on_char_boundary() {
    assert_eq!(excerpt("ünïcödé text here", 7), "ünïcödé…");
    assert_eq!(excerpt("hello world again", 6), "hello…");
}
