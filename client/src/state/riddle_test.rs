use super::*;

#[test]
fn correct_answer_unlocks_case_insensitively() {
    let mut state = EasterEggState::default();
    state.open();
    assert!(state.show_riddle);
    assert_eq!(state.submit_answer("  CaMeRa "), AnswerOutcome::Correct);
    assert!(state.unlocked);
    assert!(state.show_vault);
    assert!(!state.show_riddle);
}

#[test]
fn wrong_answers_never_unlock() {
    let mut state = EasterEggState::default();
    state.open();
    for attempt in ["timeline", "", "cameras", "lens"] {
        assert_eq!(state.submit_answer(attempt), AnswerOutcome::Incorrect);
    }
    assert!(!state.unlocked);
    assert!(!state.show_vault);
    assert_eq!(state.wrong_answers, 4);
}

#[test]
fn answer_must_match_the_displayed_riddle() {
    let mut state = EasterEggState::default();
    state.next_riddle();
    assert_eq!(state.riddle().answer, "timeline");
    assert_eq!(state.submit_answer("camera"), AnswerOutcome::Incorrect);
    assert_eq!(state.submit_answer("Timeline"), AnswerOutcome::Correct);
}

#[test]
fn answering_after_unlock_is_idempotent() {
    let mut state = EasterEggState::default();
    state.submit_answer("camera");
    assert_eq!(state.submit_answer("camera"), AnswerOutcome::AlreadyUnlocked);
    assert_eq!(state.submit_answer("nope"), AnswerOutcome::AlreadyUnlocked);
    assert!(state.unlocked);
    assert_eq!(state.wrong_answers, 0);
}

#[test]
fn hints_cycle_and_reset_on_open() {
    let mut state = EasterEggState::default();
    let hints = RIDDLES[0].hints;
    assert_eq!(state.next_hint(), hints[0]);
    assert_eq!(state.next_hint(), hints[1]);
    assert_eq!(state.next_hint(), hints[2]);
    assert_eq!(state.next_hint(), hints[0]);

    state.open();
    assert_eq!(state.current_hint, None);
    assert_eq!(state.next_hint(), hints[0]);
}

#[test]
fn scroll_unlock_only_fires_once_per_visit() {
    let mut state = EasterEggState::default();
    assert!(state.unlock_by_scroll());
    assert!(state.show_vault);
    state.close_vault();
    assert!(!state.unlocked);
    assert!(!state.unlock_by_scroll());
    assert!(!state.unlocked);
}

#[test]
fn open_after_unlock_shows_vault() {
    let mut state = EasterEggState::default();
    state.submit_answer("camera");
    state.show_vault = false;
    state.open();
    assert!(state.show_vault);
    assert!(!state.show_riddle);
}

#[test]
fn near_bottom_uses_threshold() {
    assert!(is_near_bottom(800.0, 1150.0, 2000.0));
    assert!(is_near_bottom(800.0, 1100.0, 2000.0));
    assert!(!is_near_bottom(800.0, 1099.0, 2000.0));
}

#[test]
fn select_tab_switches_vault_video() {
    let mut state = EasterEggState::default();
    assert_eq!(state.active_tab.video_src(), "/assets/first-edit.mp4");
    state.select_tab(VaultTab::Bloopers);
    assert_eq!(state.active_tab.video_src(), "/assets/bloopers.mp4");
}

#[test]
fn shake_starts_only_after_a_wrong_answer() {
    let mut state = EasterEggState::default();
    state.open();
    assert_eq!(state.shake_class(), None);

    state.submit_answer("film");
    assert_eq!(state.shake_class(), Some("riddle--shake-a"));
    state.submit_answer("reel");
    assert_eq!(state.shake_class(), Some("riddle--shake-b"));

    state.close_riddle();
    state.open();
    assert_eq!(state.shake_class(), None);
}
