//! Easter-egg vault: riddle gate, hints and unlock state.
//!
//! The vault opens either by answering the current riddle or by scrolling to
//! the very bottom of the page (once per visit). Wrong answers only bump a
//! shake counter the view animates on.

#[cfg(test)]
#[path = "riddle_test.rs"]
mod riddle_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
    pub hints: [&'static str; 3],
}

pub const RIDDLES: [Riddle; 2] = [
    Riddle {
        question: "I capture moments but don't use film. I tell stories without words. What am I?",
        answer: "camera",
        hints: [
            "I have lenses but don't wear them",
            "My best work often happens in low light",
            "I'm a director's best friend",
        ],
    },
    Riddle {
        question: "I'm always running but never get tired. I show your work but don't get paid. What am I?",
        answer: "timeline",
        hints: [
            "Editors spend hours with me",
            "I'm linear but can be manipulated",
            "I live inside your editing software",
        ],
    },
];

/// Distance from the page bottom, in CSS pixels, that counts as "reached".
pub const SCROLL_UNLOCK_THRESHOLD: f64 = 100.0;

#[must_use]
pub fn is_near_bottom(viewport_height: f64, scroll_y: f64, page_height: f64) -> bool {
    viewport_height + scroll_y >= page_height - SCROLL_UNLOCK_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VaultTab {
    #[default]
    FirstEdit,
    Bloopers,
    BehindScenes,
}

impl VaultTab {
    pub const ALL: [Self; 3] = [Self::FirstEdit, Self::Bloopers, Self::BehindScenes];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstEdit => "First Edit",
            Self::Bloopers => "Bloopers",
            Self::BehindScenes => "Behind Scenes",
        }
    }

    #[must_use]
    pub fn video_src(self) -> &'static str {
        match self {
            Self::FirstEdit => "/assets/first-edit.mp4",
            Self::Bloopers => "/assets/bloopers.mp4",
            Self::BehindScenes => "/assets/behind-scenes.mp4",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    AlreadyUnlocked,
}

#[derive(Clone, Debug, Default)]
pub struct EasterEggState {
    pub current_riddle: usize,
    hint_index: usize,
    pub current_hint: Option<&'static str>,
    pub unlocked: bool,
    pub show_riddle: bool,
    pub show_vault: bool,
    pub active_tab: VaultTab,
    /// Incremented on each wrong answer; views key a shake animation on it.
    pub wrong_answers: u32,
    scroll_unlock_spent: bool,
}

impl EasterEggState {
    #[must_use]
    pub fn riddle(&self) -> &'static Riddle {
        &RIDDLES[self.current_riddle % RIDDLES.len()]
    }

    /// Lock-button click: show the riddle while locked, the vault once open.
    pub fn open(&mut self) {
        if self.unlocked {
            self.show_vault = true;
            return;
        }
        self.show_riddle = true;
        self.current_hint = None;
        self.hint_index = 0;
        self.wrong_answers = 0;
    }

    /// Shake animation class for the riddle dialog. Alternates so each wrong
    /// answer restarts the animation; none until the first miss.
    #[must_use]
    pub fn shake_class(&self) -> Option<&'static str> {
        match self.wrong_answers {
            0 => None,
            n if n % 2 == 1 => Some("riddle--shake-a"),
            _ => Some("riddle--shake-b"),
        }
    }

    pub fn close_riddle(&mut self) {
        self.show_riddle = false;
    }

    /// Compare against the displayed riddle, ignoring case and surrounding
    /// whitespace.
    pub fn submit_answer(&mut self, answer: &str) -> AnswerOutcome {
        if self.unlocked {
            return AnswerOutcome::AlreadyUnlocked;
        }
        if answer.trim().eq_ignore_ascii_case(self.riddle().answer) {
            self.unlock();
            self.show_riddle = false;
            AnswerOutcome::Correct
        } else {
            self.wrong_answers += 1;
            AnswerOutcome::Incorrect
        }
    }

    /// Reveal the next hint, cycling through the current riddle's hints.
    pub fn next_hint(&mut self) -> &'static str {
        let hints = &self.riddle().hints;
        let hint = hints[self.hint_index % hints.len()];
        self.current_hint = Some(hint);
        self.hint_index = (self.hint_index + 1) % hints.len();
        hint
    }

    /// Move to the next riddle, resetting hints.
    pub fn next_riddle(&mut self) {
        self.current_riddle = (self.current_riddle + 1) % RIDDLES.len();
        self.current_hint = None;
        self.hint_index = 0;
    }

    /// Scroll-to-bottom unlock. Only the first arrival per visit counts.
    pub fn unlock_by_scroll(&mut self) -> bool {
        if self.scroll_unlock_spent || self.unlocked {
            return false;
        }
        self.scroll_unlock_spent = true;
        self.unlock();
        true
    }

    fn unlock(&mut self) {
        self.unlocked = true;
        self.show_vault = true;
    }

    /// Close the vault and lock it again.
    pub fn close_vault(&mut self) {
        self.show_vault = false;
        self.unlocked = false;
    }

    pub fn select_tab(&mut self, tab: VaultTab) {
        self.active_tab = tab;
    }
}
