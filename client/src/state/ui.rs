//! Page chrome state: navbar scroll styling and the mobile menu.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the navbar switches to its solid style.
pub const NAV_SCROLLED_AFTER: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "/#home" },
    NavLink { label: "About", href: "/#about" },
    NavLink { label: "Showreel", href: "/#showreel" },
    NavLink { label: "Testimonials", href: "/#testimonials" },
    NavLink { label: "Contact", href: "/#contact" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Returns `true` when the scrolled flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAV_SCROLLED_AFTER;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
