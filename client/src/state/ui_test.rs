use super::*;

#[test]
fn scrolled_flag_flips_past_threshold() {
    let mut nav = NavState::default();
    assert!(!nav.on_scroll(50.0));
    assert!(!nav.scrolled);
    assert!(nav.on_scroll(51.0));
    assert!(nav.scrolled);
    assert!(!nav.on_scroll(400.0));
    assert!(nav.on_scroll(0.0));
    assert!(!nav.scrolled);
}

#[test]
fn menu_toggles_and_closes() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.close_menu();
    assert!(!nav.menu_open);
}

#[test]
fn nav_links_point_at_home_sections() {
    let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(hrefs, vec!["/#home", "/#about", "/#showreel", "/#testimonials", "/#contact"]);
}
