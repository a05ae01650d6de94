//! Site footer.

use leptos::prelude::*;

use crate::state::ui::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">"JAYED"</div>
            <nav class="footer__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a class="footer__link" href=link.href>{link.label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="footer__social">
                <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                    "Instagram"
                </a>
                <a href="https://vimeo.com" target="_blank" rel="noopener noreferrer" aria-label="Vimeo">
                    "Vimeo"
                </a>
            </div>
            <p class="footer__copy">
                "© All Rights Reserved by "
                <a href="https://trilance.tech" target="_blank" rel="noopener noreferrer">
                    "Trilance"
                </a>
            </p>
        </footer>
    }
}
