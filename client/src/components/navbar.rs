//! Fixed site header with section anchors and session links.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::{NAV_LINKS, NavState};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = RwSignal::new(NavState::default());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            nav.update(|n| {
                n.on_scroll(crate::util::scroll::scroll_y());
            });
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = crate::util::scroll::scroll_y();
            let changed = nav.try_update_untracked(|n| n.on_scroll(y)).unwrap_or(false);
            if changed {
                nav.notify();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_logout = move |_| {
        nav.update(NavState::close_menu);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout().await {
                    log::warn!("logout request failed: {e}");
                }
                auth.update(AuthState::sign_out);
                navigate("/", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    let header_class = move || {
        let n = nav.get();
        let mut class = String::from("navbar");
        if n.scrolled {
            class.push_str(" navbar--scrolled");
        }
        if n.menu_open {
            class.push_str(" navbar--open");
        }
        class
    };

    view! {
        <header class=header_class>
            <a class="navbar__brand" href="/#home">
                <span class="navbar__logo" aria-hidden="true"></span>
                "JAYED"
            </a>
            <nav class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="navbar__link" href=link.href on:click=move |_| nav.update(NavState::close_menu)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="navbar__actions">
                <a class="btn btn--glow navbar__reel" href="/#showreel">
                    "Watch Reel"
                </a>
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| view! { <a class="navbar__link" href="/login">"Login"</a> }
                >
                    <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                    <a class="navbar__link" href="/profile">"Profile"</a>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
    }
}
