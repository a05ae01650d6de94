//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_fallback::ErrorFallback;
use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
};
use crate::state::{auth::AuthState, config::ConfigState, dashboard::DashboardState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the stored session, loads the
/// public site configuration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let config = RwSignal::new(ConfigState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(config);
    provide_context(dashboard);

    // Effects only run in the browser, so the server render keeps
    // `loading = true` and hydration starts from the same state.
    Effect::new(move || {
        auth.update(|a| a.restore(crate::util::storage::read_token()));
    });

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_site_config().await;
            if let Err(e) = &result {
                log::warn!("site config unavailable: {e}");
            }
            config.update(|c| c.apply(result));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/reelfolio.css"/>
        <Title text="Jayed | Video Editor"/>
        <Meta name="description" content="Showreel and services of a freelance video editor."/>

        <Router>
            <Navbar/>
            <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors/> }>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </ErrorBoundary>
            <ToastHost/>
        </Router>
    }
}
