//! Top-level error boundary fallback.

use leptos::prelude::*;

/// Rendered when any view below the app root raises an error. Retry reloads
/// the whole document.
#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let details = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="error-fallback">
            <h1 class="error-fallback__title">"Reel Broken!"</h1>
            <p class="error-fallback__text">"Something went wrong while rendering this scene."</p>
            <ul class="error-fallback__details">{details}</ul>
            <button class="btn btn--primary" on:click=move |_| crate::util::nav::reload()>
                "Retry"
            </button>
        </div>
    }
}
