//! Catch-all route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__title">"SCENE NOT FOUND"</p>
            <p class="not-found__text">"This clip didn't make the final cut."</p>
            <a class="btn btn--primary" href="/">
                "Back to the Reel"
            </a>
        </section>
    }
}
