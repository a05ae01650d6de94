//! Landing hero with the headline and primary calls to action.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__grain" aria-hidden="true"></div>
            <div class="hero__film-strip" aria-hidden="true">
                {(0..6).map(|_| view! { <span class="hero__frame"></span> }).collect::<Vec<_>>()}
            </div>
            <div class="hero__content">
                <p class="hero__eyebrow">"VIDEO EDITOR / COLORIST / STORYTELLER"</p>
                <h1 class="hero__title">
                    "Cutting stories that "
                    <span class="hero__title--accent">"move"</span>
                </h1>
                <p class="hero__subtitle">
                    "Weddings, commercials, travel films and shorts, edited frame by frame until they feel right."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#showreel">
                        "Watch Showreel"
                    </a>
                    <a class="btn" href="#contact">
                        "Start a Project"
                    </a>
                </div>
            </div>
        </section>
    }
}
