//! Testimonials section backed by `GET /reviews`.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::Review;
use crate::state::testimonials::{TestimonialsState, stars};

#[component]
pub fn Testimonials() -> impl IntoView {
    let state = RwSignal::new(TestimonialsState::default());

    Effect::new(move || {
        state.update(TestimonialsState::begin_fetch);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_reviews().await;
            if let Err(e) = &result {
                log::warn!("reviews fetch failed: {e}");
            }
            state.update(|s| s.finish_fetch(result));
        });
    });

    view! {
        <section id="testimonials" class="testimonials">
            <h2 class="section-title">"Client Love"</h2>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <LoadingSpinner label="Loading reviews..."/> }>
                <Show when=move || state.with(|s| s.error.is_some() && s.reviews.is_empty())>
                    <p class="testimonials__error">"Reviews are unavailable right now."</p>
                </Show>
                <div class="testimonials__grid">
                    <For
                        each=move || state.with(|s| s.visible().to_vec())
                        key=|r| r.id.clone()
                        children=move |review: Review| view! { <ReviewCard review=review state=state/> }
                    />
                </div>
                <Show when=move || state.with(TestimonialsState::has_more)>
                    <button class="btn testimonials__toggle" on:click=move |_| state.update(TestimonialsState::toggle_show_all)>
                        {move || if state.with(|s| s.show_all) { "Show less" } else { "Show all" }}
                    </button>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review, state: RwSignal<TestimonialsState>) -> impl IntoView {
    let expanded = {
        let id = review.id.clone();
        Signal::derive(move || state.with(|s| s.expanded.as_deref() == Some(id.as_str())))
    };
    let on_expand = {
        let id = review.id.clone();
        move |_| state.update(|s| s.toggle_expand(&id))
    };
    let screenshot = review.screenshot.clone();
    let has_screenshot = screenshot.is_some();

    view! {
        <article class="testimonial-card">
            <div class="testimonial-card__stars" aria-label=format!("{} out of 5", review.rating.get())>
                {stars(review.rating)
                    .into_iter()
                    .map(|filled| view! { <span class=if filled { "star star--filled" } else { "star" }>"★"</span> })
                    .collect::<Vec<_>>()}
            </div>
            <blockquote class="testimonial-card__quote">{review.content}</blockquote>
            <p class="testimonial-card__name">{review.user_name}</p>
            <Show when=move || has_screenshot>
                <button class="testimonial-card__expand" on:click=on_expand.clone()>
                    {move || if expanded.get() { "Hide review" } else { "View review" }}
                </button>
            </Show>
            <Show when=move || expanded.get()>
                <img class="testimonial-card__screenshot" src=screenshot.clone() alt="Screenshot of client review"/>
            </Show>
        </article>
    }
}
