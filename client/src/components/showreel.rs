//! Showreel section: category filter bar, reel grid, and player modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reels come from `GET /video-reels`, filtered server-side by category. A
//! filter change refetches; the grid shows whatever the latest request
//! returned.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::net::types::VideoReel;
use crate::state::showreel::{CategoryFilter, ShowreelState};

fn load(state: RwSignal<ShowreelState>, seq: u64, filter: &CategoryFilter) {
    #[cfg(feature = "hydrate")]
    {
        let category = filter.category();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_video_reels_by_category(category).await;
            if let Err(e) = &result {
                log::warn!("showreel fetch failed: {e}");
            }
            state.update(|s| {
                s.finish_fetch(seq, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, seq, filter);
    }
}

#[component]
pub fn Showreel() -> impl IntoView {
    let state = RwSignal::new(ShowreelState::default());

    Effect::new(move || {
        if let Some(seq) = state.try_update(ShowreelState::begin_fetch) {
            load(state, seq, &CategoryFilter::All);
        }
    });

    let select = move |filter: CategoryFilter| {
        if let Some(Some(seq)) = state.try_update(|s| s.select(filter.clone())) {
            load(state, seq, &filter);
        }
    };

    view! {
        <section id="showreel" class="showreel">
            <h2 class="section-title">"Showreel"</h2>
            <p class="section-subtitle">"Select a category to view my work"</p>
            <div class="showreel__filters">
                {CategoryFilter::bar()
                    .into_iter()
                    .map(|filter| {
                        let label = filter.label().to_owned();
                        let class = {
                            let filter = filter.clone();
                            move || {
                                if state.with(|s| s.filter == filter) {
                                    "showreel__filter showreel__filter--active"
                                } else {
                                    "showreel__filter"
                                }
                            }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| select(filter.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || state.with(|s| s.loading) fallback=move || view! { <ReelGrid state=state/> }>
                <LoadingSpinner label="Loading reels..."/>
            </Show>
            <Show when=move || state.with(|s| s.playing.is_some())>
                <PlayerModal state=state/>
            </Show>
        </section>
    }
}

#[component]
fn ReelGrid(state: RwSignal<ShowreelState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.error.is_some())>
            <p class="showreel__error">"Couldn't load reels right now."</p>
        </Show>
        <Show when=move || state.with(|s| s.error.is_none() && s.reels.is_empty())>
            <p class="showreel__empty">"No reels in this category yet."</p>
        </Show>
        <div class="showreel__grid">
            <For
                each=move || state.get().reels
                key=|r| r.id.clone()
                children=move |reel: VideoReel| {
                    let id = reel.id.clone();
                    view! { <ReelCard reel=reel on_play=Callback::new(move |()| state.update(|s| s.play(&id)))/> }
                }
            />
        </div>
    }
}

#[component]
fn ReelCard(reel: VideoReel, on_play: Callback<()>) -> impl IntoView {
    let category = reel.category.as_ref().map(|c| c.label().to_owned()).unwrap_or_default();
    let poster = (!reel.thumbnail_url.is_empty()).then(|| reel.thumbnail_url.clone());

    view! {
        <article class="reel-card" on:click=move |_| on_play.run(())>
            <div class="reel-card__media">
                <video class="reel-card__video" src=reel.video_url poster=poster muted=true preload="metadata"></video>
                <span class="reel-card__play" aria-hidden="true">"▶"</span>
            </div>
            <div class="reel-card__meta">
                <h3 class="reel-card__title">{reel.title}</h3>
                <span class="reel-card__category">{category}</span>
            </div>
        </article>
    }
}

#[component]
fn PlayerModal(state: RwSignal<ShowreelState>) -> impl IntoView {
    let close = move || state.update(ShowreelState::stop);
    let reel = move || state.with(|s| s.playing.clone());

    view! {
        <div class="player-modal" on:click=move |_| close()>
            <div class="player-modal__body" on:click=move |ev| ev.stop_propagation()>
                <button class="player-modal__close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
                {move || {
                    reel()
                        .map(|r| {
                            view! {
                                <video class="player-modal__video" src=r.video_url controls=true autoplay=true></video>
                                <h3 class="player-modal__title">{r.title}</h3>
                                <p class="player-modal__description">{r.description}</p>
                            }
                        })
                }}
            </div>
        </div>
    }
}
