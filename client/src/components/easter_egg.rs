//! Hidden vault of behind-the-scenes clips.
//!
//! A lock button opens a riddle; answering it (or scrolling all the way to
//! the bottom of the page, once per visit) opens the vault. Closing the vault
//! locks it again.

use leptos::prelude::*;

use crate::state::riddle::{AnswerOutcome, EasterEggState, VaultTab};

#[component]
pub fn EasterEgg() -> impl IntoView {
    let state = RwSignal::new(EasterEggState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::riddle::is_near_bottom;

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let Some((viewport, scrolled, page)) = crate::util::scroll::page_metrics() else {
                return;
            };
            if is_near_bottom(viewport, scrolled, page) && state.try_update(EasterEggState::unlock_by_scroll) == Some(true) {
                log::info!("vault unlocked by scroll");
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <button
            class="easter-egg__lock"
            aria-label="Secret vault"
            on:click=move |_| state.update(EasterEggState::open)
        >
            {move || if state.with(|s| s.unlocked) { "🔓" } else { "🔒" }}
        </button>
        <Show when=move || state.with(|s| s.show_riddle)>
            <RiddleModal state=state/>
        </Show>
        <Show when=move || state.with(|s| s.show_vault)>
            <VaultModal state=state/>
        </Show>
    }
}

#[component]
fn RiddleModal(state: RwSignal<EasterEggState>) -> impl IntoView {
    let answer = RwSignal::new(String::new());
    let feedback = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let attempt = answer.get_untracked();
        match state.try_update(|s| s.submit_answer(&attempt)) {
            Some(AnswerOutcome::Incorrect) => feedback.set(Some("Not quite. Try again!")),
            Some(AnswerOutcome::Correct | AnswerOutcome::AlreadyUnlocked) | None => {
                answer.set(String::new());
                feedback.set(None);
            }
        }
    };

    let dialog_class = move || {
        match state.with(EasterEggState::shake_class) {
            Some(shake) => format!("dialog riddle {shake}"),
            None => "dialog riddle".to_owned(),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| state.update(EasterEggState::close_riddle)>
            <form class=dialog_class on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Director's Riddle"</h2>
                <p class="riddle__question">{move || state.with(|s| s.riddle().question)}</p>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Your answer"
                    prop:value=move || answer.get()
                    on:input=move |ev| answer.set(event_target_value(&ev))
                />
                {move || feedback.get().map(|text| view! { <p class="riddle__feedback">{text}</p> })}
                {move || state.with(|s| s.current_hint).map(|hint| view! { <p class="riddle__hint">"Hint: " {hint}</p> })}
                <div class="dialog__actions">
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| {
                            state.update(|s| {
                                s.next_hint();
                            });
                        }
                    >
                        "Hint"
                    </button>
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| {
                            state.update(EasterEggState::next_riddle);
                            answer.set(String::new());
                            feedback.set(None);
                        }
                    >
                        "Another riddle"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        "Unlock"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn VaultModal(state: RwSignal<EasterEggState>) -> impl IntoView {
    let active = move || state.with(|s| s.active_tab);

    view! {
        <div class="vault">
            <div class="vault__body">
                <header class="vault__header">
                    <h2>"The Vault"</h2>
                    <button class="vault__close" aria-label="Close vault" on:click=move |_| state.update(EasterEggState::close_vault)>
                        "✕"
                    </button>
                </header>
                <nav class="vault__tabs">
                    {VaultTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || if active() == tab { "vault__tab vault__tab--active" } else { "vault__tab" }
                                    on:click=move |_| state.update(|s| s.select_tab(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                {move || {
                    let tab = active();
                    view! { <video class="vault__video" src=tab.video_src() controls=true autoplay=true></video> }
                }}
            </div>
        </div>
    }
}
