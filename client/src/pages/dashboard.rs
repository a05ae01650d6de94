//! Dashboard page: CRUD over video reels and reviews.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only authenticated route. It lists the active tab's records,
//! opens create/edit modals, uploads media, and confirms deletes. All state
//! transitions live in `state::dashboard`; this module wires them to API
//! calls and toasts.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends as an error toast. A 401 is handled earlier by the API
//! layer (token cleared, hard navigation home).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::review_form_modal::ReviewFormModal;
use crate::components::video_form_modal::VideoFormModal;
use crate::net::types::{Review, VideoReel};
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, DashboardTab, Entity, ModalMode};
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

/// Heading and button copy for a tab.
#[must_use]
pub fn tab_label(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Videos => "Video Reels",
        DashboardTab::Reviews => "Reviews",
    }
}

/// Confirmation text for deleting an entity of kind `T`.
#[must_use]
pub fn delete_prompt<T: Entity>() -> String {
    format!("Are you sure you want to delete this {}? This cannot be undone.", T::NOUN)
}

/// Trim long descriptions for list rows.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

// =============================================================================
// FLOWS
// =============================================================================

#[cfg(feature = "hydrate")]
mod flows {
    use leptos::prelude::*;

    use crate::net::api;
    use crate::net::types::{ReelQuery, Review, VideoReel};
    use crate::state::dashboard::{
        DashboardState, DashboardTab, FETCH_FAILED_MESSAGE, SubmitTarget, delete_failure_message,
        delete_success_message, submit_failure_message, submit_loading_message, submit_success_message,
    };
    use crate::state::toast::{ToastKind, ToastState, notify, settle};

    pub fn fetch(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>, tab: DashboardTab) {
        leptos::task::spawn_local(async move {
            let failed = match tab {
                DashboardTab::Videos => {
                    dashboard.update(|d| d.videos.begin_fetch());
                    let result = api::get_video_reels(&ReelQuery::default()).await;
                    dashboard.try_update(|d| d.videos.finish_fetch(result)).flatten()
                }
                DashboardTab::Reviews => {
                    dashboard.update(|d| d.reviews.begin_fetch());
                    let result = api::get_reviews().await;
                    dashboard.try_update(|d| d.reviews.finish_fetch(result)).flatten()
                }
            };
            if let Some(err) = failed {
                log::warn!("dashboard fetch failed: {err}");
                notify(toasts, ToastKind::Error, FETCH_FAILED_MESSAGE);
            }
        });
    }

    pub fn submit_video(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>) {
        let submission = match dashboard.try_update(DashboardState::begin_video_submit) {
            Some(Ok(submission)) => submission,
            Some(Err(rejection)) => {
                if let Some(msg) = rejection.message() {
                    notify(toasts, ToastKind::Error, msg);
                }
                return;
            }
            None => return,
        };
        let editing = matches!(submission.target, SubmitTarget::Update(_));
        let toast_id = toasts.try_update(|t| t.loading(submit_loading_message::<VideoReel>(editing))).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let result = match &submission.target {
                SubmitTarget::Create => api::create_video_reel(&submission.payload).await.map(drop),
                SubmitTarget::Update(id) => api::update_video_reel(id, &submission.payload).await.map(drop),
            };
            match dashboard.try_update(|d| d.videos.finish_submit(submission.session, result)).flatten() {
                None => {
                    settle(toasts, toast_id, ToastKind::Success, submit_success_message::<VideoReel>(editing));
                    fetch(dashboard, toasts, DashboardTab::Videos);
                }
                Some(err) => {
                    log::warn!("video save failed: {err}");
                    settle(toasts, toast_id, ToastKind::Error, submit_failure_message::<VideoReel>(&err));
                }
            }
        });
    }

    pub fn submit_review(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>) {
        let submission = match dashboard.try_update(DashboardState::begin_review_submit) {
            Some(Ok(submission)) => submission,
            Some(Err(rejection)) => {
                if let Some(msg) = rejection.message() {
                    notify(toasts, ToastKind::Error, msg);
                }
                return;
            }
            None => return,
        };
        let editing = matches!(submission.target, SubmitTarget::Update(_));
        let toast_id = toasts.try_update(|t| t.loading(submit_loading_message::<Review>(editing))).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let result = match &submission.target {
                SubmitTarget::Create => api::create_review(&submission.payload).await.map(drop),
                SubmitTarget::Update(id) => api::update_review(id, &submission.payload).await.map(drop),
            };
            match dashboard.try_update(|d| d.reviews.finish_submit(submission.session, result)).flatten() {
                None => {
                    settle(toasts, toast_id, ToastKind::Success, submit_success_message::<Review>(editing));
                    fetch(dashboard, toasts, DashboardTab::Reviews);
                }
                Some(err) => {
                    log::warn!("review save failed: {err}");
                    settle(toasts, toast_id, ToastKind::Error, submit_failure_message::<Review>(&err));
                }
            }
        });
    }

    pub fn delete_video(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>) {
        let Some(id) = dashboard.try_update(|d| d.videos.confirm_delete()).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::delete_video_reel(&id).await;
            match dashboard.try_update(|d| d.videos.finish_delete(&id, result)).flatten() {
                None => notify(toasts, ToastKind::Success, delete_success_message::<VideoReel>()),
                Some(err) => {
                    log::warn!("video delete failed: {err}");
                    notify(toasts, ToastKind::Error, delete_failure_message::<VideoReel>());
                }
            }
        });
    }

    pub fn delete_review(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>) {
        let Some(id) = dashboard.try_update(|d| d.reviews.confirm_delete()).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::delete_review(&id).await;
            match dashboard.try_update(|d| d.reviews.finish_delete(&id, result)).flatten() {
                None => notify(toasts, ToastKind::Success, delete_success_message::<Review>()),
                Some(err) => {
                    log::warn!("review delete failed: {err}");
                    notify(toasts, ToastKind::Error, delete_failure_message::<Review>());
                }
            }
        });
    }
}

#[cfg(not(feature = "hydrate"))]
mod flows {
    use leptos::prelude::*;

    use crate::state::dashboard::{DashboardState, DashboardTab};
    use crate::state::toast::ToastState;

    pub fn fetch(_: RwSignal<DashboardState>, _: RwSignal<ToastState>, _: DashboardTab) {}
    pub fn submit_video(_: RwSignal<DashboardState>, _: RwSignal<ToastState>) {}
    pub fn submit_review(_: RwSignal<DashboardState>, _: RwSignal<ToastState>) {}
    pub fn delete_video(_: RwSignal<DashboardState>, _: RwSignal<ToastState>) {}
    pub fn delete_review(_: RwSignal<DashboardState>, _: RwSignal<ToastState>) {}
}

// =============================================================================
// PAGE
// =============================================================================

/// Dashboard page. Redirects to `/` once auth has loaded without a token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    install_unauth_redirect(auth, use_navigate());

    // Fetch the active tab once the session is known, and again on switch.
    let fetched_tab = RwSignal::new(None::<DashboardTab>);
    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) {
            return;
        }
        let tab = dashboard.with(|d| d.tab);
        if fetched_tab.get_untracked() == Some(tab) {
            return;
        }
        fetched_tab.set(Some(tab));
        flows::fetch(dashboard, toasts, tab);
    });

    let on_video_submit = Callback::new(move |()| flows::submit_video(dashboard, toasts));
    let on_review_submit = Callback::new(move |()| flows::submit_review(dashboard, toasts));
    let on_video_close = Callback::new(move |()| dashboard.update(|d| d.videos.close_modal()));
    let on_review_close = Callback::new(move |()| dashboard.update(|d| d.reviews.close_modal()));
    let on_video_delete = Callback::new(move |()| flows::delete_video(dashboard, toasts));
    let on_review_delete = Callback::new(move |()| flows::delete_review(dashboard, toasts));
    let on_video_delete_cancel = Callback::new(move |()| dashboard.update(|d| d.videos.cancel_delete()));
    let on_review_delete_cancel = Callback::new(move |()| dashboard.update(|d| d.reviews.cancel_delete()));

    // Signing out drops the token; the unauth redirect above takes it home.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout request failed: {e}");
            }
            auth.update(AuthState::sign_out);
        });
    };

    let active_tab = move || dashboard.with(|d| d.tab);
    let on_add = move |_| match active_tab() {
        DashboardTab::Videos => dashboard.update(|d| d.videos.open_create()),
        DashboardTab::Reviews => dashboard.update(|d| d.reviews.open_create()),
    };
    let tab_button = move |tab: DashboardTab| {
        view! {
            <button
                class=move || if active_tab() == tab { "dashboard__tab dashboard__tab--active" } else { "dashboard__tab" }
                on:click=move |_| {
                    dashboard.update(|d| {
                        d.switch_tab(tab);
                    });
                }
            >
                {tab_label(tab)}
            </button>
        }
    };

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Editor Dashboard"</h1>
                    <span class="dashboard-page__user">{move || auth.with(AuthState::display_name)}</span>
                    <a class="btn btn--link" href="/">"Back to site"</a>
                    <a class="btn" href="/profile">"Profile"</a>
                    <button class="btn btn--danger" on:click=on_logout>"Logout"</button>
                </header>
                <nav class="dashboard__tabs">
                    {tab_button(DashboardTab::Videos)}
                    {tab_button(DashboardTab::Reviews)}
                    <span class="dashboard__spacer"></span>
                    <button class="btn btn--primary" on:click=on_add>
                        {move || match active_tab() {
                            DashboardTab::Videos => "+ Add Video",
                            DashboardTab::Reviews => "+ Add Review",
                        }}
                    </button>
                </nav>
                {move || match active_tab() {
                    DashboardTab::Videos => view! { <VideoList/> }.into_any(),
                    DashboardTab::Reviews => view! { <ReviewList/> }.into_any(),
                }}
                <Show when=move || dashboard.with(|d| d.videos.modal != ModalMode::Closed)>
                    <VideoFormModal on_submit=on_video_submit on_close=on_video_close/>
                </Show>
                <Show when=move || dashboard.with(|d| d.reviews.modal != ModalMode::Closed)>
                    <ReviewFormModal on_submit=on_review_submit on_close=on_review_close/>
                </Show>
                <Show when=move || dashboard.with(|d| d.videos.pending_delete.is_some())>
                    <ConfirmDialog
                        title="Delete Video"
                        message={delete_prompt::<VideoReel>()}
                        on_confirm=on_video_delete
                        on_cancel=on_video_delete_cancel
                    />
                </Show>
                <Show when=move || dashboard.with(|d| d.reviews.pending_delete.is_some())>
                    <ConfirmDialog
                        title="Delete Review"
                        message={delete_prompt::<Review>()}
                        on_confirm=on_review_delete
                        on_cancel=on_review_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn VideoList() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <Show when=move || !dashboard.with(|d| d.videos.is_loading()) fallback=|| view! { <LoadingSpinner/> }>
            <Show when=move || dashboard.with(|d| d.videos.items.is_empty())>
                <p class="dashboard__empty">"No videos yet. Add your first reel."</p>
            </Show>
            <div class="dashboard__list">
                <For
                    each=move || dashboard.with(|d| d.videos.items.clone())
                    key=|r| (r.id.clone(), r.title.clone(), r.thumbnail_url.clone())
                    children=move |reel: VideoReel| {
                        let edit_id = reel.id.clone();
                        let delete_id = reel.id.clone();
                        let category = reel.category.as_ref().map(|c| c.label().to_owned()).unwrap_or_default();
                        view! {
                            <article class="dashboard-row">
                                <img class="dashboard-row__thumb" src=reel.thumbnail_url alt=""/>
                                <div class="dashboard-row__body">
                                    <h3>{reel.title}</h3>
                                    <p class="dashboard-row__meta">{category} " " {reel.tags.join(", ")}</p>
                                    <p>{excerpt(&reel.description, 120)}</p>
                                </div>
                                <div class="dashboard-row__actions">
                                    <button class="btn" on:click=move |_| {
                                        dashboard.update(|d| {
                                            d.videos.open_edit(&edit_id);
                                        });
                                    }>
                                        "Edit"
                                    </button>
                                    <button class="btn btn--danger" on:click=move |_| dashboard.update(|d| d.videos.request_delete(&delete_id))>
                                        "Delete"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn ReviewList() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    view! {
        <Show when=move || !dashboard.with(|d| d.reviews.is_loading()) fallback=|| view! { <LoadingSpinner/> }>
            <Show when=move || dashboard.with(|d| d.reviews.items.is_empty())>
                <p class="dashboard__empty">"No reviews yet."</p>
            </Show>
            <div class="dashboard__list">
                <For
                    each=move || dashboard.with(|d| d.reviews.items.clone())
                    key=|r| (r.id.clone(), r.content.clone(), r.rating.get())
                    children=move |review: Review| {
                        let edit_id = review.id.clone();
                        let delete_id = review.id.clone();
                        view! {
                            <article class="dashboard-row">
                                <div class="dashboard-row__body">
                                    <h3>{review.user_name}</h3>
                                    <p class="dashboard-row__meta">{format!("{} / 5", review.rating.get())}</p>
                                    <p>{excerpt(&review.content, 160)}</p>
                                </div>
                                <div class="dashboard-row__actions">
                                    <button class="btn" on:click=move |_| {
                                        dashboard.update(|d| {
                                            d.reviews.open_edit(&edit_id);
                                        });
                                    }>
                                        "Edit"
                                    </button>
                                    <button class="btn btn--danger" on:click=move |_| dashboard.update(|d| d.reviews.request_delete(&delete_id))>
                                        "Delete"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
        </Show>
    }
}
