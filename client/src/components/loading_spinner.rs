//! Inline loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            <span class="loading-spinner__reel" aria-hidden="true"></span>
            <span class="loading-spinner__label">{label.unwrap_or_else(|| "Loading...".to_owned())}</span>
        </div>
    }
}
