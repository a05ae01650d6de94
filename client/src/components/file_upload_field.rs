//! File input that uploads straight to the media host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each field owns one `UploadSlot` (the `upload` prop) on the dashboard. Picking a file marks the
//! slot busy, shows a loading toast, uploads, and on success writes the secure
//! URL into the matching form field. The form refuses to save while its slot
//! is busy.

use leptos::prelude::*;

use crate::state::config::ConfigState;
use crate::state::dashboard::{DashboardState, UploadSlot};
use crate::state::toast::ToastState;

#[component]
pub fn FileUploadField(upload: UploadSlot, #[prop(into)] label: String, accept: &'static str) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let config = expect_context::<RwSignal<ConfigState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let busy = move || dashboard.with(|d| d.is_uploading(upload));
    let disabled = move || busy() || !config.with(ConfigState::uploads_enabled);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::toast::{ToastKind, settle};

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            let Some(ticket) = dashboard.try_update(|d| d.begin_upload(upload)).flatten() else {
                return;
            };
            let toast_id = toasts.try_update(|t| t.loading(upload.loading_message())).unwrap_or_default();
            let site = config.get_untracked().site;
            leptos::task::spawn_local(async move {
                let result = crate::net::upload::upload_file(&site, file).await;
                let failed = dashboard.try_update(|d| d.finish_upload(ticket, result)).flatten();
                match failed {
                    None => settle(toasts, toast_id, ToastKind::Success, upload.success_message()),
                    Some(err) => {
                        log::warn!("{} upload failed: {err}", upload.label());
                        settle(toasts, toast_id, ToastKind::Error, upload.failure_message());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, toasts);
        }
    };

    view! {
        <label class="upload-field">
            <span class="upload-field__label">{label}</span>
            <input class="upload-field__input" type="file" accept=accept disabled=disabled on:change=on_change/>
            <Show when=busy>
                <span class="upload-field__status">"Uploading..."</span>
            </Show>
        </label>
    }
}
