//! Create/edit modal for a client review.

#[cfg(test)]
#[path = "review_form_modal_test.rs"]
mod review_form_modal_test;

use leptos::prelude::*;

use crate::components::file_upload_field::FileUploadField;
use crate::net::types::Rating;
use crate::state::dashboard::{DashboardState, UploadSlot};

#[component]
pub fn ReviewFormModal(on_submit: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let heading = move || if dashboard.with(|d| d.reviews.is_editing()) { "Edit Review" } else { "Add Review" };
    let submitting = move || dashboard.with(|d| d.reviews.submitting);
    let uploading = move || dashboard.with(|d| d.is_uploading(UploadSlot::Screenshot));
    let screenshot = move || dashboard.with(|d| d.reviews.form.screenshot.clone());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2>{heading}</h2>
                <label class="dialog__label">
                    "Client Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || dashboard.with(|d| d.reviews.form.user_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|d| d.reviews.form.user_name = value);
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Review"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || dashboard.with(|d| d.reviews.form.content.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|d| d.reviews.form.content = value);
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Rating"
                    <select
                        class="dialog__input"
                        prop:value=move || dashboard.with(|d| d.reviews.form.rating.to_string())
                        on:change=move |ev| {
                            let rating = event_target_value(&ev).parse().unwrap_or(Rating::MAX);
                            dashboard.update(|d| d.reviews.form.rating = rating);
                        }
                    >
                        {(Rating::MIN..=Rating::MAX)
                            .rev()
                            .map(|n| view! { <option value=n.to_string()>{format!("{n} stars")}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <FileUploadField upload=UploadSlot::Screenshot label="Screenshot" accept="image/*"/>
                <Show when=move || !screenshot().is_empty()>
                    <img class="dialog__preview" src=screenshot alt="Review screenshot"/>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting() || uploading()>
                        {move || if submitting() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
