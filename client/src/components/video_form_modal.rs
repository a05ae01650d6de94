//! Create/edit modal for a video reel.

#[cfg(test)]
#[path = "video_form_modal_test.rs"]
mod video_form_modal_test;

use leptos::prelude::*;

use crate::components::file_upload_field::FileUploadField;
use crate::net::types::KNOWN_CATEGORIES;
use crate::state::dashboard::{DashboardState, UploadSlot, VideoForm};

#[component]
pub fn VideoFormModal(on_submit: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    let field = move |read: fn(&VideoForm) -> String| move || dashboard.with(|d| read(&d.videos.form));
    let edit = move |write: fn(&mut VideoForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            dashboard.update(|d| write(&mut d.videos.form, value));
        }
    };

    let heading = move || if dashboard.with(|d| d.videos.is_editing()) { "Edit Video" } else { "Add Video" };
    let submitting = move || dashboard.with(|d| d.videos.submitting);
    let uploading = move || dashboard.with(|d| d.is_uploading(UploadSlot::Video) || d.is_uploading(UploadSlot::Thumbnail));

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
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=field(|f| f.title.clone())
                        on:input=edit(|f, v| f.title = v)
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=field(|f| f.description.clone())
                        on:input=edit(|f, v| f.description = v)
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Video URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://"
                        prop:value=field(|f| f.video_url.clone())
                        on:input=edit(|f, v| f.video_url = v)
                    />
                </label>
                <FileUploadField upload=UploadSlot::Video label="Or upload a video" accept="video/*"/>
                <label class="dialog__label">
                    "Thumbnail URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://"
                        prop:value=field(|f| f.thumbnail_url.clone())
                        on:input=edit(|f, v| f.thumbnail_url = v)
                    />
                </label>
                <FileUploadField upload=UploadSlot::Thumbnail label="Or upload a thumbnail" accept="image/*"/>
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        prop:value=field(|f| f.category.clone())
                        on:change=edit(|f, v| f.category = v)
                    >
                        <option value="">"Select a category"</option>
                        {KNOWN_CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=c.id().to_owned()>{c.label().to_owned()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Tags"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="wedding, drone, color grade"
                        prop:value=field(|f| f.tags.clone())
                        on:input=edit(|f, v| f.tags = v)
                    />
                </label>
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
