use super::*;

fn reel(id: &str, title: &str) -> VideoReel {
    VideoReel {
        id: id.to_owned(),
        title: title.to_owned(),
        description: "desc".to_owned(),
        video_url: format!("https://cdn.example/{id}.mp4"),
        thumbnail_url: String::new(),
        category: Some(Category::Commercial),
        tags: vec!["promo".to_owned(), "brand".to_owned()],
        created_at: None,
    }
}

fn review(id: &str) -> Review {
    Review {
        id: id.to_owned(),
        user_name: "Sarah & James".to_owned(),
        content: "Gave me chills".to_owned(),
        rating: Rating::clamped(5),
        screenshot: None,
        created_at: None,
    }
}

fn listed_videos(ids: &[&str]) -> VideoCrud {
    let mut crud = VideoCrud::default();
    crud.begin_fetch();
    crud.finish_fetch(Ok(ids.iter().map(|id| reel(id, "Reel")).collect()));
    crud
}

fn server_error() -> ApiError {
    ApiError::Status { status: 500, message: "boom".to_owned() }
}

// =============================================================
// Forms
// =============================================================

#[test]
fn parse_tags_trims_and_drops_blanks() {
    assert_eq!(parse_tags(" drone, 4k ,, wedding "), vec!["drone", "4k", "wedding"]);
    assert!(parse_tags("  ").is_empty());
}

#[test]
fn video_form_from_entity_joins_tags() {
    let form = VideoForm::from_entity(&reel("v1", "Nike"));
    assert_eq!(form.tags, "promo, brand");
    assert_eq!(form.category, "commercial");
}

#[test]
fn video_form_requires_title_and_video_url() {
    let mut form = VideoForm { video_url: "https://x/v.mp4".to_owned(), ..VideoForm::default() };
    assert_eq!(form.to_payload(), Err("Title is required"));
    form.title = "Title".to_owned();
    form.video_url = "  ".to_owned();
    assert_eq!(form.to_payload(), Err("Add a video URL or upload a video file"));
}

#[test]
fn video_form_payload_maps_category_and_tags() {
    let form = VideoForm {
        title: " Japan Travel Diary ".to_owned(),
        video_url: "https://x/v.mp4".to_owned(),
        category: "travel".to_owned(),
        tags: "japan, diary".to_owned(),
        ..VideoForm::default()
    };
    let payload = form.to_payload().unwrap();
    assert_eq!(payload.title, "Japan Travel Diary");
    assert_eq!(payload.category, Some(Category::Travel));
    assert_eq!(payload.tags, vec!["japan".to_owned(), "diary".to_owned()]);
}

#[test]
fn video_form_empty_category_is_omitted() {
    let form = VideoForm { title: "T".to_owned(), video_url: "v".to_owned(), ..VideoForm::default() };
    assert_eq!(form.to_payload().unwrap().category, None);
}

#[test]
fn review_form_defaults_to_five_stars() {
    assert_eq!(ReviewForm::default().rating, 5);
}

#[test]
fn review_form_rejects_out_of_range_rating() {
    let form = ReviewForm { content: "Great".to_owned(), rating: 0, ..ReviewForm::default() };
    assert_eq!(form.to_payload(), Err("Rating must be between 1 and 5"));
}

#[test]
fn review_form_blank_screenshot_is_none() {
    let form = ReviewForm { content: "Great".to_owned(), screenshot: " ".to_owned(), ..ReviewForm::default() };
    assert_eq!(form.to_payload().unwrap().screenshot, None);
}

// =============================================================
// List phase
// =============================================================

#[test]
fn fetch_moves_idle_to_listed() {
    let mut crud = VideoCrud::default();
    assert_eq!(crud.phase, ListPhase::Idle);
    crud.begin_fetch();
    assert!(crud.is_loading());
    assert!(crud.finish_fetch(Ok(vec![reel("a", "A")])).is_none());
    assert_eq!(crud.phase, ListPhase::Listed);
    assert_eq!(crud.items.len(), 1);
}

#[test]
fn failed_fetch_keeps_previous_items() {
    let mut crud = listed_videos(&["a", "b"]);
    crud.begin_fetch();
    let err = crud.finish_fetch(Err(server_error()));
    assert!(err.is_some());
    assert_eq!(crud.phase, ListPhase::Listed);
    assert_eq!(crud.items.len(), 2);
}

// =============================================================
// Modal + submit
// =============================================================

#[test]
fn submit_without_open_modal_is_rejected() {
    let mut crud = listed_videos(&["a"]);
    assert_eq!(crud.begin_submit(false), Err(SubmitRejection::NotOpen));
}

#[test]
fn create_submit_success_closes_and_resets() {
    let mut crud = listed_videos(&[]);
    crud.open_create();
    crud.form.title = "New".to_owned();
    crud.form.video_url = "https://x/v.mp4".to_owned();

    let submission = crud.begin_submit(false).unwrap();
    assert_eq!(submission.target, SubmitTarget::Create);
    assert!(crud.submitting);

    assert!(crud.finish_submit(submission.session, Ok(())).is_none());
    assert_eq!(crud.modal, ModalMode::Closed);
    assert_eq!(crud.form, VideoForm::default());
    assert!(!crud.submitting);
}

#[test]
fn submit_failure_keeps_modal_and_form() {
    let mut crud = listed_videos(&["a"]);
    assert!(crud.open_edit("a"));
    crud.form.title = "Edited".to_owned();

    let submission = crud.begin_submit(false).unwrap();
    assert_eq!(submission.target, SubmitTarget::Update("a".to_owned()));

    let err = crud.finish_submit(submission.session, Err(server_error()));
    assert_eq!(err.map(|e| e.message()), Some("boom".to_owned()));
    assert_eq!(crud.modal, ModalMode::Editing("a".to_owned()));
    assert_eq!(crud.form.title, "Edited");
    assert!(!crud.submitting);
}

#[test]
fn second_submit_while_in_flight_is_busy() {
    let mut crud = listed_videos(&["a"]);
    crud.open_edit("a");
    assert!(crud.begin_submit(false).is_ok());
    assert_eq!(crud.begin_submit(false), Err(SubmitRejection::Busy));
}

#[test]
fn invalid_form_does_not_mark_submitting() {
    let mut crud = listed_videos(&[]);
    crud.open_create();
    assert_eq!(crud.begin_submit(false), Err(SubmitRejection::Invalid("Title is required")));
    assert!(!crud.submitting);
}

#[test]
fn open_edit_unknown_id_is_noop() {
    let mut crud = listed_videos(&["a"]);
    assert!(!crud.open_edit("zzz"));
    assert_eq!(crud.modal, ModalMode::Closed);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_requires_confirmation() {
    let mut crud = listed_videos(&["a", "b"]);
    crud.request_delete("a");
    assert_eq!(crud.items.len(), 2);

    crud.cancel_delete();
    assert_eq!(crud.confirm_delete(), None);
    assert_eq!(crud.items.len(), 2);
}

#[test]
fn confirmed_delete_removes_after_success() {
    let mut crud = listed_videos(&["a", "b"]);
    crud.request_delete("a");
    let id = crud.confirm_delete().unwrap();
    assert_eq!(crud.items.len(), 2);

    assert!(crud.finish_delete(&id, Ok(())).is_none());
    assert_eq!(crud.items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(crud.pending_delete, None);
}

#[test]
fn failed_delete_leaves_list_unchanged() {
    let mut crud = listed_videos(&["a", "b"]);
    crud.request_delete("b");
    let id = crud.confirm_delete().unwrap();
    assert!(crud.finish_delete(&id, Err(server_error())).is_some());
    assert_eq!(crud.items.len(), 2);
}

// =============================================================
// Uploads
// =============================================================

#[test]
fn upload_fills_the_matching_field() {
    let mut dash = DashboardState::default();
    dash.videos.open_create();
    let ticket = dash.begin_upload(UploadSlot::Thumbnail).unwrap();
    assert_eq!(dash.begin_upload(UploadSlot::Thumbnail), None);

    let media = UploadedMedia { url: "https://cdn/t.jpg".to_owned(), public_id: "t".to_owned() };
    assert!(dash.finish_upload(ticket, Ok(media)).is_none());
    assert_eq!(dash.videos.form.thumbnail_url, "https://cdn/t.jpg");
    assert!(!dash.is_uploading(UploadSlot::Thumbnail));
}

#[test]
fn failed_upload_clears_flag_and_keeps_field() {
    let mut dash = DashboardState::default();
    dash.reviews.form.screenshot = "old".to_owned();
    let ticket = dash.begin_upload(UploadSlot::Screenshot).unwrap();
    assert!(dash.finish_upload(ticket, Err(server_error())).is_some());
    assert_eq!(dash.reviews.form.screenshot, "old");
    assert!(!dash.uploads_pending(DashboardTab::Reviews));
}

#[test]
fn submit_waits_for_pending_upload_on_same_form() {
    let mut dash = DashboardState::default();
    dash.videos.open_create();
    dash.videos.form.title = "T".to_owned();
    dash.videos.form.video_url = "https://x/v.mp4".to_owned();
    let ticket = dash.begin_upload(UploadSlot::Video).unwrap();

    assert_eq!(dash.begin_video_submit(), Err(SubmitRejection::UploadPending));

    dash.finish_upload(ticket, Ok(UploadedMedia { url: "https://x/new.mp4".to_owned(), public_id: "n".to_owned() }));
    let submission = dash.begin_video_submit().unwrap();
    assert_eq!(submission.payload.video_url, "https://x/new.mp4");
}

#[test]
fn upload_on_other_form_does_not_block() {
    let mut dash = DashboardState::default();
    dash.reviews.items = vec![review("r1")];
    dash.reviews.open_edit("r1");
    let _ = dash.begin_upload(UploadSlot::Video);
    assert!(dash.begin_review_submit().is_ok());
}

fn media(url: &str) -> UploadedMedia {
    UploadedMedia { url: url.to_owned(), public_id: "p".to_owned() }
}

#[test]
fn upload_finishing_after_modal_switch_leaves_new_form_alone() {
    let mut dash = DashboardState::default();
    dash.videos.items = vec![reel("r1", "Old")];
    dash.videos.open_create();
    let ticket = dash.begin_upload(UploadSlot::Video).unwrap();
    dash.videos.close_modal();
    assert!(dash.videos.open_edit("r1"));
    let original = dash.videos.form.video_url.clone();

    assert!(!dash.is_uploading(UploadSlot::Video));
    assert!(dash.finish_upload(ticket, Ok(media("https://new/upload.mp4"))).is_none());

    assert_eq!(dash.videos.form.video_url, original);
    assert!(dash.uploading.is_empty());
}

#[test]
fn stale_upload_does_not_block_new_form() {
    let mut dash = DashboardState::default();
    dash.videos.open_create();
    let stale = dash.begin_upload(UploadSlot::Video).unwrap();
    dash.videos.open_create();
    dash.videos.form.title = "T".to_owned();
    dash.videos.form.video_url = "https://x/v.mp4".to_owned();

    assert!(!dash.uploads_pending(DashboardTab::Videos));
    let fresh = dash.begin_upload(UploadSlot::Video).unwrap();
    assert_ne!(stale, fresh);

    dash.finish_upload(stale, Ok(media("https://stale/a.mp4")));
    assert!(dash.is_uploading(UploadSlot::Video));
    dash.finish_upload(fresh, Ok(media("https://fresh/b.mp4")));
    assert_eq!(dash.videos.form.video_url, "https://fresh/b.mp4");
}

#[test]
fn save_finishing_after_modal_reopen_keeps_new_modal() {
    let mut crud = listed_videos(&["a", "b"]);
    crud.open_edit("a");
    let submission = crud.begin_submit(false).unwrap();
    crud.close_modal();
    crud.open_edit("b");
    crud.form.title = "Draft".to_owned();

    assert!(crud.finish_submit(submission.session, Ok(())).is_none());
    assert_eq!(crud.modal, ModalMode::Editing("b".to_owned()));
    assert_eq!(crud.form.title, "Draft");
    assert!(!crud.submitting);
}

#[test]
fn switch_tab_reports_change() {
    let mut dash = DashboardState::default();
    assert!(!dash.switch_tab(DashboardTab::Videos));
    assert!(dash.switch_tab(DashboardTab::Reviews));
    assert_eq!(dash.tab, DashboardTab::Reviews);
}

// =============================================================
// Toast copy
// =============================================================

#[test]
fn toast_copy_names_the_entity() {
    assert_eq!(submit_loading_message::<VideoReel>(false), "Adding video...");
    assert_eq!(submit_loading_message::<Review>(true), "Updating review...");
    assert_eq!(submit_success_message::<VideoReel>(true), "Video updated successfully!");
    assert_eq!(delete_success_message::<Review>(), "Review deleted successfully");
    assert_eq!(delete_failure_message::<VideoReel>(), "Failed to delete video");
    assert_eq!(UploadSlot::Screenshot.success_message(), "Screenshot uploaded successfully!");
}
