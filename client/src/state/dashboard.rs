//! Dashboard CRUD state for video reels and reviews.
//!
//! DESIGN
//! ======
//! Both entity types run the same machine, `CrudState<T, F>`:
//!
//! ```text
//! Idle -> Fetching -> Listed        (list)
//! Closed -> Creating | Editing(id)  (modal)
//! ```
//!
//! Network calls happen in the page; this module only decides what may be
//! sent and how a result changes local state. Local state never changes on
//! a failed mutation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::types::{Category, Rating, Review, ReviewInput, UploadedMedia, VideoReel, VideoReelInput};

// =============================================================================
// ENTITIES + FORMS
// =============================================================================

/// A server-owned record the dashboard can list and delete.
pub trait Entity {
    /// Lower-case noun used in toast messages.
    const NOUN: &'static str;

    fn id(&self) -> &str;
}

impl Entity for VideoReel {
    const NOUN: &'static str = "video";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Review {
    const NOUN: &'static str = "review";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Editable form backing an entity's create/edit modal.
pub trait EntityForm<T>: Clone + Default {
    type Payload;

    fn from_entity(entity: &T) -> Self;

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    fn to_payload(&self) -> Result<Self::Payload, &'static str>;
}

/// Split a comma-separated tag field, trimming and dropping blanks.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoForm {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    /// Category wire id; empty means unset.
    pub category: String,
    /// Comma-separated tags as typed.
    pub tags: String,
}

impl EntityForm<VideoReel> for VideoForm {
    type Payload = VideoReelInput;

    fn from_entity(reel: &VideoReel) -> Self {
        Self {
            title: reel.title.clone(),
            description: reel.description.clone(),
            video_url: reel.video_url.clone(),
            thumbnail_url: reel.thumbnail_url.clone(),
            category: reel.category.as_ref().map(|c| c.id().to_owned()).unwrap_or_default(),
            tags: reel.tags.join(", "),
        }
    }

    fn to_payload(&self) -> Result<VideoReelInput, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required");
        }
        let video_url = self.video_url.trim();
        if video_url.is_empty() {
            return Err("Add a video URL or upload a video file");
        }
        let category = Some(self.category.trim())
            .filter(|c| !c.is_empty())
            .map(Category::from_id);
        Ok(VideoReelInput {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            video_url: video_url.to_owned(),
            thumbnail_url: self.thumbnail_url.trim().to_owned(),
            category,
            tags: parse_tags(&self.tags),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewForm {
    pub content: String,
    pub rating: u8,
    /// Screenshot URL; empty means none.
    pub screenshot: String,
    pub user_name: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self { content: String::new(), rating: Rating::MAX, screenshot: String::new(), user_name: String::new() }
    }
}

impl EntityForm<Review> for ReviewForm {
    type Payload = ReviewInput;

    fn from_entity(review: &Review) -> Self {
        Self {
            content: review.content.clone(),
            rating: review.rating.get(),
            screenshot: review.screenshot.clone().unwrap_or_default(),
            user_name: review.user_name.clone(),
        }
    }

    fn to_payload(&self) -> Result<ReviewInput, &'static str> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err("Review text is required");
        }
        let rating = Rating::new(self.rating).ok_or("Rating must be between 1 and 5")?;
        let screenshot = Some(self.screenshot.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Ok(ReviewInput { content: content.to_owned(), rating, screenshot, user_name: self.user_name.trim().to_owned() })
    }
}

// =============================================================================
// CRUD MACHINE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Fetching,
    Listed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Closed,
    Creating,
    Editing(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

/// A validated request the page should send.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<P> {
    pub target: SubmitTarget,
    pub payload: P,
    /// Modal session the submit started under.
    pub session: u64,
}

/// Why a submit was not started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submit for this form is already in flight.
    Busy,
    /// No modal is open.
    NotOpen,
    /// A file for this form is still uploading.
    UploadPending,
    Invalid(&'static str),
}

impl SubmitRejection {
    /// Message worth showing, if any. `Busy`/`NotOpen` are silent.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Busy | Self::NotOpen => None,
            Self::UploadPending => Some("Wait for the upload to finish before saving"),
            Self::Invalid(msg) => Some(*msg),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CrudState<T, F> {
    pub items: Vec<T>,
    pub phase: ListPhase,
    pub modal: ModalMode,
    pub form: F,
    pub submitting: bool,
    /// Id awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Bumped whenever the modal opens or closes. Late responses compare
    /// against it so they never touch a form the user has since replaced.
    pub session: u64,
}

impl<T, F: Default> Default for CrudState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: ListPhase::Idle,
            modal: ModalMode::Closed,
            form: F::default(),
            submitting: false,
            pending_delete: None,
            session: 0,
        }
    }
}

impl<T, F> CrudState<T, F>
where
    T: Entity + Clone,
    F: EntityForm<T>,
{
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Fetching
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.modal, ModalMode::Editing(_))
    }

    pub fn begin_fetch(&mut self) {
        self.phase = ListPhase::Fetching;
    }

    /// Apply a list response. On failure the previous items stay visible.
    pub fn finish_fetch(&mut self, result: Result<Vec<T>, ApiError>) -> Option<ApiError> {
        self.phase = ListPhase::Listed;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) => Some(err),
        }
    }

    pub fn open_create(&mut self) {
        self.form = F::default();
        self.modal = ModalMode::Creating;
        self.session += 1;
    }

    /// Open the edit modal pre-filled from the listed item. Returns `false`
    /// when `id` is not in the list.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter().find(|i| i.id() == id) else {
            return false;
        };
        self.form = F::from_entity(item);
        self.modal = ModalMode::Editing(id.to_owned());
        self.session += 1;
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalMode::Closed;
        self.form = F::default();
        self.session += 1;
    }

    /// Validate the open form and mark a submit in flight.
    ///
    /// # Errors
    ///
    /// Returns why nothing should be sent; state is unchanged in that case.
    pub fn begin_submit(&mut self, uploads_pending: bool) -> Result<Submission<F::Payload>, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::Busy);
        }
        let target = match &self.modal {
            ModalMode::Closed => return Err(SubmitRejection::NotOpen),
            ModalMode::Creating => SubmitTarget::Create,
            ModalMode::Editing(id) => SubmitTarget::Update(id.clone()),
        };
        if uploads_pending {
            return Err(SubmitRejection::UploadPending);
        }
        let payload = self.form.to_payload().map_err(SubmitRejection::Invalid)?;
        self.submitting = true;
        Ok(Submission { target, payload, session: self.session })
    }

    /// Apply a create/update response. Success closes and resets the modal
    /// (the caller then refetches); failure keeps the modal and form as-is.
    /// A modal opened after the submit started is left alone either way.
    pub fn finish_submit(&mut self, session: u64, result: Result<(), ApiError>) -> Option<ApiError> {
        self.submitting = false;
        match result {
            Ok(()) => {
                if session == self.session {
                    self.close_modal();
                }
                None
            }
            Err(err) => Some(err),
        }
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The user confirmed; returns the id to send a delete for.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Apply a delete response. Only success removes the item.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) -> Option<ApiError> {
        match result {
            Ok(()) => {
                self.items.retain(|i| i.id() != id);
                None
            }
            Err(err) => Some(err),
        }
    }
}

// =============================================================================
// TOAST COPY
// =============================================================================

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[must_use]
pub fn submit_loading_message<T: Entity>(editing: bool) -> String {
    if editing { format!("Updating {}...", T::NOUN) } else { format!("Adding {}...", T::NOUN) }
}

#[must_use]
pub fn submit_success_message<T: Entity>(editing: bool) -> String {
    let noun = capitalize(T::NOUN);
    if editing { format!("{noun} updated successfully!") } else { format!("{noun} added successfully!") }
}

/// Error text for a failed save: the server's message, or a generic one.
#[must_use]
pub fn submit_failure_message<T: Entity>(err: &ApiError) -> String {
    let message = err.message();
    if message.trim().is_empty() { format!("Failed to save {}", T::NOUN) } else { message }
}

#[must_use]
pub fn delete_success_message<T: Entity>() -> String {
    format!("{} deleted successfully", capitalize(T::NOUN))
}

#[must_use]
pub fn delete_failure_message<T: Entity>() -> String {
    format!("Failed to delete {}", T::NOUN)
}

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Videos,
    Reviews,
}

/// A file input on one of the two forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadSlot {
    Video,
    Thumbnail,
    Screenshot,
}

impl UploadSlot {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Thumbnail => "thumbnail",
            Self::Screenshot => "screenshot",
        }
    }

    #[must_use]
    pub fn tab(self) -> DashboardTab {
        match self {
            Self::Video | Self::Thumbnail => DashboardTab::Videos,
            Self::Screenshot => DashboardTab::Reviews,
        }
    }

    #[must_use]
    pub fn loading_message(self) -> String {
        format!("Uploading {}...", self.label())
    }

    #[must_use]
    pub fn success_message(self) -> String {
        format!("{} uploaded successfully!", capitalize(self.label()))
    }

    #[must_use]
    pub fn failure_message(self) -> String {
        format!("Failed to upload {}", self.label())
    }
}

/// An upload in flight, tied to the modal session it started under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket {
    pub slot: UploadSlot,
    pub session: u64,
}

pub type VideoCrud = CrudState<VideoReel, VideoForm>;
pub type ReviewCrud = CrudState<Review, ReviewForm>;

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub tab: DashboardTab,
    pub videos: VideoCrud,
    pub reviews: ReviewCrud,
    pub uploading: Vec<UploadTicket>,
}

impl DashboardState {
    /// Switch tabs; returns `true` when the tab changed and its list should
    /// be refetched.
    pub fn switch_tab(&mut self, tab: DashboardTab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Current modal session of the form `slot` belongs to.
    #[must_use]
    pub fn session_for(&self, slot: UploadSlot) -> u64 {
        match slot.tab() {
            DashboardTab::Videos => self.videos.session,
            DashboardTab::Reviews => self.reviews.session,
        }
    }

    /// Whether `slot` is uploading for the form currently open.
    #[must_use]
    pub fn is_uploading(&self, slot: UploadSlot) -> bool {
        let ticket = UploadTicket { slot, session: self.session_for(slot) };
        self.uploading.contains(&ticket)
    }

    #[must_use]
    pub fn uploads_pending(&self, tab: DashboardTab) -> bool {
        self.uploading
            .iter()
            .any(|t| t.slot.tab() == tab && t.session == self.session_for(t.slot))
    }

    /// Mark `slot` as uploading for the open form. Returns `None` if it
    /// already is.
    pub fn begin_upload(&mut self, slot: UploadSlot) -> Option<UploadTicket> {
        if self.is_uploading(slot) {
            return None;
        }
        let ticket = UploadTicket { slot, session: self.session_for(slot) };
        self.uploading.push(ticket);
        Some(ticket)
    }

    /// Clear the upload flag and, on success, write the URL into its form.
    /// The URL is dropped when the form was closed or replaced meanwhile.
    pub fn finish_upload(&mut self, ticket: UploadTicket, result: Result<UploadedMedia, ApiError>) -> Option<ApiError> {
        self.uploading.retain(|t| *t != ticket);
        match result {
            Ok(media) => {
                if ticket.session == self.session_for(ticket.slot) {
                    match ticket.slot {
                        UploadSlot::Video => self.videos.form.video_url = media.url,
                        UploadSlot::Thumbnail => self.videos.form.thumbnail_url = media.url,
                        UploadSlot::Screenshot => self.reviews.form.screenshot = media.url,
                    }
                }
                None
            }
            Err(err) => Some(err),
        }
    }

    /// # Errors
    ///
    /// See [`CrudState::begin_submit`].
    pub fn begin_video_submit(&mut self) -> Result<Submission<VideoReelInput>, SubmitRejection> {
        let pending = self.uploads_pending(DashboardTab::Videos);
        self.videos.begin_submit(pending)
    }

    /// # Errors
    ///
    /// See [`CrudState::begin_submit`].
    pub fn begin_review_submit(&mut self) -> Result<Submission<ReviewInput>, SubmitRejection> {
        let pending = self.uploads_pending(DashboardTab::Reviews);
        self.reviews.begin_submit(pending)
    }
}
