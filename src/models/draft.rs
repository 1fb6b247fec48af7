// src/models/draft.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_DRAFT_RATING: u8 = 3;

/// In-progress review composed in the "Create a Review" dialog.
/// Serializes as `{ username, url, rating, description }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub username: String,
    #[serde(rename = "url")]
    pub media_url: String,   // Image or video the review is about
    pub rating: u8,          // 1-5
    pub description: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            media_url: String::new(),
            rating: DEFAULT_DRAFT_RATING,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

/// Dialog visibility plus the draft it edits.
///
/// Every way out of `Open` (cancel, submit, close request) leaves a fresh
/// default draft behind, so no field survives into the next opening.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeForm {
    modal: ModalState,
    draft: ReviewDraft,
}

impl ComposeForm {
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Opens the dialog on a fresh draft. Already open: nothing changes.
    pub fn open(&mut self) {
        if self.modal.is_open() {
            return;
        }
        self.draft = ReviewDraft::default();
        self.modal = ModalState::Open;
    }

    /// Closes the dialog and throws the draft away.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
        self.draft = ReviewDraft::default();
    }

    /// The platform asked the dialog to close. Same as cancel.
    pub fn request_close(&mut self) {
        self.cancel();
    }

    /// Closes the dialog and hands back the draft for the submit handler.
    /// Returns `None` when the dialog was not open. No validation happens here:
    /// empty fields are forwarded as empty text.
    pub fn submit(&mut self) -> Option<ReviewDraft> {
        if !self.modal.is_open() {
            return None;
        }
        self.modal = ModalState::Closed;
        Some(std::mem::take(&mut self.draft))
    }

    pub fn set_username(&mut self, username: String) {
        self.draft.username = username;
    }

    pub fn set_media_url(&mut self, media_url: String) {
        self.draft.media_url = media_url;
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.draft.rating = rating;
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ComposeForm {
        let mut form = ComposeForm::default();
        form.open();
        form.set_username("ada".to_string());
        form.set_media_url("https://example.com/clip.mp4".to_string());
        form.set_rating(5);
        form.set_description("Loved it".to_string());
        form
    }

    #[test]
    fn starts_closed_with_default_draft() {
        let form = ComposeForm::default();
        assert_eq!(form.modal(), ModalState::Closed);
        assert_eq!(form.draft(), &ReviewDraft::default());
        assert_eq!(form.draft().rating, 3);
    }

    #[test]
    fn submit_returns_snapshot_and_resets() {
        let mut form = filled_form();
        let submitted = form.submit().expect("dialog was open");

        assert_eq!(submitted.username, "ada");
        assert_eq!(submitted.media_url, "https://example.com/clip.mp4");
        assert_eq!(submitted.rating, 5);
        assert_eq!(submitted.description, "Loved it");
        assert!(!form.is_open());
        assert_eq!(form.draft(), &ReviewDraft::default());
    }

    #[test]
    fn submit_accepts_empty_fields() {
        let mut form = ComposeForm::default();
        form.open();
        assert_eq!(form.submit(), Some(ReviewDraft::default()));
    }

    #[test]
    fn submit_while_closed_yields_nothing() {
        let mut form = ComposeForm::default();
        assert_eq!(form.submit(), None);

        let mut form = filled_form();
        form.submit();
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn cancel_and_close_request_discard_the_draft() {
        let mut form = filled_form();
        form.cancel();
        assert!(!form.is_open());
        assert_eq!(form.draft(), &ReviewDraft::default());

        let mut form = filled_form();
        form.request_close();
        assert_eq!(form.modal(), ModalState::Closed);
        assert_eq!(form.draft(), &ReviewDraft::default());
    }

    #[test]
    fn reopening_starts_from_defaults() {
        let mut form = filled_form();
        form.cancel();
        form.open();
        assert!(form.is_open());
        assert_eq!(form.draft(), &ReviewDraft::default());
    }

    #[test]
    fn opening_twice_keeps_the_draft() {
        let mut form = filled_form();
        form.open();
        assert_eq!(form.draft().username, "ada");
    }

    #[test]
    fn payload_uses_url_key() {
        let draft = ReviewDraft {
            username: "ada".into(),
            media_url: "u".into(),
            rating: 4,
            description: "d".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "ada", "url": "u", "rating": 4, "description": "d"})
        );
    }
}
