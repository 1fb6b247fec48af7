use crate::models::draft::ReviewDraft;
use leptos::logging::{error, log};

/// Default submit handler: there is no review service yet, so the payload is
/// only logged. Integrators pass their own `Callback<ReviewDraft>` instead.
pub fn log_submission(draft: ReviewDraft) {
    match serde_json::to_string(&draft) {
        Ok(payload) => log!("[REVIEW] Submitted review: {}", payload),
        Err(err) => error!("[REVIEW] Could not serialize review: {}", err),
    }
}
