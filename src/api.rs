use actix_web::HttpResponse;
use leptos::logging::log;
use crate::feed::sample_cards;

/// POST /reviews/find
///
/// Development stand-in for the review service: answers with the sample cards
/// so the feed tab has something to load.
pub async fn find_reviews() -> HttpResponse {
    let cards = sample_cards();
    log!("[SERVER] Returning {} review cards", cards.len());
    HttpResponse::Ok().json(cards)
}
