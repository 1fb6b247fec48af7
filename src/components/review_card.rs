/// A single review card: icon, title, global rating badge, description, and
/// the viewer's own star rating.
use leptos::*;
use crate::components::star_rating::StarRating;
use crate::models::review::{viewer_rating_label, ReviewCardData};

#[component]
pub fn ReviewCard(card: ReviewCardData) -> impl IntoView {
    let initial_rating = card.initial_rating;
    let global_rating = card.global_rating_label();

    // Local only: the viewer's pick updates this card's label and nothing else.
    let (rating, set_rating) = create_signal(initial_rating);

    view! {
        <div class="card">
            <div class="card-header">
                <span class="material-icons card-icon">{card.icon}</span>
                <span class="card-title">{card.title}</span>
                <span class="global-rating">{global_rating}</span>
            </div>
            <p class="card-description">{card.description}</p>
            <div class="rating-row">
                <span class="rating-label">{ "Your Rating:" }</span>
                <StarRating
                    default_rating=initial_rating
                    on_finish=move |value: u8| set_rating.set(value)
                />
                <span class="current-rating">{move || viewer_rating_label(rating.get())}</span>
            </div>
        </div>
    }
}
