use leptos::*;
use crate::models::review::MAX_RATING;

/// Captions shown under the stars when `show_rating` is set, one per star count.
pub const RATING_CAPTIONS: [&str; 5] = ["Terrible", "Bad", "Okay", "Good", "Great"];

pub fn rating_caption(value: u8) -> &'static str {
    match value {
        1..=MAX_RATING => RATING_CAPTIONS[usize::from(value - 1)],
        _ => "",
    }
}

/// Five clickable stars seeded with `default_rating`.
/// `on_finish` fires with the chosen value every time the viewer picks a star.
#[component]
pub fn StarRating(
    default_rating: u8,
    #[prop(into)] on_finish: Callback<u8>,
    #[prop(default = false)] show_rating: bool,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(default_rating);

    let pick = move |value: u8| {
        set_selected.set(value);
        on_finish.call(value);
    };

    view! {
        <div class="star-rating">
            {show_rating.then(|| view! {
                <span class="rating-caption">{move || rating_caption(selected.get())}</span>
            })}
            <div class="stars">
                {(1..=MAX_RATING).map(|value| view! {
                    <button
                        type="button"
                        class="star"
                        class:filled=move || value <= selected.get()
                        aria-label=format!("{} star", value)
                        on:click=move |_| pick(value)
                    >
                        "★"
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_follow_star_count() {
        assert_eq!(rating_caption(1), "Terrible");
        assert_eq!(rating_caption(3), "Okay");
        assert_eq!(rating_caption(5), "Great");
    }

    #[test]
    fn no_caption_outside_range() {
        assert_eq!(rating_caption(0), "");
        assert_eq!(rating_caption(6), "");
    }
}
