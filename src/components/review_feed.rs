/// Scrollable feed of review cards with a floating "add" button that opens the
/// review dialog.
use leptos::*;
use leptos::logging::{error, log};
use crate::components::review_card::ReviewCard;
use crate::components::review_form::ReviewForm;
use crate::feed::{fetch_cards, settle_feed, FeedSource};
use crate::models::draft::{ComposeForm, ReviewDraft};
use crate::models::review::ReviewCardData;
use crate::utils::liveness::Liveness;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ReviewFeedScreen(
    source: FeedSource,
    #[prop(into)] on_submit: Callback<ReviewDraft>,
) -> impl IntoView {
    let (cards, set_cards) = create_signal::<Vec<ReviewCardData>>(source.initial_cards());
    let form = create_rw_signal(ComposeForm::default());

    if let FeedSource::Remote(config) = source {
        let liveness = Liveness::track();

        // Effects never run during server rendering, and this one reads no
        // signals, so the request is sent exactly once, from the browser.
        create_effect(move |_| {
            let config = config.clone();
            let liveness = liveness.clone();
            spawn_local(async move {
                log!("[FEED] Fetching review cards from {}", config.feed_endpoint);
                let outcome = fetch_cards(&config).await;

                liveness.run_if_alive("feed response", || {
                    let mut next = cards.get_untracked();
                    match settle_feed(&mut next, outcome) {
                        Ok(count) => {
                            log!("[FEED] Loaded {} review cards", count);
                            set_cards.set(next);
                        }
                        Err(err) => error!("[FEED] Error fetching cards data: {}", err),
                    }
                });
            });
        });
    }

    view! {
        <div class="feed-screen">
            <div class="scroll-container">
                {move || cards.get().into_iter().map(|card| view! {
                    <ReviewCard card=card />
                }).collect::<Vec<_>>()}
            </div>

            <button
                type="button"
                class="fab"
                aria-label="Create a review"
                on:click=move |_| form.update(ComposeForm::open)
            >
                <span class="material-icons">{ "add" }</span>
            </button>

            <ReviewForm form=form on_submit=on_submit />
        </div>
    }
}
