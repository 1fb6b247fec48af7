/// Where the review feed gets its cards from, and how a load result is applied.
use crate::config::AppConfig;
use crate::error::FeedError;
use crate::models::review::ReviewCardData;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    /// One POST to the configured endpoint when the screen mounts.
    Remote(AppConfig),
    /// Fixed cards, no network.
    Sample,
}

impl FeedSource {
    /// Cards shown before any load completes.
    pub fn initial_cards(&self) -> Vec<ReviewCardData> {
        match self {
            FeedSource::Remote(_) => Vec::new(),
            FeedSource::Sample => sample_cards(),
        }
    }
}

pub fn sample_cards() -> Vec<ReviewCardData> {
    let cool = ReviewCardData::new(
        "star",
        "My Cool Card",
        "This is a description of the card. You can customize it as you like!",
    )
    .with_ratings(4, 4.2);
    let another = ReviewCardData::new(
        "favorite",
        "Another Card",
        "Here is another card with a different icon and text.",
    )
    .with_ratings(5, 4.8);

    [cool, another].iter().cycle().take(6).cloned().collect()
}

pub fn decode_cards(body: &str) -> Result<Vec<ReviewCardData>, FeedError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches the feed once. No body, no retry.
pub async fn fetch_cards(config: &AppConfig) -> Result<Vec<ReviewCardData>, FeedError> {
    let endpoint = config.feed_endpoint.as_str();
    let Some(millis) = config.fetch_timeout_ms else {
        return request_cards(endpoint).await;
    };

    let request = request_cards(endpoint);
    let timer = TimeoutFuture::new(millis);
    futures::pin_mut!(request, timer);
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FeedError::Timeout {
            endpoint: endpoint.to_string(),
            millis,
        }),
    }
}

async fn request_cards(endpoint: &str) -> Result<Vec<ReviewCardData>, FeedError> {
    let response = Request::post(endpoint)
        .send()
        .await
        .map_err(|err| FeedError::Network {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        })?;

    if !response.ok() {
        return Err(FeedError::Status {
            endpoint: endpoint.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|err| FeedError::Decode(err.to_string()))?;
    decode_cards(&body)
}

/// Replaces the whole list on success and returns the new card count.
/// On failure the list is left exactly as it was and the error handed back.
pub fn settle_feed(
    cards: &mut Vec<ReviewCardData>,
    outcome: Result<Vec<ReviewCardData>, FeedError>,
) -> Result<usize, FeedError> {
    *cards = outcome?;
    Ok(cards.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_card_response() {
        let cards = decode_cards(
            r#"[{"icon":"star","title":"T","description":"D","initialRating":4,"globalRating":4.2}]"#,
        )
        .unwrap();
        assert_eq!(cards, vec![ReviewCardData::new("star", "T", "D").with_ratings(4, 4.2)]);
    }

    #[test]
    fn empty_array_is_an_empty_feed() {
        assert_eq!(decode_cards("[]").unwrap(), Vec::new());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(decode_cards("<html>oops</html>"), Err(FeedError::Decode(_))));
        assert!(matches!(decode_cards(r#"{"icon":"star"}"#), Err(FeedError::Decode(_))));
    }

    #[test]
    fn success_replaces_the_list() {
        let mut cards = vec![ReviewCardData::new("old", "Old", "gone")];
        let fresh = sample_cards();
        assert_eq!(settle_feed(&mut cards, Ok(fresh.clone())), Ok(6));
        assert_eq!(cards, fresh);
    }

    #[test]
    fn failure_keeps_the_list() {
        let mut cards = Vec::new();
        let err = FeedError::Network {
            endpoint: "/reviews/find".into(),
            reason: "connection refused".into(),
        };
        assert_eq!(settle_feed(&mut cards, Err(err.clone())), Err(err));
        assert!(cards.is_empty());

        let mut cards = sample_cards();
        let status = FeedError::Status { endpoint: "/reviews/find".into(), status: 500 };
        assert!(settle_feed(&mut cards, Err(status)).is_err());
        assert_eq!(cards, sample_cards());
    }

    #[test]
    fn sample_feed_alternates_two_cards() {
        let cards = sample_cards();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].icon, "star");
        assert_eq!(cards[0].initial_rating, 4);
        assert_eq!(cards[1].title, "Another Card");
        assert_eq!(cards[1].global_rating_label(), "4.8");
        assert_eq!(cards[4], cards[0]);
    }

    #[test]
    fn only_sample_source_starts_with_cards() {
        assert!(FeedSource::Remote(AppConfig::default()).initial_cards().is_empty());
        assert_eq!(FeedSource::Sample.initial_cards().len(), 6);
    }
}
