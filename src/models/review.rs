// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_INITIAL_RATING: u8 = 3;
pub const DEFAULT_GLOBAL_RATING: f64 = 4.5;
/// Number of stars every rating control offers.
pub const MAX_RATING: u8 = 5;

/// One card in the review feed, as served by the feed endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCardData {
    pub icon: String,        // Material Icons ligature, e.g. "star"
    pub title: String,
    pub description: String,
    #[serde(default = "default_initial_rating", deserialize_with = "initial_rating_from_number")]
    pub initial_rating: u8,  // Viewer's starting rating, 0-5
    #[serde(default = "default_global_rating", deserialize_with = "global_rating_from_number")]
    pub global_rating: f64,  // Aggregate owned by the backend, read-only here
}

impl ReviewCardData {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            initial_rating: DEFAULT_INITIAL_RATING,
            global_rating: DEFAULT_GLOBAL_RATING,
        }
    }

    pub fn with_ratings(mut self, initial_rating: u8, global_rating: f64) -> Self {
        self.initial_rating = initial_rating;
        self.global_rating = global_rating;
        self
    }

    /// Global rating as shown in the card badge, always one fractional digit.
    pub fn global_rating_label(&self) -> String {
        format_global_rating(self.global_rating)
    }
}

/// Rounds to one decimal like JavaScript's `toFixed(1)`: exact ties go away
/// from zero instead of to the even digit. Only quarter values (x.25, x.75) can
/// be exact ties, since a tenth-and-a-half is representable only when `4 * value`
/// is an odd integer.
pub fn format_global_rating(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if is_tie {
        let magnitude = (value.abs() * 10.0).ceil() / 10.0;
        format!("{:.1}", magnitude.copysign(value))
    } else {
        format!("{:.1}", value)
    }
}

/// Text next to a card's rating control, e.g. `4/5`.
pub fn viewer_rating_label(current: u8) -> String {
    format!("{}/{}", current, MAX_RATING)
}

fn default_initial_rating() -> u8 {
    DEFAULT_INITIAL_RATING
}

fn default_global_rating() -> f64 {
    DEFAULT_GLOBAL_RATING
}

// A JSON `null` counts as absent. Fractional ratings are rounded to the nearest star.
fn initial_rating_from_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map_or(DEFAULT_INITIAL_RATING, |v| v.round() as u8))
}

fn global_rating_from_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(DEFAULT_GLOBAL_RATING))
}
