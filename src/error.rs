use thiserror::Error;

/// Every way loading the review feed can fail. The screen logs these and keeps
/// whatever cards it already shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode review cards: {0}")]
    Decode(String),

    #[error("no response from {endpoint} within {millis} ms")]
    Timeout { endpoint: String, millis: u32 },
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("feed endpoint must not be empty")]
    EmptyEndpoint,

    #[error("fetch timeout must be a positive number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
}
