/// Application settings that have to reach the browser bundle.
/// Values are read from the build environment, so the server binary and the
/// WASM bundle agree on them.
use crate::error::ConfigError;
use leptos::logging::warn;

pub const DEFAULT_FEED_ENDPOINT: &str = "/reviews/find";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub feed_endpoint: String,
    /// Give up on the feed request after this many milliseconds. `None` waits forever.
    pub fetch_timeout_ms: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_endpoint: DEFAULT_FEED_ENDPOINT.to_string(),
            fetch_timeout_ms: None,
        }
    }
}

impl AppConfig {
    pub fn from_values(endpoint: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let feed_endpoint = match endpoint.map(str::trim) {
            None => DEFAULT_FEED_ENDPOINT.to_string(),
            Some("") => return Err(ConfigError::EmptyEndpoint),
            Some(endpoint) => endpoint.to_string(),
        };

        let fetch_timeout_ms = match timeout_ms.map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(0) | Err(_) => return Err(ConfigError::InvalidTimeout(raw.to_string())),
                Ok(millis) => Some(millis),
            },
        };

        Ok(Self { feed_endpoint, fetch_timeout_ms })
    }

    /// Reads `MEDIAREVIEW_FEED_ENDPOINT` and `MEDIAREVIEW_FETCH_TIMEOUT_MS` as
    /// set at compile time. Bad values are logged and replaced by the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MEDIAREVIEW_FEED_ENDPOINT"),
            option_env!("MEDIAREVIEW_FETCH_TIMEOUT_MS"),
        )
        .unwrap_or_else(|err| {
            warn!("[CONFIG] {}; using defaults", err);
            Self::default()
        })
    }
}
