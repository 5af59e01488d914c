use serde::{
    Deserialize,
    Serialize,
};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/api";
pub const DEFAULT_MAX_RETRY: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything the rule collector needs to reach EPGStation.
///
/// The base URL is kept as given; it is parsed when the API client is built so
/// that a malformed URL fails the collector construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExporterConfig {
    pub base_url: String,
    /// Attempts per scrape, at least 1.
    pub max_retry: u32,
    /// Timeout of a single request.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retry: DEFAULT_MAX_RETRY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_retry == 0 {
            return Err(config::ConfigError::Message(
                "exporter.max_retry must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(config::ConfigError::Message(
                "exporter.timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
