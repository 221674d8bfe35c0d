//! Tracker configuration.
//!
//! Holds the refresh interval used while the info panel is visible.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{InfoError, InfoResult};

/// Environment variable overriding the refresh interval, in milliseconds.
pub const REFRESH_INTERVAL_ENV: &str = "WHITEBOARD_INFO_REFRESH_MS";

/// Default refresh frequency is 5 per second.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 200;

/// Configuration for a [`DisplayStateTracker`](crate::tracker::DisplayStateTracker).
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use whiteboard_info::config::InfoConfig;
///
/// let config = InfoConfig::default()
///     .with_refresh_interval(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoConfig {
    /// How often the info panel is refreshed while visible
    pub refresh_interval: Duration,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
        }
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfoConfigFile {
    refresh_interval_ms: Option<u64>,
}

impl InfoConfig {
    /// Create a new InfoConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the refresh interval.
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Reject configurations the tracker cannot run with.
    pub fn validate(&self) -> InfoResult<()> {
        if self.refresh_interval.is_zero() {
            return Err(InfoError::invalid_config(
                "refresh_interval",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Create config from the environment.
    ///
    /// Falls back to defaults when `WHITEBOARD_INFO_REFRESH_MS` is unset.
    pub fn from_env() -> InfoResult<Self> {
        match std::env::var(REFRESH_INTERVAL_ENV) {
            Ok(raw) => Self::default().with_refresh_ms_str(REFRESH_INTERVAL_ENV, &raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from a JSON file of the form `{"refreshIntervalMs": 500}`.
    ///
    /// Missing keys keep their default.
    pub fn from_json_file(path: impl AsRef<Path>) -> InfoResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| InfoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: InfoConfigFile = serde_json::from_str(&contents)?;

        let mut config = Self::default();
        if let Some(ms) = file.refresh_interval_ms {
            config.refresh_interval = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }

    fn with_refresh_ms_str(self, key: &str, raw: &str) -> InfoResult<Self> {
        let ms: u64 = raw
            .trim()
            .parse()
            .map_err(|e| InfoError::invalid_config(key, format!("{raw:?}: {e}")))?;
        let config = self.with_refresh_interval(Duration::from_millis(ms));
        config.validate()?;
        Ok(config)
    }
}
