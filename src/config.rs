//! Application settings and fetch source selection

use crate::fetcher::{HttpFetcher, ItemFetcher, MockFetcher, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Application settings
///
/// Stored as JSON. A missing or blank file yields the defaults.
///
/// # Example
/// ```rust,no_run
/// use fetchlist::Settings;
///
/// let settings = Settings::load("fetchlist.json").expect("Failed to load");
/// println!("Endpoint: {}", settings.endpoint_url);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL returning the JSON item array
    pub endpoint_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if file doesn't exist
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values no fetch could succeed with
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Save settings to a JSON file, creating parent directories
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where items are fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchSource {
    /// Real HTTP endpoint
    #[default]
    Remote,
    /// Built-in demo dataset
    MockWithData,
    /// Mock returning no items
    MockEmpty,
    /// Mock that always fails
    MockError,
}

impl FetchSource {
    /// Resolve the source from the command-line mock flags
    ///
    /// The flags are meant to be exclusive; if several are set, empty data wins
    /// over the network error, which wins over the demo data.
    pub fn from_flags(mock_with_data: bool, mock_empty_data: bool, mock_network_error: bool) -> Self {
        if mock_empty_data {
            Self::MockEmpty
        } else if mock_network_error {
            Self::MockError
        } else if mock_with_data {
            Self::MockWithData
        } else {
            Self::Remote
        }
    }

    /// Human-readable label for logging
    pub fn label(&self) -> &str {
        match self {
            Self::Remote => "remote endpoint",
            Self::MockWithData => "mock-with-data",
            Self::MockEmpty => "mock-empty-data",
            Self::MockError => "mock-network-error",
        }
    }

    /// Build the fetcher for this source
    pub fn build_fetcher(&self, settings: &Settings) -> Result<Arc<dyn ItemFetcher>> {
        let fetcher: Arc<dyn ItemFetcher> = match self {
            Self::Remote => Arc::new(HttpFetcher::from_settings(settings)?),
            Self::MockWithData => Arc::new(MockFetcher::sample()),
            Self::MockEmpty => Arc::new(MockFetcher::empty()),
            Self::MockError => Arc::new(MockFetcher::failing()),
        };
        Ok(fetcher)
    }
}
