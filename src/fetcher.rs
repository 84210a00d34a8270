//! Fetch capability
//!
//! This module abstracts where items come from:
//! - [`ItemFetcher`] - the one-method async interface the processor consumes
//! - [`HttpFetcher`] - a single HTTP GET against the configured endpoint
//! - [`MockFetcher`] - fixed items, an empty list, or a forced failure
//!
//! Every failure, whatever its cause, is reported as [`Error::Fetch`].

use crate::config::Settings;
use crate::item::{decode_items, Item};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Default endpoint serving the item list
pub const DEFAULT_ENDPOINT: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Source of raw items
#[async_trait]
pub trait ItemFetcher: Send + Sync {
    /// Fetch the full item list
    ///
    /// # Errors
    ///
    /// Returns `Error::Fetch` for transport and decode failures alike
    async fn fetch_items(&self) -> Result<Vec<Item>>;
}

/// Fetcher backed by a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// Endpoint returning a JSON array of items
    url: String,
    /// HTTP client with the request timeout applied
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher for `url` with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher for `url` with an explicit request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(url, client))
    }

    /// Create a fetcher around a preconfigured client
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// Create a fetcher from application settings
    ///
    /// Fails with `Error::Config` if the settings do not validate.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::with_timeout(settings.endpoint_url.clone(), settings.request_timeout())
    }

    /// Endpoint this fetcher queries
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ItemFetcher for HttpFetcher {
    async fn fetch_items(&self) -> Result<Vec<Item>> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Endpoint {} answered with status {}", self.url, status);
            return Err(Error::Fetch(format!("Unexpected status {} from {}", status, self.url)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read response body: {}", e)))?;

        let items = decode_items(&body)?;
        info!("Fetched {} items from {}", items.len(), self.url);
        Ok(items)
    }
}

/// What a [`MockFetcher`] answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    /// Return these items
    Items(Vec<Item>),
    /// Return an empty list
    Empty,
    /// Fail unconditionally
    Error,
}

/// In-memory fetcher for tests and demo runs
#[derive(Debug)]
pub struct MockFetcher {
    behavior: Mutex<MockBehavior>,
    calls: AtomicUsize,
}

impl MockFetcher {
    /// Create a mock with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock returning a fixed item list
    pub fn with_items(items: Vec<Item>) -> Self {
        Self::new(MockBehavior::Items(items))
    }

    /// Mock returning no items
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Error)
    }

    /// Mock serving the small demo dataset
    pub fn sample() -> Self {
        Self::with_items(sample_items())
    }

    /// Replace the behavior used by subsequent calls
    pub async fn set_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.behavior.lock().await;
        *guard = behavior;
    }

    /// Number of times `fetch_items` has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemFetcher for MockFetcher {
    async fn fetch_items(&self) -> Result<Vec<Item>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &*self.behavior.lock().await {
            MockBehavior::Items(items) => Ok(items.clone()),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::Error => Err(Error::Fetch("Mock network error".to_string())),
        }
    }
}

/// Demo dataset served by `--mock-with-data`
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(1, 1, Some("Item 1")),
        Item::new(2, 1, Some("Item 2")),
        Item::new(3, 2, Some("Item 3")),
    ]
}
