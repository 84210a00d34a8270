//! Fetchlist - fetch, filter, group and render a remote list of items
//!
//! This library provides the core functionality for Fetchlist: an injectable
//! fetch capability, the item-processing pipeline that turns raw items into
//! ordered groups, and a terminal front end that observes the published state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod fetcher;
pub mod grouping;
pub mod item;
pub mod processor;
pub mod tui;

pub use config::{FetchSource, Settings};
pub use fetcher::{HttpFetcher, ItemFetcher, MockBehavior, MockFetcher};
pub use grouping::{group_items, ItemGroup};
pub use item::Item;
pub use processor::{ItemProcessor, ItemState};

/// Result type alias for Fetchlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Fetchlist operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching items failed, either in transport or while decoding the payload
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Settings could not be read, parsed or written
    #[error("Config error: {0}")]
    Config(String),

    /// The log file could not be opened
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialize the Fetchlist library with logging
///
/// Log lines are appended to `log_path` so they never land on the terminal the
/// TUI draws on. Honors `RUST_LOG`, falling back to `info`. Once a subscriber
/// is installed, later calls only open the file.
pub fn init<P: AsRef<std::path::Path>>(log_path: P) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests;
