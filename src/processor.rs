//! Item processor
//!
//! Requests items from an [`ItemFetcher`], runs them through
//! [`group_items`](crate::grouping::group_items) and publishes the outcome as an
//! [`ItemState`] on a `tokio::sync::watch` channel.
//!
//! A failed fetch publishes an empty state, so observers cannot tell it apart
//! from a successful fetch that returned no items. Overlapping `load_items`
//! calls are not sequenced: whichever fetch resolves last wins.

use crate::fetcher::ItemFetcher;
use crate::grouping::{group_items, ItemGroup};
use crate::item::Item;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// State published after each load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Every fetched item, unfiltered
    pub all_items: Vec<Item>,
    /// Filtered, grouped and sorted items
    pub groups: Vec<ItemGroup>,
}

impl ItemState {
    /// Build the state for a successful fetch
    pub fn from_items(items: Vec<Item>) -> Self {
        let groups = group_items(&items);
        Self {
            all_items: items,
            groups,
        }
    }

    /// True when there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of items across all groups
    pub fn visible_count(&self) -> usize {
        self.groups.iter().map(ItemGroup::len).sum()
    }
}

/// Loads items and publishes grouped state
#[derive(Clone)]
pub struct ItemProcessor {
    fetcher: Arc<dyn ItemFetcher>,
    state_tx: Arc<watch::Sender<ItemState>>,
}

impl ItemProcessor {
    /// Create a processor over the given fetch capability
    pub fn new(fetcher: Arc<dyn ItemFetcher>) -> Self {
        let (state_tx, _) = watch::channel(ItemState::default());
        Self {
            fetcher,
            state_tx: Arc::new(state_tx),
        }
    }

    /// Fetch once and publish the result
    ///
    /// On success the raw items and their groups are published together. On
    /// failure the error is logged and an empty state is published. In both
    /// cases `on_complete` runs exactly once, after publication.
    pub async fn load_items<F>(&self, on_complete: F)
    where
        F: FnOnce(),
    {
        let next = match self.fetcher.fetch_items().await {
            Ok(items) => {
                let state = ItemState::from_items(items);
                info!(
                    "Loaded {} items into {} groups",
                    state.all_items.len(),
                    state.groups.len()
                );
                state
            }
            Err(e) => {
                warn!("Failed to load items: {}", e);
                ItemState::default()
            }
        };

        self.state_tx.send_replace(next);
        on_complete();
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<ItemState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ItemState {
        self.state_tx.borrow().clone()
    }

    /// Every item from the last load, unfiltered
    pub fn all_items(&self) -> Vec<Item> {
        self.state_tx.borrow().all_items.clone()
    }

    /// Groups from the last load
    pub fn groups(&self) -> Vec<ItemGroup> {
        self.state_tx.borrow().groups.clone()
    }
}

impl std::fmt::Debug for ItemProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemProcessor")
            .field("state", &*self.state_tx.borrow())
            .finish_non_exhaustive()
    }
}
