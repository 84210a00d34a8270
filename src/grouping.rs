//! Item grouping pipeline
//!
//! Turns a raw item list into display groups:
//! - drop items with a missing or zero-length name
//! - bucket the rest by `list_id`
//! - order buckets by ascending `list_id`
//! - order each bucket by name (byte-wise `str` order, ties by `id`)

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items sharing one `list_id`, in display order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemGroup {
    /// Shared list identifier
    pub list_id: i64,
    /// Members, never empty
    pub items: Vec<Item>,
}

impl ItemGroup {
    /// Number of items in the group
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for groups produced by [`group_items`]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Names of the members in order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::display_name).collect()
    }
}

/// Filter, group and sort items for display
///
/// Pure function: the same input always yields the same output, and any
/// permutation of the input yields the same output.
pub fn group_items(items: &[Item]) -> Vec<ItemGroup> {
    let mut buckets: BTreeMap<i64, Vec<Item>> = BTreeMap::new();

    for item in items.iter().filter(|item| item.has_display_name()) {
        buckets.entry(item.list_id).or_default().push(item.clone());
    }

    buckets
        .into_iter()
        .map(|(list_id, mut items)| {
            items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
            ItemGroup { list_id, items }
        })
        .collect()
}
