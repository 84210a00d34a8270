//! Item data model
//!
//! An [`Item`] is one record of the remote JSON array. Only `name` is optional;
//! the payload may carry it as `null` or leave the key out entirely.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name shown for an item whose name is missing
pub const UNKNOWN_NAME: &str = "Unknown";

/// A single item retrieved from the remote endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within one response (not enforced)
    pub id: i64,
    /// Grouping bucket this item belongs to
    #[serde(rename = "listId")]
    pub list_id: i64,
    /// Display name, possibly absent or empty
    #[serde(default)]
    pub name: Option<String>,
}

impl Item {
    /// Create a new item
    pub fn new(id: i64, list_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            list_id,
            name: name.map(str::to_string),
        }
    }

    /// True when the item carries a non-empty name
    ///
    /// Whitespace-only names count as present; nothing is trimmed.
    pub fn has_display_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Name to render, or [`UNKNOWN_NAME`] when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Decode a JSON array of items
///
/// Decode failures surface as [`Error::Fetch`], the same kind a transport
/// failure produces.
pub fn decode_items(bytes: &[u8]) -> Result<Vec<Item>> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::Fetch(format!("Failed to decode items: {}", e)))
}
