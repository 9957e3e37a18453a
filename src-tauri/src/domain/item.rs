//! Item Entity
//!
//! A list entry with a stable numeric id and an editable display name.

use serde::{Deserialize, Serialize};

/// Number of entries in the synthetic startup list
pub const SAMPLE_SIZE: u32 = 10_000;

/// A single list entry
///
/// The id is the item's identity and never changes; only the name is edited.
/// Uniqueness of ids is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: u32,
    /// Editable display name
    pub name: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Build the synthetic startup list: ids 1..=count, names "Item {id}"
pub fn sample_list(count: u32) -> Vec<Item> {
    (1..=count)
        .map(|id| Item::new(id, format!("Item {}", id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_list_shape() {
        let items = sample_list(3);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Item::new(1, "Item 1"));
        assert_eq!(items[2], Item::new(3, "Item 3"));
    }

    #[test]
    fn test_item_json_field_names() {
        let value = serde_json::to_value(Item::new(1, "Item 1")).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "name": "Item 1"}));
    }
}
