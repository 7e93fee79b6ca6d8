//! Item definitions - the collectibles the player gathers and combines.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for items.
///
/// Ids are always minted fresh (never read from data), so collisions are
/// impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Create a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty item ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two classes of items in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A starting collectible, granted when an icon's window is first opened.
    Plain,
    /// Produced only by successful synthesis; carries interaction power.
    Sacred,
}

/// A collectible item.
///
/// Items are identified by `id` for ownership tracking, but crafting and
/// interaction lookups go by `name`: names, not ids, are the domain identity
/// for recipes, so duplicate-named items are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    /// Mint a new plain item with a fresh id.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: ItemKind::Plain,
        }
    }

    /// Mint a new sacred item with a fresh id.
    pub fn sacred(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: ItemKind::Sacred,
        }
    }

    /// Check whether this item is sacred.
    pub fn is_sacred(&self) -> bool {
        self.kind == ItemKind::Sacred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_unique() {
        let a = Item::plain("一杯浓茶");
        let b = Item::plain("一杯浓茶");
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_item_kinds() {
        assert!(!Item::plain("map").is_sacred());
        assert!(Item::sacred("relic").is_sacred());
    }
}
