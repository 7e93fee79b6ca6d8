//! Inventory & slot store - owns the player's held items and the two
//! pending-synthesis slots.
//!
//! Every item lives in exactly one place: the inventory or one of the two
//! slots. Moves are modeled as remove-then-place of the same owned [`Item`],
//! so an id can never appear in two locations at once. All operations that
//! cannot be satisfied (stale drag source, occupied target slot, unknown id)
//! fail silently and leave state unchanged, tolerating stale UI claims.

use game_data::{Item, ItemId};
use serde::{Deserialize, Serialize};

use crate::events::SlotIndex;

/// Where an item currently resides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemLocation {
    Inventory,
    Slot(SlotIndex),
}

/// The player's items: an ordered inventory plus two synthesis slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemStore {
    inventory: Vec<Item>,
    slots: [Option<Item>; 2],
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append items to the end of the inventory.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.inventory.extend(items);
    }

    /// Move an item from the inventory into a slot.
    ///
    /// No-op if the item is not currently in the inventory or the target
    /// slot is already occupied. Returns whether the move happened.
    pub fn move_to_slot(&mut self, id: ItemId, slot: SlotIndex) -> bool {
        if self.slots[slot.index()].is_some() {
            return false;
        }
        let Some(pos) = self.inventory.iter().position(|i| i.id == id) else {
            return false;
        };
        let item = self.inventory.remove(pos);
        self.slots[slot.index()] = Some(item);
        true
    }

    /// Move an item from whichever slot holds it back to the inventory.
    ///
    /// No-op if the item is not in either slot. Returns whether the move
    /// happened. Returned items are appended at the end of the inventory.
    pub fn move_to_inventory(&mut self, id: ItemId) -> bool {
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|i| i.id == id) {
                if let Some(item) = slot.take() {
                    self.inventory.push(item);
                    return true;
                }
            }
        }
        false
    }

    /// Remove an item from the inventory, consuming it.
    ///
    /// Used when a sacred item is spent on an icon. No-op if absent.
    pub fn remove_from_inventory(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.inventory.iter().position(|i| i.id == id)?;
        Some(self.inventory.remove(pos))
    }

    /// Take both slot items out, leaving the slots empty.
    ///
    /// The caller decides whether the items return to the inventory
    /// (ordinary synthesis failure) or are discarded (short-circuit paths).
    pub fn take_slots(&mut self) -> [Option<Item>; 2] {
        [self.slots[0].take(), self.slots[1].take()]
    }

    /// Drain whatever is still in the slots back into the inventory.
    pub fn return_slots_to_inventory(&mut self) {
        for slot in &mut self.slots {
            if let Some(item) = slot.take() {
                self.inventory.push(item);
            }
        }
    }

    /// The inventory, in insertion order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Whether the inventory is empty.
    pub fn inventory_is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Look up an inventory item by id.
    pub fn in_inventory(&self, id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|i| i.id == id)
    }

    /// The item in a slot, if any.
    pub fn slot(&self, slot: SlotIndex) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    /// Both slot items, if both slots are occupied.
    pub fn both_slots(&self) -> Option<(&Item, &Item)> {
        match (&self.slots[0], &self.slots[1]) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// Where an item currently resides, if anywhere.
    pub fn locate(&self, id: ItemId) -> Option<ItemLocation> {
        if self.in_inventory(id).is_some() {
            return Some(ItemLocation::Inventory);
        }
        for slot in SlotIndex::ALL {
            if self.slots[slot.index()].as_ref().is_some_and(|i| i.id == id) {
                return Some(ItemLocation::Slot(slot));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> (ItemStore, Vec<ItemId>) {
        let mut store = ItemStore::new();
        let items: Vec<Item> = names.iter().map(|n| Item::plain(*n)).collect();
        let ids = items.iter().map(|i| i.id).collect();
        store.add_items(items);
        (store, ids)
    }

    #[test]
    fn test_move_to_slot_and_back() {
        let (mut store, ids) = store_with(&["A", "B"]);

        assert!(store.move_to_slot(ids[0], SlotIndex::Left));
        assert_eq!(store.inventory().len(), 1);
        assert_eq!(store.slot(SlotIndex::Left).unwrap().id, ids[0]);

        assert!(store.move_to_inventory(ids[0]));
        assert!(store.slot(SlotIndex::Left).is_none());
        assert_eq!(store.inventory().len(), 2);
        // Returned items append at the end.
        assert_eq!(store.inventory()[1].id, ids[0]);
    }

    #[test]
    fn test_slot_exclusivity() {
        let (mut store, ids) = store_with(&["A"]);
        store.move_to_slot(ids[0], SlotIndex::Left);

        let in_inventory = store.in_inventory(ids[0]).is_some();
        let in_left = store.slot(SlotIndex::Left).is_some();
        let in_right = store.slot(SlotIndex::Right).is_some();
        assert_eq!(
            [in_inventory, in_left, in_right],
            [false, true, false]
        );
    }

    #[test]
    fn test_occupied_slot_rejects_move() {
        let (mut store, ids) = store_with(&["A", "B"]);
        assert!(store.move_to_slot(ids[0], SlotIndex::Left));
        assert!(!store.move_to_slot(ids[1], SlotIndex::Left));
        assert_eq!(store.slot(SlotIndex::Left).unwrap().id, ids[0]);
        assert!(store.in_inventory(ids[1]).is_some());
    }

    #[test]
    fn test_stale_moves_are_silent_noops() {
        let (mut store, ids) = store_with(&["A"]);
        let ghost = ItemId::new();

        assert!(!store.move_to_slot(ghost, SlotIndex::Left));
        assert!(!store.move_to_inventory(ids[0])); // not in a slot
        assert!(store.remove_from_inventory(ghost).is_none());
        assert_eq!(store.inventory().len(), 1);
    }

    #[test]
    fn test_take_slots_discards_ownership() {
        let (mut store, ids) = store_with(&["A", "B"]);
        store.move_to_slot(ids[0], SlotIndex::Left);
        store.move_to_slot(ids[1], SlotIndex::Right);

        let taken = store.take_slots();
        assert!(taken[0].is_some() && taken[1].is_some());
        assert!(store.both_slots().is_none());
        assert!(store.inventory_is_empty());
    }

    #[test]
    fn test_return_slots_to_inventory_drains_whatever_remains() {
        let (mut store, ids) = store_with(&["A", "B"]);
        store.move_to_slot(ids[0], SlotIndex::Left);
        store.move_to_slot(ids[1], SlotIndex::Right);
        // Player manually pulled one back before the scheduled return fired.
        store.move_to_inventory(ids[0]);

        store.return_slots_to_inventory();
        assert_eq!(store.inventory().len(), 2);
        assert!(store.slot(SlotIndex::Right).is_none());
    }

    #[test]
    fn test_locate() {
        let (mut store, ids) = store_with(&["A", "B"]);
        store.move_to_slot(ids[1], SlotIndex::Right);

        assert_eq!(store.locate(ids[0]), Some(ItemLocation::Inventory));
        assert_eq!(store.locate(ids[1]), Some(ItemLocation::Slot(SlotIndex::Right)));
        assert_eq!(store.locate(ItemId::new()), None);
    }
}
