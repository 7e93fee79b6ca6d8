//! Commands the UI dispatches into the session, and the effects it gets back.
//!
//! The session owns all state; the UI layer only sends [`Command`]s and
//! renders the returned observable state plus any [`Effect`]s. The "short
//! delay" before a game-ending transition is an explicit two-phase commit:
//! the session parks a pending outcome and asks the host to send
//! [`Command::CommitPending`] after [`Effect::ScheduleCommit`]'s delay.

use std::time::Duration;

use game_data::{EndingKey, IconKey, ItemId};
use serde::{Deserialize, Serialize};

/// The two synthesis slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotIndex {
    Left,
    Right,
}

impl SlotIndex {
    /// All slot indices, left to right.
    pub const ALL: [SlotIndex; 2] = [SlotIndex::Left, SlotIndex::Right];

    /// Array index for this slot.
    pub fn index(self) -> usize {
        match self {
            SlotIndex::Left => 0,
            SlotIndex::Right => 1,
        }
    }
}

/// A discrete player (or scheduler) event dispatched into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Command {
    /// Double-click on a desktop icon.
    OpenIcon { icon: IconKey },
    /// Close the active window.
    CloseWindow,
    /// Drag an item from the inventory into a synthesis slot.
    DropOnSlot { item: ItemId, slot: SlotIndex },
    /// Drag an item from a synthesis slot back to the inventory.
    DropOnInventory { item: ItemId },
    /// Drag an item from the inventory onto a desktop icon.
    DropOnIcon { item: ItemId, icon: IconKey },
    /// Scheduler callback: commit the parked pending outcome.
    CommitPending,
}

/// Transient, informational notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The two slotted items form no recipe.
    CannotCombine,
    /// The target icon is still locked.
    IconLocked(IconKey),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::CannotCombine => write!(f, "这两个道具无法合成"),
            Notice::IconLocked(_) => write!(f, "无法访问：该图标已被锁定"),
        }
    }
}

/// Side effects a command produced, for the host to act on.
///
/// Every `Notify` is a fresh emission: a second failed synthesis re-fires
/// `CannotCombine` even if the previous toast is still showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Effect {
    /// Show a transient notification.
    Notify { notice: Notice },
    /// Send [`Command::CommitPending`] after the given delay.
    ScheduleCommit { after: Duration },
    /// The game resolved; render the terminal ending screen.
    Ended { ending: EndingKey },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_indices() {
        assert_eq!(SlotIndex::Left.index(), 0);
        assert_eq!(SlotIndex::Right.index(), 1);
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::CannotCombine.to_string(), "这两个道具无法合成");
    }
}
