//! The game session aggregate - one owned state machine per play session.
//!
//! All mutation happens through [`GameSession::apply`]: the UI dispatches
//! [`Command`]s, the session runs each to completion and returns the
//! [`Effect`]s the host should act on. There is no interior concurrency;
//! the session is a single logical actor.

mod interaction;
mod synthesis;

use std::time::Duration;

use game_data::{EndingKey, EndingRecord, GameBundle, IconKey, Item, ItemId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ending::{resolve_ending, InteractionResults};
use crate::events::{Command, Effect, Notice, SlotIndex};
use crate::icons::{IconBoard, IconState};
use crate::store::ItemStore;

/// Tunable session parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Delay before a parked game-ending outcome commits. Lets the UI show
    /// the triggering content first; the commit itself always fires once.
    pub finalize_delay: Duration,
    /// Delay before failed-synthesis items return to the inventory.
    pub slot_return_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            finalize_delay: Duration::from_millis(1500),
            slot_return_delay: Duration::from_millis(900),
        }
    }
}

/// A resolved-but-not-yet-committed outcome, waiting for the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PendingOutcome {
    /// Drain the synthesis slots back into the inventory.
    ReturnSlotItems,
    /// Finalize the game from the current results.
    Finalize,
}

/// The complete state of one play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    bundle: GameBundle,
    config: SessionConfig,
    store: ItemStore,
    icons: IconBoard,
    results: InteractionResults,
    active_window: Option<IconKey>,
    pending: Option<PendingOutcome>,
    ended: Option<EndingKey>,
}

impl GameSession {
    /// Start a session over a bundle with default configuration.
    pub fn new(bundle: GameBundle) -> Self {
        Self::with_config(bundle, SessionConfig::default())
    }

    /// Start a session with explicit configuration.
    pub fn with_config(bundle: GameBundle, config: SessionConfig) -> Self {
        let icons = IconBoard::from_bundle(&bundle);
        Self {
            bundle,
            config,
            store: ItemStore::new(),
            icons,
            results: InteractionResults::new(),
            active_window: None,
            pending: None,
            ended: None,
        }
    }

    /// Dispatch one command, run it to completion, and return its effects.
    ///
    /// While an outcome is parked (between resolve and commit) every command
    /// except [`Command::CommitPending`] is silently ignored, and once the
    /// session has ended all commands are; both states have no transitions
    /// other than the ones already scheduled.
    pub fn apply(&mut self, command: Command) -> Vec<Effect> {
        if self.ended.is_some() {
            return Vec::new();
        }
        if self.pending.is_some() && command != Command::CommitPending {
            return Vec::new();
        }

        match command {
            Command::OpenIcon { icon } => self.open_icon(icon),
            Command::CloseWindow => {
                self.active_window = None;
                Vec::new()
            }
            Command::DropOnSlot { item, slot } => self.drop_on_slot(item, slot),
            Command::DropOnInventory { item } => {
                // Re-validated against actual slot contents; a stale drag
                // from the UI is silently rejected.
                self.store.move_to_inventory(item);
                Vec::new()
            }
            Command::DropOnIcon { item, icon } => self.drop_on_icon(item, icon),
            Command::CommitPending => self.commit_pending(),
        }
    }

    fn open_icon(&mut self, icon: IconKey) -> Vec<Effect> {
        if self.icons.get(icon).locked {
            return vec![Effect::Notify {
                notice: Notice::IconLocked(icon),
            }];
        }

        self.active_window = Some(icon);

        if !self.icons.get(icon).seeded {
            self.icons.get_mut(icon).seeded = true;
            let granted: Vec<Item> = self
                .bundle
                .initial_items(icon)
                .iter()
                .map(|name| Item::plain(name.clone()))
                .collect();
            debug!(icon = %icon, count = granted.len(), "first open, granting plain items");
            self.store.add_items(granted);
        }

        Vec::new()
    }

    fn drop_on_slot(&mut self, item: ItemId, slot: SlotIndex) -> Vec<Effect> {
        if !self.store.move_to_slot(item, slot) {
            return Vec::new();
        }
        // Edge-triggered: only the move that fills the second slot resolves.
        if self.store.both_slots().is_some() {
            self.resolve_synthesis()
        } else {
            Vec::new()
        }
    }

    fn commit_pending(&mut self) -> Vec<Effect> {
        match self.pending.take() {
            None => Vec::new(),
            Some(PendingOutcome::ReturnSlotItems) => {
                self.store.return_slots_to_inventory();
                Vec::new()
            }
            Some(PendingOutcome::Finalize) => {
                let ending = resolve_ending(&self.results);
                self.ended = Some(ending);
                self.active_window = None;
                info!(ending = %ending, "session resolved");
                vec![Effect::Ended { ending }]
            }
        }
    }

    /// Park a finalize and tell the host when to commit it.
    fn schedule_finalize(&mut self) -> Effect {
        self.pending = Some(PendingOutcome::Finalize);
        Effect::ScheduleCommit {
            after: self.config.finalize_delay,
        }
    }

    // Observable state, the UI's read surface.

    /// The inventory, in insertion order.
    pub fn inventory(&self) -> &[Item] {
        self.store.inventory()
    }

    /// The item in a synthesis slot, if any.
    pub fn slot(&self, slot: SlotIndex) -> Option<&Item> {
        self.store.slot(slot)
    }

    /// The state of a desktop icon.
    pub fn icon(&self, key: IconKey) -> &IconState {
        self.icons.get(key)
    }

    /// The currently open window, if any.
    pub fn active_window(&self) -> Option<IconKey> {
        self.active_window
    }

    /// The accumulated per-icon outcomes.
    pub fn results(&self) -> &InteractionResults {
        &self.results
    }

    /// Whether a resolved outcome is waiting for its commit.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the session has reached a terminal ending.
    pub fn is_ended(&self) -> bool {
        self.ended.is_some()
    }

    /// The selected ending key, once the session has ended.
    pub fn ending_key(&self) -> Option<EndingKey> {
        self.ended
    }

    /// The terminal ending record, once the session has ended.
    pub fn ending(&self) -> Option<&EndingRecord> {
        self.ended.map(|key| self.bundle.ending(key))
    }

    /// The bundle this session plays against.
    pub fn bundle(&self) -> &GameBundle {
        &self.bundle
    }
}
