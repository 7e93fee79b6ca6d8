//! Synthesis resolution - what happens when both slots fill.
//!
//! Fires exactly once per slot-fill transition. A matching recipe mints a
//! sacred item; a non-match is triaged into one of three policies, in
//! priority order: the designed early failure, the dead-end safety net, or
//! an ordinary recoverable failure.

use game_data::{IconKey, Item, Outcome};
use tracing::debug;

use super::{GameSession, PendingOutcome};
use crate::events::{Effect, Notice};

impl GameSession {
    pub(super) fn resolve_synthesis(&mut self) -> Vec<Effect> {
        let Some((left, right)) = self.store.both_slots() else {
            return Vec::new();
        };
        let left_name = left.name.clone();
        let right_name = right.name.clone();
        let both_plain = !left.is_sacred() && !right.is_sacred();

        if let Some(result) = self.bundle.find_recipe(&left_name, &right_name) {
            let result = result.to_string();
            self.store.take_slots();
            debug!(item = %result, "synthesis succeeded");
            self.store.add_items([Item::sacred(result)]);
            return Vec::new();
        }

        // Early designed failure: two of the docs icon's own starting items
        // with no recipe between them. This is the scripted wrong path, not
        // a recoverable mistake; the items are consumed with the attempt.
        let docs_initial = self.bundle.initial_items(IconKey::Docs);
        if docs_initial.iter().any(|n| n == &left_name)
            && docs_initial.iter().any(|n| n == &right_name)
        {
            self.store.take_slots();
            self.results.force(IconKey::Docs, Outcome::NoHeal);
            debug!("early designed failure, finalizing");
            return vec![self.schedule_finalize()];
        }

        // Dead end: two icons already interacted, nothing left in the
        // inventory, and two plain items that combine into nothing. No
        // further sacred item can ever be produced from here, so the game
        // resolves itself instead of leaving the slots stuck full.
        if both_plain && self.store.inventory_is_empty() && self.icons.interacted_count() == 2 {
            if let Some(remaining) = self.icons.remaining_icon() {
                self.store.take_slots();
                self.results.force(remaining, Outcome::NoHeal);
                debug!(icon = %remaining, "dead end reached, finalizing");
                return vec![self.schedule_finalize()];
            }
        }

        // Ordinary failure: toast, then return the items after a short
        // delay. The notice is a fresh emission on every failure.
        self.pending = Some(PendingOutcome::ReturnSlotItems);
        vec![
            Effect::Notify {
                notice: Notice::CannotCombine,
            },
            Effect::ScheduleCommit {
                after: self.config.slot_return_delay,
            },
        ]
    }
}
