//! Icon interactions - a sacred item dropped onto a desktop icon.

use game_data::{IconKey, ItemId, Outcome};
use tracing::{debug, warn};

use super::GameSession;
use crate::events::{Effect, Notice};

impl GameSession {
    pub(super) fn drop_on_icon(&mut self, item: ItemId, icon: IconKey) -> Vec<Effect> {
        if self.icons.get(icon).locked {
            return vec![Effect::Notify {
                notice: Notice::IconLocked(icon),
            }];
        }
        if self.icons.get(icon).interacted_once {
            return Vec::new();
        }

        // Re-validate the drag source; a stale UI claim is silently
        // rejected and the item stays wherever it actually is.
        let Some(dropped) = self.store.in_inventory(item) else {
            return Vec::new();
        };
        if !dropped.is_sacred() {
            return Vec::new();
        }
        let name = dropped.name.clone();

        let Some(effect) = self.bundle.effect(&name, icon) else {
            if !self.bundle.has_effects_for(&name) {
                // A sacred item with no effect entry at all means the
                // bundle broke its contract; an entry for a different icon
                // is just an unproductive drop.
                warn!(item = %name, "sacred item has no interaction effects in bundle");
            }
            return Vec::new();
        };
        let outcome = effect.outcome;
        let narrative = effect.narrative.clone();

        self.store.remove_from_inventory(item);
        let state = self.icons.get_mut(icon);
        state.rewrite(narrative);
        state.interacted_once = true;
        self.results.record(icon, outcome);
        debug!(item = %name, icon = %icon, outcome = ?outcome, "icon interaction applied");

        if icon == IconKey::Docs && outcome == Outcome::Heal {
            // The only unlock trigger in the system.
            self.icons.unlock_all();
        }

        if icon == IconKey::Docs && outcome == Outcome::NoHeal {
            // The other icons stay locked forever in this branch, so the
            // game finalizes from the partial results.
            return vec![self.schedule_finalize()];
        }
        if self.icons.interacted_count() == IconKey::ALL.len() {
            return vec![self.schedule_finalize()];
        }

        Vec::new()
    }
}
