//! Ending resolution - the deterministic decision table over accumulated
//! interaction outcomes.

use std::collections::HashMap;

use game_data::{EndingKey, IconKey, Outcome};
use serde::{Deserialize, Serialize};

/// The per-icon outcomes accumulated over a session.
///
/// Keys are written once per icon, with one exception: the dead-end
/// short circuit may forcibly set the remaining icon to `NoHeal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResults {
    outcomes: HashMap<IconKey, Outcome>,
}

impl InteractionResults {
    /// Create an empty results map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome for an icon; keeps the first write if one exists.
    pub fn record(&mut self, icon: IconKey, outcome: Outcome) {
        self.outcomes.entry(icon).or_insert(outcome);
    }

    /// Forcibly set an icon's outcome, overwriting any prior value.
    ///
    /// Only the dead-end and early-failure short circuits use this.
    pub fn force(&mut self, icon: IconKey, outcome: Outcome) {
        self.outcomes.insert(icon, outcome);
    }

    /// The recorded outcome for an icon, if any.
    pub fn get(&self, icon: IconKey) -> Option<Outcome> {
        self.outcomes.get(&icon).copied()
    }

    /// The number of icons with a recorded outcome.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no outcome has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Select the ending for a finalized results map.
///
/// The table is evaluated top to bottom, first match wins. `Compass` is the
/// designed catch-all for partial maps, which the short-circuit paths
/// legitimately produce: the relationship was never repaired.
pub fn resolve_ending(results: &InteractionResults) -> EndingKey {
    use Outcome::{Heal, NoHeal};

    let docs = results.get(IconKey::Docs);
    let network = results.get(IconKey::Network);
    let recycle = results.get(IconKey::Recycle);

    match (docs, network, recycle) {
        (Some(NoHeal), _, _) => EndingKey::Compass,
        (Some(Heal), Some(Heal), Some(Heal)) => EndingKey::Bridge,
        (Some(Heal), Some(NoHeal), Some(Heal)) => EndingKey::Lie,
        (Some(Heal), Some(Heal), Some(NoHeal)) => EndingKey::Worlds,
        (Some(Heal), Some(NoHeal), Some(NoHeal)) => EndingKey::Dinner,
        _ => EndingKey::Compass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Outcome::{Heal, NoHeal};

    fn results(entries: &[(IconKey, Outcome)]) -> InteractionResults {
        let mut results = InteractionResults::new();
        for (icon, outcome) in entries {
            results.force(*icon, *outcome);
        }
        results
    }

    #[test]
    fn test_full_decision_table() {
        let cases = [
            (
                vec![(IconKey::Docs, NoHeal)],
                EndingKey::Compass,
            ),
            (
                vec![
                    (IconKey::Docs, NoHeal),
                    (IconKey::Network, Heal),
                    (IconKey::Recycle, Heal),
                ],
                EndingKey::Compass,
            ),
            (
                vec![
                    (IconKey::Docs, Heal),
                    (IconKey::Network, Heal),
                    (IconKey::Recycle, Heal),
                ],
                EndingKey::Bridge,
            ),
            (
                vec![
                    (IconKey::Docs, Heal),
                    (IconKey::Network, NoHeal),
                    (IconKey::Recycle, Heal),
                ],
                EndingKey::Lie,
            ),
            (
                vec![
                    (IconKey::Docs, Heal),
                    (IconKey::Network, Heal),
                    (IconKey::Recycle, NoHeal),
                ],
                EndingKey::Worlds,
            ),
            (
                vec![
                    (IconKey::Docs, Heal),
                    (IconKey::Network, NoHeal),
                    (IconKey::Recycle, NoHeal),
                ],
                EndingKey::Dinner,
            ),
        ];

        for (entries, expected) in cases {
            assert_eq!(resolve_ending(&results(&entries)), expected);
        }
    }

    #[test]
    fn test_partial_maps_fall_back_to_compass() {
        assert_eq!(resolve_ending(&InteractionResults::new()), EndingKey::Compass);
        assert_eq!(
            resolve_ending(&results(&[(IconKey::Docs, Heal)])),
            EndingKey::Compass
        );
        assert_eq!(
            resolve_ending(&results(&[
                (IconKey::Docs, Heal),
                (IconKey::Recycle, NoHeal)
            ])),
            EndingKey::Compass
        );
    }

    #[test]
    fn test_record_is_write_once() {
        let mut r = InteractionResults::new();
        r.record(IconKey::Docs, Heal);
        r.record(IconKey::Docs, NoHeal);
        assert_eq!(r.get(IconKey::Docs), Some(Heal));
    }

    #[test]
    fn test_force_overrides() {
        let mut r = InteractionResults::new();
        r.record(IconKey::Recycle, Heal);
        r.force(IconKey::Recycle, NoHeal);
        assert_eq!(r.get(IconKey::Recycle), Some(NoHeal));
    }
}
