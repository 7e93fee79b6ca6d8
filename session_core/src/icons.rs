//! Per-icon narrative state: content, lock gating, and interaction marks.

use game_data::{GameBundle, IconKey};
use serde::{Deserialize, Serialize};

/// An icon's narrative content.
///
/// Interaction rewrites content rather than replacing it: the old text is
/// kept struck-through and the effect's text is appended, so the UI can
/// render the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum IconContent {
    /// Untouched content from the bundle.
    Pristine { text: String },
    /// Content after a sacred-item interaction.
    Rewritten { struck: String, appended: String },
}

impl IconContent {
    /// The text a plain-text renderer would show.
    pub fn display_text(&self) -> String {
        match self {
            IconContent::Pristine { text } => text.clone(),
            IconContent::Rewritten { struck, appended } => {
                format!("~~{struck}~~\n{appended}")
            }
        }
    }
}

/// The state of one desktop icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconState {
    pub title: String,
    pub content: IconContent,
    pub locked: bool,
    pub interacted_once: bool,
    /// Whether this icon's plain items were already granted (first open).
    pub seeded: bool,
}

impl IconState {
    fn from_bundle(bundle: &GameBundle, key: IconKey) -> Self {
        let record = bundle.icon(key);
        Self {
            title: record.title.clone(),
            content: IconContent::Pristine {
                text: record.content.clone(),
            },
            // Only `docs` starts unlocked; the rest open up after the
            // docs icon is healed.
            locked: key != IconKey::Docs,
            interacted_once: false,
            seeded: false,
        }
    }

    /// Strike the current content and append the interaction text.
    pub fn rewrite(&mut self, appended: impl Into<String>) {
        let struck = match &self.content {
            IconContent::Pristine { text } => text.clone(),
            IconContent::Rewritten { appended, .. } => appended.clone(),
        };
        self.content = IconContent::Rewritten {
            struck,
            appended: appended.into(),
        };
    }
}

/// All three icon states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconBoard {
    docs: IconState,
    network: IconState,
    recycle: IconState,
}

impl IconBoard {
    /// Build the starting board for a bundle.
    pub fn from_bundle(bundle: &GameBundle) -> Self {
        Self {
            docs: IconState::from_bundle(bundle, IconKey::Docs),
            network: IconState::from_bundle(bundle, IconKey::Network),
            recycle: IconState::from_bundle(bundle, IconKey::Recycle),
        }
    }

    /// The state of an icon.
    pub fn get(&self, key: IconKey) -> &IconState {
        match key {
            IconKey::Docs => &self.docs,
            IconKey::Network => &self.network,
            IconKey::Recycle => &self.recycle,
        }
    }

    /// Mutable state of an icon.
    pub fn get_mut(&mut self, key: IconKey) -> &mut IconState {
        match key {
            IconKey::Docs => &mut self.docs,
            IconKey::Network => &mut self.network,
            IconKey::Recycle => &mut self.recycle,
        }
    }

    /// Unlock every icon. Fired once, by a Heal interaction on `docs`.
    pub fn unlock_all(&mut self) {
        for key in IconKey::ALL {
            self.get_mut(key).locked = false;
        }
    }

    /// How many icons have been interacted with.
    pub fn interacted_count(&self) -> usize {
        IconKey::ALL
            .iter()
            .filter(|k| self.get(**k).interacted_once)
            .count()
    }

    /// The single icon not yet interacted with, if exactly one remains.
    pub fn remaining_icon(&self) -> Option<IconKey> {
        let mut remaining = IconKey::ALL
            .into_iter()
            .filter(|k| !self.get(*k).interacted_once);
        match (remaining.next(), remaining.next()) {
            (Some(key), None) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_lock_state() {
        let board = IconBoard::from_bundle(&GameBundle::builtin());
        assert!(!board.get(IconKey::Docs).locked);
        assert!(board.get(IconKey::Network).locked);
        assert!(board.get(IconKey::Recycle).locked);
    }

    #[test]
    fn test_unlock_all() {
        let mut board = IconBoard::from_bundle(&GameBundle::builtin());
        board.unlock_all();
        for key in IconKey::ALL {
            assert!(!board.get(key).locked);
        }
    }

    #[test]
    fn test_rewrite_strikes_old_content() {
        let mut board = IconBoard::from_bundle(&GameBundle::builtin());
        let original = board.get(IconKey::Docs).content.display_text();

        board.get_mut(IconKey::Docs).rewrite("治愈发生。");
        match &board.get(IconKey::Docs).content {
            IconContent::Rewritten { struck, appended } => {
                assert_eq!(struck, &original);
                assert_eq!(appended, "治愈发生。");
            }
            other => panic!("expected rewritten content, got {other:?}"),
        }
    }

    #[test]
    fn test_remaining_icon() {
        let mut board = IconBoard::from_bundle(&GameBundle::builtin());
        assert_eq!(board.remaining_icon(), None);

        board.get_mut(IconKey::Docs).interacted_once = true;
        assert_eq!(board.remaining_icon(), None);

        board.get_mut(IconKey::Network).interacted_once = true;
        assert_eq!(board.remaining_icon(), Some(IconKey::Recycle));
        assert_eq!(board.interacted_count(), 2);
    }
}
