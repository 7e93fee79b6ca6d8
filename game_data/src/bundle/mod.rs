//! The Game Data Bundle - immutable content supplied once at session start.
//!
//! A bundle describes the three desktop icons and their narrative content,
//! the plain items granted when each icon is first opened, the symmetric
//! recipe table, the per-item interaction effects, and the five endings.
//! The engine treats all of this as read-only.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The three icon targets on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Docs,
    Network,
    Recycle,
}

impl IconKey {
    /// All icon keys, in display order.
    pub const ALL: [IconKey; 3] = [IconKey::Docs, IconKey::Network, IconKey::Recycle];
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IconKey::Docs => "docs",
            IconKey::Network => "network",
            IconKey::Recycle => "recycle",
        };
        write!(f, "{name}")
    }
}

/// Title and narrative content for one desktop icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub title: String,
    pub content: String,
}

/// A value keyed by icon, with every icon present.
///
/// Used for icon records and initial item lists, where the bundle contract
/// requires all three entries (an absent icon would be a malformed bundle,
/// so totality is enforced by the type rather than checked at runtime).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerIcon<T> {
    pub docs: T,
    pub network: T,
    pub recycle: T,
}

impl<T> PerIcon<T> {
    /// Get the value for an icon key.
    pub fn get(&self, key: IconKey) -> &T {
        match key {
            IconKey::Docs => &self.docs,
            IconKey::Network => &self.network,
            IconKey::Recycle => &self.recycle,
        }
    }
}

/// A crafting recipe, matched by unordered pair of item names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub first: String,
    pub second: String,
    pub result: String,
}

/// Canonical unordered key for a pair of item names.
///
/// Recipe lookup is symmetric: `(A, B)` and `(B, A)` map to the same key.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// The recipe table, indexed by canonical name pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Recipe>", into = "Vec<Recipe>")]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    by_pair: HashMap<(String, String), String>,
}

impl RecipeBook {
    /// Build a recipe book, rejecting duplicate pairs.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, BundleError> {
        let mut by_pair = HashMap::new();
        for recipe in &recipes {
            let key = pair_key(&recipe.first, &recipe.second);
            if by_pair.insert(key, recipe.result.clone()).is_some() {
                return Err(BundleError::DuplicateRecipe {
                    first: recipe.first.clone(),
                    second: recipe.second.clone(),
                });
            }
        }
        Ok(Self { recipes, by_pair })
    }

    /// Look up the result for two item names, in either order.
    pub fn find(&self, a: &str, b: &str) -> Option<&str> {
        self.by_pair.get(&pair_key(a, b)).map(String::as_str)
    }

    /// Check whether a name is produced by any recipe.
    pub fn produces(&self, name: &str) -> bool {
        self.recipes.iter().any(|r| r.result == name)
    }

    /// All recipes, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// The total number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl TryFrom<Vec<Recipe>> for RecipeBook {
    type Error = BundleError;

    fn try_from(recipes: Vec<Recipe>) -> Result<Self, Self::Error> {
        Self::new(recipes)
    }
}

impl From<RecipeBook> for Vec<Recipe> {
    fn from(book: RecipeBook) -> Self {
        book.recipes
    }
}

/// The two outcome classes of an icon interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Heal,
    NoHeal,
}

/// The effect a sacred item has on one icon.
///
/// `narrative` is the text appended to the icon's content; the old content
/// is preserved struck-through so the UI can render the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEffect {
    pub outcome: Outcome,
    pub narrative: String,
}

/// Per-icon effects for one sacred item. Entries are optional: a sacred
/// item only affects the icons it has an entry for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<IconEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<IconEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycle: Option<IconEffect>,
}

impl IconEffects {
    /// Get the effect for an icon key, if any.
    pub fn get(&self, key: IconKey) -> Option<&IconEffect> {
        match key {
            IconKey::Docs => self.docs.as_ref(),
            IconKey::Network => self.network.as_ref(),
            IconKey::Recycle => self.recycle.as_ref(),
        }
    }
}

/// The five fixed endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingKey {
    Compass,
    Bridge,
    Lie,
    Worlds,
    Dinner,
}

impl std::fmt::Display for EndingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EndingKey::Compass => "compass",
            EndingKey::Bridge => "bridge",
            EndingKey::Lie => "lie",
            EndingKey::Worlds => "worlds",
            EndingKey::Dinner => "dinner",
        };
        write!(f, "{name}")
    }
}

/// Title and description of one ending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingRecord {
    pub title: String,
    pub description: String,
}

/// All five ending records. Totality is enforced by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingTable {
    pub compass: EndingRecord,
    pub bridge: EndingRecord,
    pub lie: EndingRecord,
    pub worlds: EndingRecord,
    pub dinner: EndingRecord,
}

impl EndingTable {
    /// Get the record for an ending key.
    pub fn get(&self, key: EndingKey) -> &EndingRecord {
        match key {
            EndingKey::Compass => &self.compass,
            EndingKey::Bridge => &self.bridge,
            EndingKey::Lie => &self.lie,
            EndingKey::Worlds => &self.worlds,
            EndingKey::Dinner => &self.dinner,
        }
    }
}

/// Errors raised while loading or validating a bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to parse bundle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse bundle TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate recipe for pair `{first}` + `{second}`")]
    DuplicateRecipe { first: String, second: String },

    #[error("interaction effect references `{0}`, which no recipe produces")]
    EffectForUnknownItem(String),
}

/// The complete, validated game data bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameBundle {
    /// Title and narrative content per icon.
    pub icons: PerIcon<IconRecord>,

    /// Plain item names granted on first opening each icon's window.
    /// Item ids are minted by the engine at grant time.
    pub initial_items: PerIcon<Vec<String>>,

    /// The symmetric-pair recipe table.
    pub recipes: RecipeBook,

    /// Interaction effects keyed by sacred-item name.
    pub effects: HashMap<String, IconEffects>,

    /// The five ending descriptions.
    pub endings: EndingTable,
}

impl GameBundle {
    /// Load a bundle from JSON and validate it.
    pub fn from_json_str(source: &str) -> Result<Self, BundleError> {
        let bundle: GameBundle = serde_json::from_str(source)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Load a bundle from TOML and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, BundleError> {
        let bundle: GameBundle = toml::from_str(source)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Check cross-references between bundle sections.
    ///
    /// Duplicate recipe pairs are caught during deserialization; here we
    /// reject effect entries for item names no recipe can ever produce.
    pub fn validate(&self) -> Result<(), BundleError> {
        for name in self.effects.keys() {
            if !self.recipes.produces(name) {
                return Err(BundleError::EffectForUnknownItem(name.clone()));
            }
        }
        Ok(())
    }

    /// The icon record for a key.
    pub fn icon(&self, key: IconKey) -> &IconRecord {
        self.icons.get(key)
    }

    /// The initial plain item names for an icon.
    pub fn initial_items(&self, key: IconKey) -> &[String] {
        self.initial_items.get(key)
    }

    /// Look up a recipe result for two item names, order-independent.
    pub fn find_recipe(&self, a: &str, b: &str) -> Option<&str> {
        self.recipes.find(a, b)
    }

    /// Look up the interaction effect of a sacred item on an icon.
    pub fn effect(&self, item_name: &str, icon: IconKey) -> Option<&IconEffect> {
        self.effects.get(item_name).and_then(|e| e.get(icon))
    }

    /// Whether any effect entry exists for an item name.
    pub fn has_effects_for(&self, item_name: &str) -> bool {
        self.effects.contains_key(item_name)
    }

    /// The ending record for a key.
    pub fn ending(&self, key: EndingKey) -> &EndingRecord {
        self.endings.get(key)
    }
}
