//! # Game Data
//!
//! The "Game Data Bundle" crate - the immutable content a session is played
//! against: icon records, starting items, the recipe table, per-item
//! interaction effects, and the five endings. This crate is the single
//! source of truth for game content and contains no engine logic.

pub mod bundle;
pub mod items;

pub use bundle::*;
pub use items::*;
