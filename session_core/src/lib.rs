//! # Session Core
//!
//! The Item Synthesis & Narrative Resolution Engine: the stateful core of
//! the K-OS desktop simulator. It owns the player's inventory, the two-slot
//! crafting area, the lock/unlock gating of the three desktop icons, and the
//! deterministic rules that resolve a session into one of five endings.
//!
//! ## Core Components
//!
//! - **store**: inventory and synthesis slots with single-location ownership
//! - **session**: the `GameSession` aggregate dispatching UI commands
//! - **ending**: accumulated outcomes and the ending decision table
//! - **events**: the command/notice/effect surface exposed to the UI layer
//!
//! ## Design Philosophy
//!
//! - **Event-Driven**: the UI dispatches discrete commands; the engine runs
//!   each to completion and hands back effects to act on
//! - **No Fatal Errors**: invalid operations are silent no-ops; every
//!   reachable state has a defined transition toward an ending
//! - **Two-Phase Endings**: game-ending transitions park a pending outcome
//!   and commit it on a scheduler callback, never inside the triggering event

pub mod ending;
pub mod events;
pub mod icons;
pub mod session;
pub mod store;

pub use ending::*;
pub use events::*;
pub use icons::*;
pub use session::*;
pub use store::*;
