//! Items: definitions, effects and the catalog hands are drawn from.
//!
//! - `ItemDefinition`: shared, immutable catalog entry
//! - `HeldItem`: a player's spendable copy for one round
//! - `ItemEffect` / `EffectResult`: what using an item does and reports
//! - `ItemCatalog`: the fixed set of items and random draws

pub mod catalog;
pub mod definition;
pub mod effect;

pub use catalog::ItemCatalog;
pub use definition::{HeldItem, ItemDefinition, ItemKind};
pub use effect::{EffectContext, EffectResult, ItemEffect};
