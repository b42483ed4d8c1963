//! # shotgun-roulette
//!
//! A turn-based elimination game engine. Players take turns firing a
//! shared, randomized sequence of live and blank shells at themselves or
//! each other, using items for information or an edge, until one player
//! is left.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine exposes state transitions and
//!    emits structured events. Rendering and input live elsewhere.
//!
//! 2. **Deterministic**: All randomness comes from a seeded `GameRng`.
//!    The same seed replays the same game; a `Script` pins exact shells
//!    and hands for tests.
//!
//! 3. **Atomic Operations**: Every operation either applies in full or
//!    fails with a `GameError` before touching any state.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, RNG, errors
//! - `shells`: Shells and the per-round shell sequence
//! - `items`: Item definitions, effects and the catalog
//! - `events`: Game events and their delivery
//! - `engine`: Turn order, shot resolution and round transitions

pub mod core;
pub mod engine;
pub mod events;
pub mod items;
pub mod shells;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Player, PlayerId, Result};

pub use crate::shells::{Shell, ShellSequence};

pub use crate::items::{EffectResult, HeldItem, ItemCatalog, ItemDefinition, ItemEffect, ItemKind};

pub use crate::events::{EventBus, EventListener, GameEvent};

pub use crate::engine::{
    start_game, GameOptions, GameSnapshot, ItemView, PlayerView, Script, ShotResult, TurnEngine,
};
