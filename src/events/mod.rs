//! Events emitted by the engine.
//!
//! The engine never talks to a display. Every operation instead publishes
//! structured `GameEvent`s once it has committed:
//!
//! - `ItemUsed`, `ShotFired`, `TurnPassed` during normal play
//! - `PlayerEliminated`, `RoundStarted`, `GameWon` at the milestones
//!
//! Listeners subscribe through `EventBus`; the same events are also kept
//! in a log for callers that prefer polling.

pub mod bus;
pub mod event;

pub use bus::{EventBus, EventListener};
pub use event::GameEvent;
