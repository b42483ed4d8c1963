//! The game engine.
//!
//! `TurnEngine` owns the whole session: players, the current shell
//! sequence, the round counter and whose turn it is. Presentation code
//! holds the engine, calls `use_item` and `shoot`, and renders the
//! returned results and published events.

pub mod options;
pub mod result;
pub mod snapshot;
pub mod turn;

pub use options::{GameOptions, Script};
pub use result::ShotResult;
pub use snapshot::{GameSnapshot, ItemView, PlayerView};
pub use turn::{start_game, TurnEngine};
