//! Shells and the per-round shell sequence.
//!
//! A round lasts exactly as long as its shell sequence: every shot
//! consumes one shell, and the shot that empties the sequence ends the
//! round.

pub mod sequence;

pub use sequence::{Shell, ShellSequence};
