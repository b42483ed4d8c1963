//! The shell sequence loaded for a round.
//!
//! Loading draws `shells_loaded` shells, each live iff a uniform draw from
//! `0..10` is even (exactly 50/50), then ejects `shells_ejected` shells at
//! uniformly random positions. Under the default rules that leaves four.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameError, GameRng, Result};

/// One shell: live or blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shell {
    Live,
    Blank,
}

impl Shell {
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Shell::Live)
    }

    /// Draw a single shell with even odds.
    fn roll(rng: &mut GameRng) -> Self {
        if rng.gen_range(0..10) % 2 == 0 {
            Shell::Live
        } else {
            Shell::Blank
        }
    }
}

impl From<bool> for Shell {
    fn from(live: bool) -> Self {
        if live {
            Shell::Live
        } else {
            Shell::Blank
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Live => write!(f, "LIVE"),
            Shell::Blank => write!(f, "BLANK"),
        }
    }
}

/// Ordered queue of shells for the active round.
///
/// Shells leave from the front, one per shot. The only way to learn a
/// shell without firing it is `peek_next`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellSequence {
    shells: Vector<Shell>,
}

impl ShellSequence {
    /// Load a fresh round of shells.
    pub fn generate(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut shells: Vector<Shell> = (0..config.shells_loaded).map(|_| Shell::roll(rng)).collect();

        for _ in 0..config.shells_ejected.min(shells.len()) {
            let position = rng.gen_range_usize(0..shells.len());
            shells.remove(position);
        }

        let sequence = Self { shells };
        debug!(
            remaining = sequence.remaining(),
            live = sequence.live_count(),
            "shell sequence generated"
        );
        sequence
    }

    /// Build a sequence from known shells, front first.
    pub fn from_shells(shells: impl IntoIterator<Item = Shell>) -> Self {
        Self {
            shells: shells.into_iter().collect(),
        }
    }

    /// Look at the next shell without firing it.
    pub fn peek_next(&self) -> Result<Shell> {
        self.shells.front().copied().ok_or(GameError::EmptySequence)
    }

    /// Remove and return the next shell.
    pub fn consume_next(&mut self) -> Result<Shell> {
        self.shells.pop_front().ok_or(GameError::EmptySequence)
    }

    /// Shells left in this round.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.shells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// Live shells left. Not part of what players may see; used for logs
    /// and statistics.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.shells.iter().filter(|s| s.is_live()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_length() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            assert_eq!(ShellSequence::generate(&config, &mut rng).remaining(), 4);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = GameConfig::default();
        let a = ShellSequence::generate(&config, &mut GameRng::new(9));
        let b = ShellSequence::generate(&config, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_live_ratio_converges() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(1234);
        let mut live = 0;
        let mut total = 0;
        for _ in 0..5000 {
            let seq = ShellSequence::generate(&config, &mut rng);
            live += seq.live_count();
            total += seq.remaining();
        }
        let ratio = live as f64 / total as f64;
        assert!((ratio - 0.5).abs() < 0.02, "live ratio {ratio}");
    }

    #[test]
    fn test_peek_does_not_consume() {
        let seq = ShellSequence::from_shells([Shell::Live, Shell::Blank]);
        assert_eq!(seq.peek_next(), Ok(Shell::Live));
        assert_eq!(seq.peek_next(), Ok(Shell::Live));
        assert_eq!(seq.remaining(), 2);
    }

    #[test]
    fn test_consume_in_order() {
        let mut seq = ShellSequence::from_shells([Shell::Live, Shell::Blank, Shell::Blank]);
        assert_eq!(seq.consume_next(), Ok(Shell::Live));
        assert_eq!(seq.remaining(), 2);
        assert_eq!(seq.consume_next(), Ok(Shell::Blank));
        assert_eq!(seq.consume_next(), Ok(Shell::Blank));
        assert!(seq.is_empty());
    }

    #[test]
    fn test_empty_sequence_errors() {
        let mut seq = ShellSequence::default();
        assert_eq!(seq.peek_next(), Err(GameError::EmptySequence));
        assert_eq!(seq.consume_next(), Err(GameError::EmptySequence));
    }

    #[test]
    fn test_shell_from_bool() {
        assert_eq!(Shell::from(true), Shell::Live);
        assert_eq!(Shell::from(false), Shell::Blank);
        assert_eq!(Shell::Live.to_string(), "LIVE");
    }
}
