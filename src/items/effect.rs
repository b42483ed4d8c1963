//! Item effects and their results.
//!
//! Effects are data, not callbacks: `ItemEffect::apply` reads the shell
//! sequence and mutates only the player using the item, then reports what
//! happened as an `EffectResult` for the presentation layer to render.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Result};
use crate::shells::{Shell, ShellSequence};

/// What an item does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Reveal the next shell without firing it.
    RevealNext,
    /// Restore life to the user.
    Heal(i32),
    /// The user shoots again before the turn passes.
    ExtraTurn,
    /// No mechanical effect.
    Inert,
}

/// Outcome of an item effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectResult {
    Revealed(Shell),
    Healed { amount: i32, life: i32 },
    GrantedExtraTurn,
    NoOp,
}

impl EffectResult {
    /// Flavour text for the result.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            EffectResult::Revealed(shell) => format!("Shell is: {shell}"),
            EffectResult::Healed { amount, .. } => format!("Medkit used: +{amount} Life"),
            EffectResult::GrantedExtraTurn => "Adrenaline: Extra turn!".to_string(),
            EffectResult::NoOp => "Nothing happens".to_string(),
        }
    }
}

impl std::fmt::Display for EffectResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// State an effect may touch.
pub struct EffectContext<'a> {
    pub shells: &'a ShellSequence,
    pub user: &'a mut Player,
}

impl ItemEffect {
    /// Apply the effect.
    ///
    /// Fails with `EmptySequence` when revealing from an empty sequence,
    /// in which case nothing has changed.
    pub fn apply(&self, ctx: EffectContext<'_>) -> Result<EffectResult> {
        match *self {
            ItemEffect::RevealNext => Ok(EffectResult::Revealed(ctx.shells.peek_next()?)),
            ItemEffect::Heal(amount) => Ok(EffectResult::Healed {
                amount,
                life: ctx.user.heal(amount),
            }),
            ItemEffect::ExtraTurn => {
                ctx.user.grant_extra_turn();
                Ok(EffectResult::GrantedExtraTurn)
            }
            ItemEffect::Inert => Ok(EffectResult::NoOp),
        }
    }
}
