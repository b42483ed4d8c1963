//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Stable, 0-based seat index assigned once at setup. Displayed 1-based
//! ("Player 1") since that is how seats are presented to people.
//!
//! ## Player
//!
//! Mutable per-seat state: life, the hand of items for the current round,
//! the dead flag and the pending extra turn granted by Adrenaline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::items::{HeldItem, ItemKind};

/// Player identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use shotgun_roulette::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A hand of items. Hands hold three items under the default rules.
pub type Hand = SmallVec<[HeldItem; 4]>;

/// Per-player game state.
///
/// `dead` only ever goes from false to true; nothing in the engine revives
/// a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    life: i32,
    items: Hand,
    dead: bool,
    pending_extra_turn: bool,
}

impl Player {
    /// Create a living player with the given life and hand.
    pub fn new(id: PlayerId, life: i32, items: Hand) -> Self {
        Self {
            id,
            life,
            items,
            dead: false,
            pending_extra_turn: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn life(&self) -> i32 {
        self.life
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    #[must_use]
    pub fn has_pending_extra_turn(&self) -> bool {
        self.pending_extra_turn
    }

    /// Items held this round, used or not.
    #[must_use]
    pub fn items(&self) -> &[HeldItem] {
        &self.items
    }

    /// Get an item that is still usable.
    #[must_use]
    pub fn usable_item(&self, index: usize) -> Option<&HeldItem> {
        self.items.get(index).filter(|item| !item.is_used())
    }

    /// Check whether the player holds an unused item of the given kind.
    #[must_use]
    pub fn holds(&self, kind: ItemKind) -> bool {
        self.items.iter().any(|item| item.kind() == kind && !item.is_used())
    }

    /// Remove one life. Returns true if this hit killed the player.
    ///
    /// A player who dies drops any pending extra turn.
    pub fn take_hit(&mut self) -> bool {
        self.life -= 1;
        if self.life <= 0 && !self.dead {
            self.dead = true;
            self.pending_extra_turn = false;
            return true;
        }
        false
    }

    /// Restore life. Life has no upper bound. Returns the new total.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.life = self.life.saturating_add(amount);
        self.life
    }

    pub fn grant_extra_turn(&mut self) {
        self.pending_extra_turn = true;
    }

    /// Clear the pending extra turn, returning whether one was pending.
    pub fn take_extra_turn(&mut self) -> bool {
        std::mem::take(&mut self.pending_extra_turn)
    }

    /// Mark an item as spent.
    pub(crate) fn spend_item(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.mark_used();
        }
    }

    /// Swap in a fresh hand for a new round, discarding the old one.
    pub(crate) fn start_round(&mut self, items: Hand) {
        self.items = items;
        self.pending_extra_turn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn player(life: i32) -> Player {
        Player::new(
            PlayerId::new(0),
            life,
            smallvec![HeldItem::new(ItemKind::Medkit), HeldItem::new(ItemKind::Adrenaline)],
        )
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(PlayerId::all(4).count(), 4);
    }

    #[test]
    fn test_take_hit_kills_at_zero() {
        let mut p = player(2);
        assert!(!p.take_hit());
        assert!(p.is_alive());
        assert!(p.take_hit());
        assert!(p.is_dead());
        assert_eq!(p.life(), 0);

        // Already dead: further hits never report a second death
        assert!(!p.take_hit());
        assert!(p.is_dead());
    }

    #[test]
    fn test_death_drops_extra_turn() {
        let mut p = player(1);
        p.grant_extra_turn();
        p.take_hit();
        assert!(!p.has_pending_extra_turn());
    }

    #[test]
    fn test_heal_is_uncapped() {
        let mut p = player(3);
        assert_eq!(p.heal(1), 4);
        assert_eq!(p.heal(1), 5);
    }

    #[test]
    fn test_heal_saturates() {
        let mut p = player(3);
        assert_eq!(p.heal(i32::MAX), i32::MAX);
        assert!(p.is_alive());
    }

    #[test]
    fn test_take_extra_turn_clears_flag() {
        let mut p = player(3);
        assert!(!p.take_extra_turn());
        p.grant_extra_turn();
        assert!(p.take_extra_turn());
        assert!(!p.has_pending_extra_turn());
    }

    #[test]
    fn test_spend_item() {
        let mut p = player(3);
        assert!(p.usable_item(0).is_some());
        p.spend_item(0);
        assert!(p.usable_item(0).is_none());
        assert!(!p.holds(ItemKind::Medkit));
        assert!(p.holds(ItemKind::Adrenaline));
        assert!(p.usable_item(7).is_none());
    }

    #[test]
    fn test_start_round_replaces_hand() {
        let mut p = player(3);
        p.spend_item(0);
        p.grant_extra_turn();
        p.start_round(smallvec![HeldItem::new(ItemKind::XRayScanner)]);
        assert_eq!(p.items().len(), 1);
        assert!(p.holds(ItemKind::XRayScanner));
        assert!(!p.has_pending_extra_turn());
    }

    #[test]
    fn test_player_serialization() {
        let p = player(3);
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
