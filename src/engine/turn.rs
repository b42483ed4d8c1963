//! The turn engine: turn order, shot resolution and round transitions.
//!
//! ## Turn Order
//!
//! Turns pass in ascending id order, wrapping, skipping dead players. A
//! pending extra turn keeps the shooter active for exactly one more shot.
//!
//! ## Shot Resolution
//!
//! 1. Fire the next shell at the target; a live shell removes one life.
//! 2. If at most one player is alive, the game is won.
//! 3. If the shell sequence is empty, a new round starts and the turn
//!    stays where it is.
//! 4. Otherwise the turn passes, unless the shooter had an extra turn.
//!
//! ## Atomicity
//!
//! Every operation validates before it mutates, so a rejected call leaves
//! the game exactly as it was. Events are published after the state
//! change has been made.

use tracing::{debug, info, trace};

use super::options::{GameOptions, Script};
use super::result::ShotResult;
use super::snapshot::{GameSnapshot, PlayerView};
use crate::core::{GameConfig, GameError, GameRng, Hand, Player, PlayerId, Result};
use crate::events::{EventBus, EventListener, GameEvent};
use crate::items::{EffectContext, EffectResult, ItemCatalog};
use crate::shells::ShellSequence;

/// Owns one game session.
#[derive(Debug)]
pub struct TurnEngine {
    config: GameConfig,
    catalog: ItemCatalog,
    players: Vec<Player>,
    current: PlayerId,
    round: u32,
    shells: ShellSequence,
    seed: u64,
    shell_rng: GameRng,
    item_rng: GameRng,
    script: Script,
    winner: Option<PlayerId>,
    events: EventBus,
}

impl TurnEngine {
    /// Start a game with the standard item catalog.
    ///
    /// Fails with `InvalidPlayerCount` outside the configured table size,
    /// or `InvalidConfig` if the rules or script cannot be played.
    pub fn start(player_count: usize, options: GameOptions) -> Result<Self> {
        let catalog = ItemCatalog::standard(&options.config);
        Self::start_with_catalog(player_count, options, catalog)
    }

    /// Start a game dealing from a custom catalog.
    pub fn start_with_catalog(
        player_count: usize,
        options: GameOptions,
        catalog: ItemCatalog,
    ) -> Result<Self> {
        let GameOptions { config, seed, script } = options;

        config.validate(catalog.len())?;
        config.check_player_count(player_count)?;
        script.validate(&catalog)?;

        let rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut engine = Self {
            shell_rng: rng.for_context("shells"),
            item_rng: rng.for_context("items"),
            seed: rng.seed(),
            config,
            catalog,
            players: Vec::with_capacity(player_count),
            current: PlayerId::new(0),
            round: 1,
            shells: ShellSequence::default(),
            script,
            winner: None,
            events: EventBus::new(),
        };

        engine.shells = engine.load_shells();
        for id in PlayerId::all(player_count) {
            let hand = engine.deal_hand()?;
            engine
                .players
                .push(Player::new(id, engine.config.starting_life, hand));
        }

        info!(seed = engine.seed, players = player_count, "game started");
        Ok(engine)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Seed the game was started with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn shells_remaining(&self) -> usize {
        self.shells.remaining()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The sole living player, if exactly one remains.
    #[must_use]
    pub fn check_winner(&self) -> Option<&Player> {
        let mut living = self.players.iter().filter(|p| p.is_alive());
        match (living.next(), living.next()) {
            (Some(player), None) => Some(player),
            _ => None,
        }
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Players the current player may shoot: themselves first, then every
    /// other living player in id order. Empty once the game is over.
    #[must_use]
    pub fn legal_targets(&self) -> Vec<PlayerId> {
        if self.is_over() {
            return Vec::new();
        }
        std::iter::once(self.current)
            .chain(
                self.players
                    .iter()
                    .filter(|p| p.is_alive() && p.id() != self.current)
                    .map(Player::id),
            )
            .collect()
    }

    /// Indices of the items `player` may use right now.
    #[must_use]
    pub fn usable_items(&self, player: PlayerId) -> Vec<usize> {
        if self.is_over() || player != self.current {
            return Vec::new();
        }
        self.player(player)
            .map(|p| {
                p.items()
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| !item.is_used())
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// What everyone at the table can see.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.seed,
            round: self.round,
            current_player: self.current,
            shells_remaining: self.shells.remaining(),
            winner: self.winner,
            players: self
                .players
                .iter()
                .map(|p| PlayerView::new(p, &self.catalog))
                .collect(),
        }
    }

    // === Events ===

    /// Register a listener for every future event.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.events.subscribe(listener);
    }

    /// Take the events published since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain_events()
    }

    // === Operations ===

    /// Use an item from the active player's hand.
    ///
    /// Does not advance the turn.
    pub fn use_item(&mut self, player: PlayerId, index: usize) -> Result<EffectResult> {
        if self.is_over() {
            return reject(GameError::GameAlreadyOver);
        }
        if player != self.current {
            return reject(GameError::NotYourTurn {
                player,
                current: self.current,
            });
        }

        let seat = player.index();
        let Some(held) = self.players[seat].usable_item(index).copied() else {
            return reject(GameError::InvalidItem { player, index });
        };
        let Some(definition) = self.catalog.get(held.kind()) else {
            return reject(GameError::InvalidItem { player, index });
        };

        let result = definition.effect.apply(EffectContext {
            shells: &self.shells,
            user: &mut self.players[seat],
        });
        let result = match result {
            Ok(result) => result,
            Err(err) => return reject(err),
        };
        self.players[seat].spend_item(index);

        debug!(%player, item = ?held.kind(), ?result, "item used");
        self.events.publish(GameEvent::ItemUsed {
            player,
            item: held.kind(),
            result,
        });
        Ok(result)
    }

    /// The active player fires the next shell at `target`.
    pub fn shoot(&mut self, target: PlayerId) -> Result<ShotResult> {
        if self.is_over() {
            return reject(GameError::GameAlreadyOver);
        }
        if !self.player(target).is_some_and(Player::is_alive) {
            return reject(GameError::InvalidTarget { target });
        }
        let shell = match self.shells.consume_next() {
            Ok(shell) => shell,
            Err(err) => return reject(err),
        };

        let shooter = self.current;
        let mut events = Vec::new();

        let victim = &mut self.players[target.index()];
        let target_died = shell.is_live() && victim.take_hit();
        let target_life = victim.life();
        events.push(GameEvent::ShotFired {
            shooter,
            target,
            shell,
            target_life,
        });
        trace!(%shooter, %target, %shell, target_life, "shot fired");

        if target_died {
            info!(player = %target, "player eliminated");
            events.push(GameEvent::PlayerEliminated { player: target });
        }

        let mut round_started = None;
        if let Some(winner) = self.check_winner().map(Player::id) {
            self.winner = Some(winner);
            info!(%winner, round = self.round, "game won");
            events.push(GameEvent::GameWon { winner });
        } else if self.shells.is_empty() {
            self.start_next_round(&mut events)?;
            round_started = Some(self.round);
        } else if self.players[shooter.index()].take_extra_turn() {
            trace!(%shooter, "extra turn taken");
        } else {
            self.advance_turn(&mut events);
        }

        self.events.publish_all(events);

        Ok(ShotResult {
            shooter,
            target,
            shell,
            target_life,
            target_died,
            turn_passed: self.current != shooter,
            next_player: self.current,
            round_started,
            winner: self.winner,
        })
    }

    // === Internals ===

    /// Pass the turn to the next living player after the current one.
    fn advance_turn(&mut self, events: &mut Vec<GameEvent>) {
        let count = self.players.len();
        let from = self.current;
        let next = (1..=count)
            .map(|step| (from.index() + step) % count)
            .find(|&seat| self.players[seat].is_alive());

        if let Some(seat) = next {
            self.current = self.players[seat].id();
            if self.current != from {
                events.push(GameEvent::TurnPassed {
                    from,
                    to: self.current,
                });
            }
        }
    }

    /// Reload, redeal every living player and keep the turn where it is.
    fn start_next_round(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        self.round += 1;
        self.shells = self.load_shells();

        for seat in 0..self.players.len() {
            if self.players[seat].is_alive() {
                let hand = self.deal_hand()?;
                self.players[seat].start_round(hand);
            }
        }

        info!(round = self.round, shells = self.shells.remaining(), "round started");
        events.push(GameEvent::RoundStarted { round: self.round });

        // The last shell of the round may have killed the shooter.
        if self.players[self.current.index()].is_dead() {
            self.advance_turn(events);
        }
        Ok(())
    }

    fn load_shells(&mut self) -> ShellSequence {
        match self.script.shells.pop_front() {
            Some(shells) => ShellSequence::from_shells(shells),
            None => ShellSequence::generate(&self.config, &mut self.shell_rng),
        }
    }

    fn deal_hand(&mut self) -> Result<Hand> {
        match self.script.hands.pop_front() {
            Some(kinds) => self.catalog.hand_of(&kinds),
            None => self
                .catalog
                .draw_random(self.config.items_per_round, &mut self.item_rng),
        }
    }
}

fn reject<T>(err: GameError) -> Result<T> {
    debug!(%err, "operation rejected");
    Err(err)
}

/// Start a game with `player_count` players.
///
/// ```
/// use shotgun_roulette::engine::{start_game, GameOptions};
///
/// let game = start_game(3, GameOptions::seeded(42)).unwrap();
/// assert_eq!(game.players().len(), 3);
/// assert_eq!(game.round(), 1);
/// assert_eq!(game.shells_remaining(), 4);
///
/// assert!(start_game(5, GameOptions::seeded(42)).is_err());
/// ```
pub fn start_game(player_count: usize, options: GameOptions) -> Result<TurnEngine> {
    TurnEngine::start(player_count, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;
    use crate::shells::Shell::{Blank, Live};

    fn scripted(players: usize, script: Script) -> TurnEngine {
        TurnEngine::start(players, GameOptions::seeded(1).with_script(script)).unwrap()
    }

    #[test]
    fn test_start_initial_state() {
        let engine = TurnEngine::start(4, GameOptions::seeded(42)).unwrap();
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.current_player(), PlayerId::new(0));
        assert_eq!(engine.shells_remaining(), 4);
        for (seat, player) in engine.players().iter().enumerate() {
            assert_eq!(player.id().index(), seat);
            assert_eq!(player.life(), 3);
            assert_eq!(player.items().len(), 3);
            assert!(player.is_alive());
            assert!(!player.has_pending_extra_turn());
        }
        assert!(!engine.is_over());
    }

    #[test]
    fn test_start_rejects_player_counts() {
        for count in [0, 1, 5] {
            let err = TurnEngine::start(count, GameOptions::seeded(1)).unwrap_err();
            assert!(matches!(err, GameError::InvalidPlayerCount { .. }));
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = TurnEngine::start(3, GameOptions::seeded(99)).unwrap();
        let b = TurnEngine::start(3, GameOptions::seeded(99)).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.shells, b.shells);
    }

    #[test]
    fn test_advance_skips_dead_and_wraps() {
        let mut engine = scripted(3, Script::new().round([Live, Live, Live, Blank, Blank]));
        engine.players[1].take_hit();
        engine.players[1].take_hit();
        engine.players[1].take_hit();

        let result = engine.shoot(PlayerId::new(2)).unwrap();
        assert_eq!(result.next_player, PlayerId::new(2));

        let result = engine.shoot(PlayerId::new(0)).unwrap();
        assert_eq!(result.next_player, PlayerId::new(0));
    }

    #[test]
    fn test_dead_target_rejected() {
        let mut engine = scripted(3, Script::new().round([Live, Blank, Blank, Blank]));
        for _ in 0..3 {
            engine.players[2].take_hit();
        }
        assert_eq!(
            engine.shoot(PlayerId::new(2)),
            Err(GameError::InvalidTarget { target: PlayerId::new(2) })
        );
        assert_eq!(
            engine.shoot(PlayerId::new(9)),
            Err(GameError::InvalidTarget { target: PlayerId::new(9) })
        );
        assert_eq!(engine.shells_remaining(), 4);
    }

    #[test]
    fn test_legal_targets_self_first() {
        let mut engine = scripted(3, Script::new().round([Blank, Blank, Blank, Blank]));
        engine.shoot(PlayerId::new(0)).unwrap();
        assert_eq!(engine.current_player(), PlayerId::new(1));
        assert_eq!(
            engine.legal_targets(),
            vec![PlayerId::new(1), PlayerId::new(0), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_usable_items_only_on_turn() {
        let engine = scripted(
            2,
            Script::new()
                .hand([ItemKind::Medkit, ItemKind::Adrenaline, ItemKind::XRayScanner])
                .hand([ItemKind::Medkit, ItemKind::Adrenaline, ItemKind::XRayScanner]),
        );
        assert_eq!(engine.usable_items(PlayerId::new(0)), vec![0, 1, 2]);
        assert!(engine.usable_items(PlayerId::new(1)).is_empty());
    }

    #[test]
    fn test_self_kill_on_last_shell_moves_turn() {
        let mut engine = scripted(3, Script::new().round([Live]).round([Blank, Blank]));
        engine.players[0].take_hit();
        engine.players[0].take_hit();

        let result = engine.shoot(PlayerId::new(0)).unwrap();
        assert!(result.target_died);
        assert_eq!(result.round_started, Some(2));
        assert_eq!(result.next_player, PlayerId::new(1));
        assert!(result.turn_passed);
        assert!(engine.player(engine.current_player()).unwrap().is_alive());
    }

    #[test]
    fn test_win_on_last_shell_skips_new_round() {
        let mut engine = scripted(2, Script::new().round([Live]));
        engine.players[1].take_hit();
        engine.players[1].take_hit();

        let result = engine.shoot(PlayerId::new(1)).unwrap();
        assert_eq!(result.winner, Some(PlayerId::new(0)));
        assert_eq!(result.round_started, None);
        assert_eq!(engine.round(), 1);
        assert!(engine.legal_targets().is_empty());
    }
}
