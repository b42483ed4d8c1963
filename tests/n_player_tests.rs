//! N-player behaviour.
//!
//! These tests verify turn order, elimination and game completion for every
//! supported table size, using seeded random games.

use shotgun_roulette::core::{GameConfig, PlayerId};
use shotgun_roulette::engine::{GameOptions, TurnEngine};
use shotgun_roulette::events::GameEvent;

/// Play until someone wins, always shooting the next living opponent.
fn play_out(game: &mut TurnEngine, max_shots: usize) -> usize {
    let mut shots = 0;
    while !game.is_over() && shots < max_shots {
        let me = game.current_player();
        let target = game
            .legal_targets()
            .into_iter()
            .find(|&t| t != me)
            .expect("a live game has an opponent");
        game.shoot(target).unwrap();
        shots += 1;
    }
    shots
}

/// Every table size starts correctly.
#[test]
fn test_start_all_table_sizes() {
    for player_count in 2..=4 {
        let game = TurnEngine::start(player_count, GameOptions::seeded(42)).unwrap();
        assert_eq!(game.players().len(), player_count);

        for player in PlayerId::all(player_count) {
            let state = game.player(player).unwrap();
            assert_eq!(state.id(), player);
            assert_eq!(state.life(), 3);
            assert_eq!(state.items().len(), 3);
        }
        assert!(game.player(PlayerId::new(player_count as u8)).is_none());
    }
}

/// Without items, every game ends with exactly one survivor.
#[test]
fn test_games_end_with_one_winner() {
    for player_count in 2..=4 {
        for seed in 0..20 {
            let mut game = TurnEngine::start(player_count, GameOptions::seeded(seed)).unwrap();
            play_out(&mut game, 500);

            assert!(game.is_over(), "{player_count} players, seed {seed}");
            let winner = game.winner().unwrap();
            assert_eq!(game.living_count(), 1);
            assert!(game.player(winner).unwrap().is_alive());
            assert_eq!(game.check_winner().map(|p| p.id()), Some(winner));
        }
    }
}

/// Turns go round the table in id order.
#[test]
fn test_turn_order_ascending() {
    let mut game = TurnEngine::start(4, GameOptions::seeded(5)).unwrap();

    let mut order = vec![game.current_player()];
    for _ in 0..3 {
        let me = game.current_player();
        game.shoot(me).unwrap();
        order.push(game.current_player());
        if game.round() > 1 || game.living_count() < 4 {
            break;
        }
    }

    for pair in order.windows(2) {
        if pair[0] != pair[1] {
            assert_eq!(pair[1].index(), (pair[0].index() + 1) % 4);
        }
    }
}

/// Each elimination is reported once and the dead never act again.
#[test]
fn test_eliminations_reported_once() {
    for seed in 0..10 {
        let mut game = TurnEngine::start(4, GameOptions::seeded(seed)).unwrap();
        play_out(&mut game, 500);

        let events = game.drain_events();
        let eliminated: Vec<PlayerId> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::PlayerEliminated { player } => Some(*player),
                _ => None,
            })
            .collect();
        assert_eq!(eliminated.len(), 3);

        for (position, event) in events.iter().enumerate() {
            let GameEvent::PlayerEliminated { player } = event else {
                continue;
            };
            let acts_later = events[position + 1..].iter().any(|later| {
                matches!(later, GameEvent::ShotFired { shooter, .. } if shooter == player)
                    || matches!(later, GameEvent::TurnPassed { to, .. } if to == player)
            });
            assert!(!acts_later, "{player} acted after elimination");
        }

        let wins = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameWon { .. }))
            .count();
        assert_eq!(wins, 1);
    }
}

/// Larger tables work when the rules allow them.
#[test]
fn test_six_player_table() {
    let config = GameConfig {
        max_players: 6,
        ..GameConfig::default()
    };
    let mut game = TurnEngine::start(6, GameOptions::seeded(11).with_config(config)).unwrap();
    play_out(&mut game, 1000);
    assert!(game.is_over());
}
