//! Headless roulette runner.
//!
//! Auto-plays a seeded game with a simple bot for every seat and prints
//! the event stream as text.
//!
//! ```text
//! roulette [PLAYERS] [SEED] [--config rules.json]
//! ```

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use shotgun_roulette::{
    EffectResult, GameConfig, GameEvent, GameOptions, GameRng, ItemKind, PlayerId, Shell,
    TurnEngine,
};

/// Stop runaway games (life is uncapped, so Medkits can stall one).
const MAX_SHOTS: usize = 1_000;

fn init_tracing() {
    // RUST_LOG=shotgun_roulette=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}

struct Args {
    players: usize,
    seed: Option<u64>,
    config: GameConfig,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut config = GameConfig::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            config = GameConfig::from_json(&json)?;
        } else {
            positional.push(arg);
        }
    }

    let players = match positional.first() {
        Some(raw) => raw.parse().with_context(|| format!("bad player count {raw:?}"))?,
        None => 2,
    };
    let seed = match positional.get(1) {
        Some(raw) => Some(raw.parse().with_context(|| format!("bad seed {raw:?}"))?),
        None => None,
    };
    if positional.len() > 2 {
        bail!("usage: roulette [PLAYERS] [SEED] [--config rules.json]");
    }

    Ok(Args { players, seed, config })
}

/// Pick a target for the active player, using items first.
fn take_turn(engine: &mut TurnEngine, bot: &mut GameRng) -> Result<PlayerId> {
    let me = engine.current_player();
    let mut known = None;

    for index in engine.usable_items(me) {
        let Some(item) = engine.player(me).and_then(|p| p.items().get(index)).copied() else {
            continue;
        };
        let worth_it = match item.kind() {
            ItemKind::Medkit => engine
                .player(me)
                .is_some_and(|p| p.life() < engine.config().starting_life),
            ItemKind::MirrorShard => false,
            ItemKind::XRayScanner | ItemKind::Adrenaline => true,
        };
        if worth_it {
            if let EffectResult::Revealed(shell) = engine.use_item(me, index)? {
                known = Some(shell);
            }
        }
    }

    let opponents: Vec<PlayerId> = engine
        .legal_targets()
        .into_iter()
        .filter(|&target| target != me)
        .collect();

    let target = match known {
        Some(Shell::Blank) => me,
        _ => opponents[bot.gen_range_usize(0..opponents.len())],
    };
    Ok(target)
}

fn main() -> Result<()> {
    init_tracing();
    let args = parse_args()?;

    let mut options = GameOptions::new().with_config(args.config);
    options.seed = args.seed;

    let mut engine = TurnEngine::start(args.players, options)?;
    let mut bot = GameRng::new(engine.seed()).for_context("bot");

    println!("seed {}", engine.seed());
    engine.subscribe(|event: &GameEvent| println!("  {event}"));

    let mut shots = 0;
    while !engine.is_over() {
        if shots == MAX_SHOTS {
            bail!("no winner after {MAX_SHOTS} shots");
        }
        let shooter = engine.current_player();
        let target = take_turn(&mut engine, &mut bot)?;
        println!("{shooter} shoots {target}");
        engine.shoot(target)?;
        shots += 1;
    }

    let snapshot = engine.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
