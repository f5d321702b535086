//! `phaseten`: plays a seeded self-play game and writes its trace.

use anyhow::Context;
use clap::Parser;
use phaseten_autoplay::{run_simulator, write_json, write_text, AutoplayConfig, Simulator};
use phaseten_core::{Game, GameConfig};
use phaseten_data::{load_game_config, load_snapshot, save_snapshot};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phaseten")]
#[command(about = "Seeded Phase Ten self-play")]
struct Args {
    /// Number of seats
    #[arg(long, default_value = "3")]
    players: usize,

    /// Game seed; a fixed default keeps runs reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many actions
    #[arg(long, default_value = "5000")]
    max_steps: u32,

    /// JSON game config; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Continue from a saved snapshot instead of dealing a new game
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Write the step trace as JSON
    #[arg(long)]
    trace_json: Option<PathBuf>,

    /// Write the step trace as a text report
    #[arg(long)]
    trace_text: Option<PathBuf>,

    /// Save the final game state
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let game_config = match args.config.as_deref() {
        Some(path) => load_game_config(path)?,
        None => GameConfig::default(),
    };

    let mut autoplay = AutoplayConfig {
        players: args.players,
        max_steps: args.max_steps,
        ..AutoplayConfig::default()
    };
    if let Some(seed) = args.seed {
        autoplay.seed = seed;
    }

    let mut sim = match args.resume.as_deref() {
        Some(path) => {
            let saved = load_snapshot(path)?;
            let seed = args.seed.or(saved.seed).unwrap_or(autoplay.seed);
            autoplay.seed = seed;
            info!(path = %path.display(), seed, "resuming saved game");
            Simulator::from_game(Game::restore(game_config, &saved.snapshot, seed))
        }
        None => {
            info!(seed = autoplay.seed, players = autoplay.players, "starting new game");
            Simulator::new(game_config, &autoplay).context("set up game")?
        }
    };

    let result = run_simulator(&mut sim, &autoplay).context("autoplay")?;

    if let Some(path) = args.trace_json.as_deref() {
        write_json(path, &result).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote json trace");
    }
    if let Some(path) = args.trace_text.as_deref() {
        write_text(path, &result).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote text trace");
    }

    if let Some(path) = args.snapshot.as_deref() {
        save_snapshot(path, &sim.game.snapshot(), Some(sim.game.seed()))?;
    }

    println!("status: {:?}", result.status);
    println!("rounds: {}  steps: {}", result.summary.rounds, result.summary.steps);
    for player in &result.players {
        let marker = if result.winner == Some(player.seat) { " *" } else { "" };
        println!(
            "  {:<8} phase {:>2}  score {:>4}{marker}",
            player.name, player.phase, player.score
        );
    }
    Ok(())
}
