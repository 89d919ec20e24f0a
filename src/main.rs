//! Command-line front end for the chess opponent
//!
//! ```text
//! chess-opponent move --fen "<FEN>" --difficulty hard
//! chess-opponent bench --difficulty medium --runs 5 --json
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see per-depth
//! search progress.

mod bench;
mod worker;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use opponent_engine::{Difficulty, Engine, EngineConfig, Game};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use worker::SearchWorker;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser, Debug)]
#[command(name = "chess-opponent", version, about = "Automated chess opponent")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a move for the side to move
    Move {
        /// Position to move from
        #[arg(long, default_value = START_FEN)]
        fen: String,

        /// easy, medium or hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Engine configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the move-quality benchmark
    Bench {
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Searches per position
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Engine configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Cli::parse().command {
        Command::Move {
            fen,
            difficulty,
            config,
        } => run_move(&fen, difficulty, config.as_deref()),
        Command::Bench {
            difficulty,
            runs,
            json,
            config,
        } => run_bench(difficulty, runs, json, config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn run_move(fen: &str, difficulty: Difficulty, config: Option<&Path>) -> Result<()> {
    let engine = Engine::new(load_config(config)?)?;
    let game = Game::from_fen(fen)?;

    let mut worker = SearchWorker::spawn(engine)?;
    worker.submit(game, difficulty)?;
    tracing::info!(
        "[ENGINE] Thinking ({}, up to {:.1}s)",
        difficulty,
        difficulty.seconds_per_move()
    );

    let reply = loop {
        match worker.recv_timeout(Duration::from_secs(1))? {
            Some(reply) => break reply,
            None => tracing::info!("[ENGINE] Still thinking..."),
        }
    };

    let outcome = reply.result?;
    println!("bestmove {}", outcome.uci());
    println!(
        "info source {} depth {} score {} nodes {} qnodes {} cutoffs {} tthits {} cachehits {} \
         time {}ms",
        outcome.source,
        outcome.depth,
        outcome.score,
        outcome.stats.nodes,
        outcome.stats.qnodes,
        outcome.stats.cutoffs,
        outcome.stats.tt_hits,
        outcome.stats.eval_cache_hits,
        outcome.elapsed.as_millis()
    );
    Ok(())
}

fn run_bench(difficulty: Difficulty, runs: u32, json: bool, config: Option<&Path>) -> Result<()> {
    let mut engine = Engine::new(load_config(config)?)?;
    let report = bench::run_suite(&mut engine, difficulty, runs)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        bench::print_report(&report);
    }
    Ok(())
}
