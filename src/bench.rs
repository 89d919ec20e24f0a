//! Move-quality benchmark
//!
//! Plays a fixed set of positions with known good answers several times and
//! reports how often the engine finds one, and how long it takes.

use anyhow::Result;
use opponent_engine::{Difficulty, Engine, Game};
use serde::Serialize;

pub struct BenchPosition {
    pub name: &'static str,
    pub fen: &'static str,
    /// Any of these counts as correct
    pub best_moves: &'static [&'static str],
}

pub const BENCH_POSITIONS: &[BenchPosition] = &[
    BenchPosition {
        name: "Italian Opening",
        fen: "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1",
        best_moves: &["d2d4"],
    },
    BenchPosition {
        name: "King Endgame",
        fen: "8/8/8/5k2/8/8/4K3/8 b - - 0 1",
        best_moves: &["f5e5", "f5g5", "f5e4"],
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct PositionReport {
    pub name: String,
    pub fen: String,
    /// Fraction of runs that found an accepted move
    pub accuracy: f64,
    pub avg_time_secs: f64,
    /// Move played in each run, UCI
    pub moves: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub difficulty: Difficulty,
    pub runs: u32,
    pub positions: Vec<PositionReport>,
    /// Mean of the per-position accuracies
    pub accuracy: f64,
    /// Mean of the per-position average times
    pub avg_time_secs: f64,
}

/// Run every benchmark position `runs` times on the same engine
pub fn run_suite(engine: &mut Engine, difficulty: Difficulty, runs: u32) -> Result<BenchReport> {
    let runs = runs.max(1);
    let mut positions = Vec::with_capacity(BENCH_POSITIONS.len());

    for position in BENCH_POSITIONS {
        let mut game = Game::from_fen(position.fen)?;
        let mut correct = 0u32;
        let mut total_time = 0.0f64;
        let mut moves = Vec::with_capacity(runs as usize);

        for _ in 0..runs {
            let outcome = engine.select_move(&mut game, difficulty)?;
            total_time += outcome.elapsed.as_secs_f64();
            let uci = outcome.uci();
            if position.best_moves.contains(&uci.as_str()) {
                correct += 1;
            }
            moves.push(uci);
        }

        let report = PositionReport {
            name: position.name.to_string(),
            fen: position.fen.to_string(),
            accuracy: f64::from(correct) / f64::from(runs),
            avg_time_secs: total_time / f64::from(runs),
            moves,
        };
        tracing::info!(
            "[BENCH] {}: accuracy {:.2}, avg time {:.2}s",
            report.name,
            report.accuracy,
            report.avg_time_secs
        );
        positions.push(report);
    }

    let count = positions.len().max(1) as f64;
    let accuracy = positions.iter().map(|p| p.accuracy).sum::<f64>() / count;
    let avg_time_secs = positions.iter().map(|p| p.avg_time_secs).sum::<f64>() / count;

    Ok(BenchReport {
        difficulty,
        runs,
        positions,
        accuracy,
        avg_time_secs,
    })
}

/// Human-readable summary
pub fn print_report(report: &BenchReport) {
    println!("Benchmark ({}, {} runs per position)", report.difficulty, report.runs);
    for position in &report.positions {
        println!("Position: {}", position.name);
        println!(
            "  Accuracy: {:.2} | Avg Time: {:.2}s | Moves: {}",
            position.accuracy,
            position.avg_time_secs,
            position.moves.join(" ")
        );
    }
    println!();
    println!("Summary:");
    println!("Overall Accuracy: {:.2}", report.accuracy);
    println!("Average Move Time: {:.2}s", report.avg_time_secs);
}
