//! Iterative deepening search
//!
//! Implements iterative deepening to enable time management and progressive
//! search depth increases. Each depth is searched to completion; the budget
//! is checked only between depths.

use super::{SearchStats, Searcher, TranspositionTable};
use crate::board::{to_uci, Game};
use crate::constants::INFINITY;
use crate::difficulty::SearchLimits;
use crate::evaluation::Evaluator;
use instant::Instant;
use shakmaty::Move;
use std::time::Duration;

/// Outcome of an iterative-deepening run
#[derive(Debug, Clone)]
pub struct DeepeningResult {
    /// Best move of the deepest completed iteration
    pub best_move: Option<Move>,
    /// Score of that move for the side to move
    pub score: i32,
    /// Deepest completed iteration
    pub depth: u32,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// Search depth 1, 2, ... until the budget is spent or `max_depth` is done
///
/// At least one iteration always runs, whatever the limits.
pub fn iterative_deepening(
    evaluator: &mut Evaluator,
    tt: &mut TranspositionTable,
    game: &mut Game,
    limits: SearchLimits,
) -> DeepeningResult {
    let start_time = Instant::now();
    let cache_hits_before = evaluator.cache_hits();
    let max_depth = limits.max_depth.max(1);

    let mut searcher = Searcher::new(evaluator, tt);
    let mut best_move = None;
    let mut best_score = 0;
    let mut depth_reached = 0;

    for depth in 1..=max_depth {
        let result = searcher.alphabeta(game, depth, 0, -INFINITY, INFINITY);
        if result.best_move.is_some() {
            best_move = result.best_move;
            best_score = result.score;
        }
        depth_reached = depth;

        tracing::debug!(
            "[SEARCH] Depth {} complete: {} score {} ({} nodes, {} qnodes, {:.3}s)",
            depth,
            best_move.as_ref().map(to_uci).unwrap_or_else(|| "-".to_string()),
            best_score,
            searcher.stats.nodes,
            searcher.stats.qnodes,
            start_time.elapsed().as_secs_f32()
        );

        // Check time
        if start_time.elapsed() > limits.time_budget {
            break;
        }
    }

    let mut stats = searcher.stats;
    stats.eval_cache_hits = evaluator.cache_hits() - cache_hits_before;

    DeepeningResult {
        best_move,
        score: best_score,
        depth: depth_reached,
        elapsed: start_time.elapsed(),
        stats,
    }
}
