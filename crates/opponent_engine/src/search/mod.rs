//! Alpha-beta search with iterative deepening
//!
//! This module implements the core opponent search using:
//! - Negamax variant of alpha-beta pruning
//! - Quiescence search over captures and checks at the horizon
//! - Iterative deepening for time management
//! - Transposition table for caching
//! - Move ordering for better pruning
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `quiescence` - Quiescence search to avoid horizon effect
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Scoped push/undo guard
//! - `tt` - Transposition table
//! - `iterative` - Iterative deepening wrapper

mod alphabeta;
mod iterative;
mod make_unmake;
mod ordering;
mod quiescence;
mod tt;

use crate::evaluation::Evaluator;
use serde::Serialize;

pub use alphabeta::NodeResult;
pub use iterative::{iterative_deepening, DeepeningResult};
pub use ordering::{order_moves, ScoredMove};
pub use tt::{Bound, Probe, TranspositionTable, TtEntry};

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Alpha-beta nodes visited
    pub nodes: u64,
    /// Quiescence nodes visited
    pub qnodes: u64,
    /// Beta cutoffs in both searches
    pub cutoffs: u64,
    /// Transposition table probes that ended the node
    pub tt_hits: u64,
    /// Evaluations answered from the cache
    pub eval_cache_hits: u64,
}

/// Borrowed search state for one move selection
///
/// The caches outlive the searcher; only the counters are per search.
pub(crate) struct Searcher<'a> {
    pub(crate) evaluator: &'a mut Evaluator,
    pub(crate) tt: &'a mut TranspositionTable,
    pub(crate) stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(evaluator: &'a mut Evaluator, tt: &'a mut TranspositionTable) -> Self {
        Self {
            evaluator,
            tt,
            stats: SearchStats::default(),
        }
    }
}
