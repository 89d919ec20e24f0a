//! Move selection driver
//!
//! [`Engine`] owns everything that lives across moves (evaluation cache,
//! transposition table, opening book and its random source) and turns a
//! position plus limits into a move:
//!
//! 1. Refuse positions without legal moves.
//! 2. While the book is armed and the game is young, try a book move.
//! 3. Otherwise run iterative deepening under the time budget.
//! 4. If the search produced no move, fall back to the top-ordered move.

use crate::board::{to_uci, Game};
use crate::book::OpeningBook;
use crate::config::EngineConfig;
use crate::constants::TT_PRESEARCH_CLEAR_RATIO;
use crate::difficulty::{Difficulty, SearchLimits};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{Evaluator, MaterialScorer, Scorer};
use crate::search::{iterative_deepening, order_moves, SearchStats, TranspositionTable};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use shakmaty::Move;
use std::fmt;
use std::time::Duration;

/// Where the chosen move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveSource {
    Book,
    Search,
    /// Search returned nothing; first ordered move
    Fallback,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveSource::Book => "book",
            MoveSource::Search => "search",
            MoveSource::Fallback => "fallback",
        })
    }
}

/// Result of one move selection
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Score for the side to move; 0 for book moves
    pub score: i32,
    /// Deepest completed iteration; 0 for book moves
    pub depth: u32,
    pub source: MoveSource,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn uci(&self) -> String {
        to_uci(&self.best_move)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookState {
    Active,
    Retired,
}

/// Automated opponent
#[derive(Debug)]
pub struct Engine {
    evaluator: Evaluator,
    tt: TranspositionTable,
    book: OpeningBook,
    book_state: BookState,
    rng: StdRng,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::build(Box::new(MaterialScorer), EngineConfig::default())
    }
}

impl Engine {
    /// Engine with the built-in material scorer
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Self::with_scorer(MaterialScorer, config)
    }

    /// Engine evaluating positions with `scorer`
    pub fn with_scorer<S: Scorer + 'static>(scorer: S, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::build(Box::new(scorer), config))
    }

    fn build(scorer: Box<dyn Scorer>, config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let book = if config.use_book {
            OpeningBook::standard()
        } else {
            OpeningBook::empty()
        };
        Self {
            evaluator: Evaluator::new(scorer, config.evaluator.clone()),
            tt: TranspositionTable::new(config.tt_capacity),
            book,
            book_state: BookState::Active,
            rng,
            config,
        }
    }

    /// Replace the opening book and re-arm it
    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = book;
        self.book_state = BookState::Active;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the book may still be consulted this game
    pub fn book_active(&self) -> bool {
        self.config.use_book && self.book_state == BookState::Active
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Forget everything tied to the previous game
    pub fn new_game(&mut self) {
        self.book_state = BookState::Active;
        self.tt.clear();
        self.evaluator.clear_cache();
        tracing::debug!("[ENGINE] New game: book re-armed, caches cleared");
    }

    /// Pick a move for the side to move at the given difficulty
    pub fn select_move(
        &mut self,
        game: &mut Game,
        difficulty: Difficulty,
    ) -> EngineResult<SearchOutcome> {
        self.select_move_with_limits(game, difficulty.limits())
    }

    /// Pick a move for the side to move within explicit limits
    ///
    /// The position is restored before returning.
    pub fn select_move_with_limits(
        &mut self,
        game: &mut Game,
        limits: SearchLimits,
    ) -> EngineResult<SearchOutcome> {
        let start_time = Instant::now();

        if game.legal_moves().is_empty() {
            return Err(EngineError::GameOver {
                reason: game.game_over_reason().unwrap_or("no legal moves").to_string(),
            });
        }

        if let Some(best_move) = self.book_move(game) {
            let outcome = SearchOutcome {
                best_move,
                score: 0,
                depth: 0,
                source: MoveSource::Book,
                elapsed: start_time.elapsed(),
                stats: SearchStats::default(),
            };
            tracing::info!("[ENGINE] Book move {}", outcome.uci());
            return Ok(outcome);
        }

        self.prepare_tables();
        let result = iterative_deepening(&mut self.evaluator, &mut self.tt, game, limits);

        let (best_move, source) = match result.best_move {
            Some(mv) => (mv, MoveSource::Search),
            None => {
                let fallback = order_moves(game)
                    .first()
                    .map(|scored| scored.mv)
                    .ok_or_else(|| EngineError::GameOver {
                        reason: "no legal moves".to_string(),
                    })?;
                tracing::warn!(
                    "[ENGINE] Search returned no move at depth {}, falling back to {}",
                    result.depth,
                    to_uci(&fallback)
                );
                (fallback, MoveSource::Fallback)
            }
        };

        let outcome = SearchOutcome {
            best_move,
            score: result.score,
            depth: result.depth,
            source,
            elapsed: start_time.elapsed(),
            stats: result.stats,
        };

        tracing::info!(
            "[ENGINE] Selected {} (score {}, depth {}, {} nodes) in {:.2}s",
            outcome.uci(),
            outcome.score,
            outcome.depth,
            outcome.stats.nodes + outcome.stats.qnodes,
            outcome.elapsed.as_secs_f32()
        );
        Ok(outcome)
    }

    /// Book move for `game`, retiring the book once the game is past it
    fn book_move(&mut self, game: &Game) -> Option<Move> {
        if !self.book_active() {
            return None;
        }
        if game.fullmove_number() >= self.config.book_move_limit {
            tracing::debug!(
                "[BOOK] Retired at move {} for the rest of the game",
                game.fullmove_number()
            );
            self.book_state = BookState::Retired;
            return None;
        }
        self.book.lookup(game, &mut self.rng)
    }

    /// Clear the transposition table when it is close to full
    fn prepare_tables(&mut self) {
        let threshold = self.tt.capacity() as f64 * TT_PRESEARCH_CLEAR_RATIO;
        if self.tt.len() as f64 > threshold {
            tracing::debug!("[SEARCH] Transposition table {} entries, clearing", self.tt.len());
            self.tt.clear();
        }
    }
}
