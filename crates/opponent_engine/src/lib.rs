//! # Opponent Engine
//!
//! Move search for the automated chess opponent. Chess rules come from
//! `shakmaty`; this crate decides which legal move to play.
//!
//! ## Architecture
//!
//! ```text
//! Engine::select_move
//!   ├── OpeningBook (first few moves)
//!   └── iterative_deepening
//!         └── alphabeta ── order_moves, TranspositionTable
//!               └── quiescence ── Evaluator (cached Scorer)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use opponent_engine::{Difficulty, Engine, Game};
//!
//! let mut engine = Engine::default();
//! let mut game = Game::new();
//! let outcome = engine.select_move(&mut game, Difficulty::Medium)?;
//! game.push(&outcome.best_move);
//! # Ok::<(), opponent_engine::EngineError>(())
//! ```
//!
//! Scores inside the search are from the side to move's perspective. The
//! evaluator itself scores from White's perspective.

pub mod board;
pub mod book;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod search;

pub use board::{to_uci, Game};
pub use book::OpeningBook;
pub use config::{EngineConfig, EvaluatorConfig};
pub use difficulty::{Difficulty, SearchLimits};
pub use engine::{Engine, MoveSource, SearchOutcome};
pub use error::{EngineError, EngineResult};
pub use evaluation::{Evaluator, MaterialScorer, Scorer};
pub use search::SearchStats;

pub use shakmaty;
