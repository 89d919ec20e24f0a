//! Engine configuration
//!
//! All knobs have defaults matching the shipped opponent, so `EngineConfig::default()`
//! is what the game uses. The CLI can override them from a JSON file.

use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Maximum number of cached evaluations before a wholesale clear
    pub cache_capacity: usize,
    /// Material difference (centipawns) above which the aggression bonus applies
    pub aggression_threshold: i32,
    /// Fraction of the material difference added as bonus
    pub aggression_factor: f32,
    /// Add the middlegame attack bonus to quiescence stand-pat scores
    pub attack_bonus: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_EVAL_CACHE_CAPACITY,
            aggression_threshold: AGGRESSION_THRESHOLD,
            aggression_factor: AGGRESSION_FACTOR,
            attack_bonus: false,
        }
    }
}

/// Top-level engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub evaluator: EvaluatorConfig,
    /// Transposition table capacity; 0 disables the table
    pub tt_capacity: usize,
    /// Consult the opening book at all
    pub use_book: bool,
    /// Full-move number from which the book is retired
    pub book_move_limit: u32,
    /// Seed for book move choice; `None` seeds from the OS
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorConfig::default(),
            tt_capacity: DEFAULT_TT_CAPACITY,
            use_book: true,
            book_move_limit: BOOK_MOVE_LIMIT,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Reject settings that would make the evaluator misbehave
    pub fn validate(&self) -> EngineResult<()> {
        let eval = &self.evaluator;
        if eval.aggression_threshold < 0 {
            return Err(EngineError::Config {
                message: format!(
                    "aggression_threshold must be non-negative, got {}",
                    eval.aggression_threshold
                ),
            });
        }
        if !eval.aggression_factor.is_finite() || !(0.0..=1.0).contains(&eval.aggression_factor)
        {
            return Err(EngineError::Config {
                message: format!(
                    "aggression_factor must be within 0.0..=1.0, got {}",
                    eval.aggression_factor
                ),
            });
        }
        if eval.cache_capacity == 0 {
            return Err(EngineError::Config {
                message: "evaluator cache_capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
