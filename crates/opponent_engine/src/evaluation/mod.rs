//! Position evaluation
//!
//! The engine does not own its evaluation model. It is handed a [`Scorer`]
//! (in the shipped game, a network trained offline on the
//! [`features::PositionTensor`] encoding) and wraps it in an [`Evaluator`]
//! that adds checkmate detection, the aggression bonus and a cache.
//!
//! ## Module Organization
//!
//! - `evaluator` - Cached evaluation used by the search
//! - `material` - Material balance, game phase and attack bonus
//! - `position` - Default material/centralisation scorer
//! - `features` - Input encoding for learned scorers

mod evaluator;
pub mod features;
pub mod material;
mod position;

use shakmaty::Chess;

pub use evaluator::Evaluator;
pub use material::{attack_bonus, game_phase, material_difference, GamePhase};
pub use position::MaterialScorer;

/// Static scoring function, positive favoring White
///
/// Implementations are called synchronously from inside the search and
/// must be deterministic for a given position; the evaluator caches results.
pub trait Scorer: Send {
    fn score(&self, position: &Chess) -> f32;
}

impl<F> Scorer for F
where
    F: Fn(&Chess) -> f32 + Send,
{
    fn score(&self, position: &Chess) -> f32 {
        self(position)
    }
}
