//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying
//! the most forcing moves first (captures, checks, promotions).

use crate::board::Game;
use crate::constants::{piece_value, CHECK_ORDER_SCORE, PROMOTION_ORDER_SCORE};
use shakmaty::Move;

/// A legal move with its ordering score and tactical flags
#[derive(Debug, Clone)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
    pub is_capture: bool,
    pub gives_check: bool,
}

impl ScoredMove {
    /// Captures and checks, the only moves quiescence looks at
    #[inline]
    pub fn is_forcing(&self) -> bool {
        self.is_capture || self.gives_check
    }
}

/// Score a single move
fn score_move(game: &Game, mv: &Move) -> ScoredMove {
    let gives_check = game.gives_check(mv);

    let (is_capture, score) = match mv.capture() {
        // MVV-LVA: Most Valuable Victim - Least Valuable Attacker
        Some(victim) => (true, 10 * piece_value(victim) - piece_value(mv.role())),
        None if gives_check => (false, CHECK_ORDER_SCORE),
        None if mv.is_promotion() => (false, PROMOTION_ORDER_SCORE),
        None => (false, 0),
    };

    ScoredMove {
        mv: *mv,
        score,
        is_capture,
        gives_check,
    }
}

/// Order legal moves for better alpha-beta pruning
///
/// Highest score first; moves with equal scores keep generation order.
pub fn order_moves(game: &Game) -> Vec<ScoredMove> {
    let mut moves: Vec<ScoredMove> = game
        .legal_moves()
        .iter()
        .map(|mv| score_move(game, mv))
        .collect();

    // Stable sort by score (descending)
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}
