//! # Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: piece valuations
//! (in centipawns), the checkmate sentinel, search window bounds, move ordering scores and the
//! default sizes of the engine-owned caches.
//!
//! ## Centipawn Valuation System
//!
//! Scores are expressed in **centipawns** (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000 (never traded, cancels out in material balance)
//!
//! Bishops are valued slightly above knights, which nudges the engine toward keeping the
//! bishop pair in otherwise equal exchanges.
//!
//! ## Checkmate Sentinel
//!
//! A mated position scores `MATE_SCORE` (99,999) against the mated side. Heuristic scores are
//! clamped to `MAX_HEURISTIC_SCORE`, so a mate always dominates material. The search window uses
//! `INFINITY`, which is strictly larger, so a mate score never collapses the root window.
//!
//! Inside the search a mate found `ply` plies from the root scores `MATE_SCORE - ply`, so a
//! shorter mate always beats a longer one. Anything beyond `MAX_HEURISTIC_SCORE` is a mate.

use shakmaty::Role;

/// Score assigned to a checkmated side (negated for the mated side)
pub const MATE_SCORE: i32 = 99_999;

/// Bound of the root search window
pub const INFINITY: i32 = 100_000;

/// Deepest ply at which a mate is still told apart from a heuristic score
pub const MAX_MATE_PLY: i32 = 1_000;

/// Largest magnitude a non-mate evaluation may take
pub const MAX_HEURISTIC_SCORE: i32 = MATE_SCORE - MAX_MATE_PLY;

/// Score for the side to move when it mates `ply` plies from the root
#[inline]
pub const fn mate_in(ply: u32) -> i32 {
    MATE_SCORE - ply as i32
}

/// Score for the side to move when it is mated `ply` plies from the root
#[inline]
pub const fn mated_in(ply: u32) -> i32 {
    -MATE_SCORE + ply as i32
}

/// Whether a search score encodes a forced mate for either side
#[inline]
pub const fn is_mate_score(score: i32) -> bool {
    score > MAX_HEURISTIC_SCORE || score < -MAX_HEURISTIC_SCORE
}

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

/// All roles in value order, used when summing material
pub const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

/// Centipawn value of a piece role
#[inline]
pub const fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

/// Material difference above which the aggression bonus kicks in
pub const AGGRESSION_THRESHOLD: i32 = 200;

/// Fraction of the material difference added as aggression bonus
pub const AGGRESSION_FACTOR: f32 = 0.1;

/// Middlegame bonus per minor/major piece standing in the enemy half
pub const TERRITORY_BONUS: i32 = 15;

/// Middlegame bonus per checking move available to the side to move
pub const CHECK_BONUS: i32 = 10;

/// Full-move number before which a position counts as the opening
pub const OPENING_PHASE_MOVES: u32 = 10;

/// Ordering score of a non-capturing check
pub const CHECK_ORDER_SCORE: i32 = 500;

/// Ordering score of a quiet promotion
pub const PROMOTION_ORDER_SCORE: i32 = 300;

/// Safety ceiling on consecutive forcing plies inside quiescence
pub const QUIESCENCE_PLY_LIMIT: u32 = 32;

/// Default evaluation cache capacity (entries)
pub const DEFAULT_EVAL_CACHE_CAPACITY: usize = 10_000;

/// Default transposition table capacity (entries)
pub const DEFAULT_TT_CAPACITY: usize = 10_000;

/// The TT is cleared before a search once it is fuller than this fraction
pub const TT_PRESEARCH_CLEAR_RATIO: f64 = 0.9;

/// Full-move number from which the opening book is retired
pub const BOOK_MOVE_LIMIT: u32 = 6;

/// Repetition count that ends the game (fivefold repetition)
pub const REPETITION_LIMIT: usize = 5;

/// Half-move clock value that ends the game (seventy-five move rule)
pub const HALFMOVE_LIMIT: u32 = 150;
