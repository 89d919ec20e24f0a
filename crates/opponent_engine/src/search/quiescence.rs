//! Quiescence search to avoid horizon effect
//!
//! Past the nominal depth only forcing moves (captures and checks) are
//! searched, so the static score is never taken in the middle of an
//! exchange. Recursion ends when the forcing moves run out; a ply ceiling
//! of `QUIESCENCE_PLY_LIMIT` stops perpetual-check chains. A checkmated
//! side to move scores `mated_in(ply)`.

use super::make_unmake::make_move;
use super::ordering::order_moves;
use super::Searcher;
use crate::board::Game;
use crate::constants::{mated_in, MATE_SCORE, QUIESCENCE_PLY_LIMIT};

impl Searcher<'_> {
    /// Fail-hard quiescence search, score from the side to move's perspective
    pub(crate) fn quiescence(&mut self, game: &mut Game, ply: u32, alpha: i32, beta: i32) -> i32 {
        self.quiescence_at(game, ply, alpha, beta, 0)
    }

    fn quiescence_at(
        &mut self,
        game: &mut Game,
        ply: u32,
        mut alpha: i32,
        beta: i32,
        qply: u32,
    ) -> i32 {
        self.stats.qnodes += 1;

        // Stand-pat evaluation
        let stand_pat = match self.evaluator.stand_pat(game) {
            score if score <= -MATE_SCORE => mated_in(ply),
            score => score,
        };
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        if qply >= QUIESCENCE_PLY_LIMIT {
            return alpha;
        }

        for scored in order_moves(game).into_iter().filter(|m| m.is_forcing()) {
            let score = {
                let mut child = make_move(game, &scored.mv);
                -self.quiescence_at(&mut child, ply + 1, -beta, -alpha, qply + 1)
            };

            if score >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
