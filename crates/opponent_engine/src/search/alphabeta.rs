//! Alpha-beta search with negamax
//!
//! One recursive function serves both sides: scores are always from the
//! point of view of the side to move at the node, and each ply negates the
//! child's score and swaps the window.
//!
//! `ply` counts plies from the root of the current search. Mates are scored
//! by their distance from the root, so the shortest mate wins ties.

use super::make_unmake::make_move;
use super::ordering::order_moves;
use super::tt::{Bound, Probe};
use super::Searcher;
use crate::board::Game;
use crate::constants::INFINITY;
use shakmaty::Move;

/// Result of searching one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeResult {
    /// Score for the side to move
    pub score: i32,
    /// Best move found, `None` at leaves
    pub best_move: Option<Move>,
}

impl Searcher<'_> {
    /// Negamax alpha-beta to `depth` plies, then quiescence
    pub(crate) fn alphabeta(
        &mut self,
        game: &mut Game,
        depth: u32,
        ply: u32,
        alpha: i32,
        beta: i32,
    ) -> NodeResult {
        self.stats.nodes += 1;
        let alpha_orig = alpha;

        // Transposition table probe
        let (mut alpha, beta) = match self.tt.probe(game.id(), depth, ply, alpha, beta) {
            Probe::Hit { score, best_move } => {
                self.stats.tt_hits += 1;
                return NodeResult { score, best_move };
            }
            Probe::Window { alpha, beta } => (alpha, beta),
        };

        // Base case: depth 0 or game over - do quiescence search
        if depth == 0 || game.is_terminal() {
            return NodeResult {
                score: self.quiescence(game, ply, alpha, beta),
                best_move: None,
            };
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;

        for scored in order_moves(game) {
            let score = {
                let mut child = make_move(game, &scored.mv);
                -self.alphabeta(&mut child, depth - 1, ply + 1, -beta, -alpha).score
            };

            if score > best_score {
                best_score = score;
                best_move = Some(scored.mv);
            }
            alpha = alpha.max(score);

            // Beta cutoff
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let bound = if best_score <= alpha_orig {
            Bound::UpperBound
        } else if best_score >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        self.tt.store(game.id(), best_score, best_move, depth, ply, bound);

        NodeResult {
            score: best_score,
            best_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::to_uci;
    use crate::constants::{mate_in, mated_in};
    use crate::evaluation::Evaluator;
    use crate::search::tt::TranspositionTable;

    /// Full-width negamax with the same leaves, no pruning and no table
    fn minimax(searcher: &mut Searcher<'_>, game: &mut Game, depth: u32, ply: u32) -> i32 {
        if depth == 0 || game.is_terminal() {
            return searcher.quiescence(game, ply, -INFINITY, INFINITY);
        }
        let mut best = -INFINITY;
        for mv in game.legal_moves() {
            let mut child = make_move(game, &mv);
            best = best.max(-minimax(searcher, &mut child, depth - 1, ply + 1));
        }
        best
    }

    #[test]
    fn test_pruning_does_not_change_value() {
        //! Alpha-beta (table disabled) agrees with full-width minimax
        for (fen, depth) in [
            ("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4", 2),
            ("r2q1rk1/pp2bppp/2n1pn2/3p4/3P4/2NBPN2/PP3PPP/R2Q1RK1 b - - 3 11", 2),
            ("8/8/3k4/3p4/2P5/3K4/8/8 w - - 0 40", 3),
            ("7k/5Ppp/7P/n1p5/8/8/1B6/R5K1 w - - 0 1", 2),
        ] {
            let mut game = Game::from_fen(fen).unwrap();

            let mut evaluator = Evaluator::default();
            let mut tt = TranspositionTable::new(0);
            let mut searcher = Searcher::new(&mut evaluator, &mut tt);
            let pruned = searcher.alphabeta(&mut game, depth, 0, -INFINITY, INFINITY);

            let mut evaluator = Evaluator::default();
            let mut tt = TranspositionTable::new(0);
            let mut reference = Searcher::new(&mut evaluator, &mut tt);
            let full = minimax(&mut reference, &mut game, depth, 0);

            assert_eq!(pruned.score, full, "Value mismatch for {fen}");
            assert_eq!(game.fen(), fen, "Position must be restored");
        }
    }

    #[test]
    fn test_finds_mate_in_one() {
        let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let mut evaluator = Evaluator::default();
        let mut tt = TranspositionTable::new(1024);
        let mut searcher = Searcher::new(&mut evaluator, &mut tt);

        let result = searcher.alphabeta(&mut game, 2, 0, -INFINITY, INFINITY);
        assert_eq!(result.score, mate_in(1));
        assert_eq!(result.best_move.as_ref().map(to_uci).as_deref(), Some("a1a8"));
    }

    #[test]
    fn test_immediate_mate_beats_earlier_ordered_capture() {
        //! Rxa5 is ordered first and also wins (mate follows next turn), but
        //! the one-move mates are closer and must be preferred at any depth
        let mates = ["h6g7", "f7f8q", "f7f8r", "b2g7"];
        for depth in 2..=4 {
            let mut game = Game::from_fen("7k/5Ppp/7P/n1p5/8/8/1B6/R5K1 w - - 0 1").unwrap();
            assert_eq!(to_uci(&order_moves(&game)[0].mv), "a1a5");

            let mut evaluator = Evaluator::default();
            let mut tt = TranspositionTable::new(100_000);
            let mut searcher = Searcher::new(&mut evaluator, &mut tt);
            let result = searcher.alphabeta(&mut game, depth, 0, -INFINITY, INFINITY);

            let chosen = to_uci(&result.best_move.unwrap());
            assert!(mates.contains(&chosen.as_str()), "depth {depth} chose {chosen}");
            assert_eq!(result.score, mate_in(1), "depth {depth}");
        }
    }

    #[test]
    fn test_result_is_stored_with_bound() {
        let mut game = Game::new();
        let mut evaluator = Evaluator::default();
        let mut tt = TranspositionTable::new(4096);
        let mut searcher = Searcher::new(&mut evaluator, &mut tt);

        let result = searcher.alphabeta(&mut game, 2, 0, -INFINITY, INFINITY);
        drop(searcher);

        let entry = tt.get(game.id()).expect("root must be stored");
        assert_eq!(entry.depth, 2);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(entry.score, result.score);
        assert_eq!(entry.best_move, result.best_move);
    }

    #[test]
    fn test_table_hit_short_circuits_repeat_search() {
        let mut game = Game::new();
        let mut evaluator = Evaluator::default();
        let mut tt = TranspositionTable::new(4096);
        let mut searcher = Searcher::new(&mut evaluator, &mut tt);

        let first = searcher.alphabeta(&mut game, 2, 0, -INFINITY, INFINITY);
        let nodes_after_first = searcher.stats.nodes;
        let second = searcher.alphabeta(&mut game, 2, 0, -INFINITY, INFINITY);

        assert_eq!(first, second);
        assert_eq!(searcher.stats.nodes, nodes_after_first + 1);
        assert!(searcher.stats.tt_hits >= 1);
    }

    #[test]
    fn test_terminal_node_has_no_move() {
        let mut game =
            Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        let mut evaluator = Evaluator::default();
        let mut tt = TranspositionTable::new(0);
        let mut searcher = Searcher::new(&mut evaluator, &mut tt);
        let result = searcher.alphabeta(&mut game, 3, 0, -INFINITY, INFINITY);
        assert_eq!(result.score, mated_in(0));
        assert!(result.best_move.is_none());
    }
}
