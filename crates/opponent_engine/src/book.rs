//! Opening book
//!
//! A small table from board layout (the first FEN field) to candidate moves
//! in UCI notation. Lookups keep only the candidates that are legal in the
//! actual position, so side to move, castling rights and en passant are
//! checked by the rules rather than by the key.

use crate::board::Game;
use crate::error::{EngineError, EngineResult};
use rand::seq::IndexedRandom;
use rand::Rng;
use shakmaty::uci::UciMove;
use shakmaty::{Board, Move};
use std::collections::HashMap;

/// Built-in book: the four most common first moves and three replies to each
/// of 1.c4, 1.d4 and 1.e4
const STANDARD_ENTRIES: &[(&str, &[&str])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        &["e2e4", "d2d4", "c2c4", "g1f3"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR",
        &["d7d5", "e7e5", "g8f6"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR",
        &["d7d5", "g8f6", "e7e6"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
        &["c7c5", "e7e5", "c7c6"],
    ),
];

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<UciMove>>,
}

impl OpeningBook {
    /// The book shipped with the opponent
    pub fn standard() -> Self {
        let entries = STANDARD_ENTRIES
            .iter()
            .map(|(board, moves)| (board.to_string(), parse_all(moves)))
            .collect();
        Self { entries }
    }

    /// Book with no entries; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a book from `(board layout, candidate UCI moves)` pairs
    ///
    /// Board layouts are normalised, so `8/8/...` and equivalent spellings
    /// share an entry. Later pairs for the same layout extend earlier ones.
    pub fn from_entries<I, S, M>(pairs: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (S, M)>,
        S: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        let mut entries: HashMap<String, Vec<UciMove>> = HashMap::new();
        for (board, moves) in pairs {
            let board = board.as_ref();
            let key = Board::from_ascii_board_fen(board.as_bytes())
                .map_err(|e| EngineError::InvalidBookEntry {
                    board: board.to_string(),
                    reason: e.to_string(),
                })?
                .to_string();

            let slot = entries.entry(key).or_default();
            for uci in moves {
                let uci = uci.as_ref();
                let parsed: UciMove = uci.parse().map_err(|_| EngineError::InvalidBookEntry {
                    board: board.to_string(),
                    reason: format!("'{uci}' is not a UCI move"),
                })?;
                slot.push(parsed);
            }
        }
        Ok(Self { entries })
    }

    /// Candidate moves that are legal in `game`, in table order
    pub fn candidates(&self, game: &Game) -> Vec<Move> {
        let Some(moves) = self.entries.get(&game.board_key()) else {
            return Vec::new();
        };
        moves
            .iter()
            .filter_map(|uci| uci.to_move(game.position()).ok())
            .filter(|mv| game.is_legal(mv))
            .collect()
    }

    /// Pick a legal book move uniformly at random, if the position is known
    pub fn lookup<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Move> {
        let candidates = self.candidates(game);
        let choice = candidates.choose(rng).copied();
        if choice.is_none() && self.entries.contains_key(&game.board_key()) {
            tracing::warn!("[BOOK] Entry for {} has no legal candidates", game.board_key());
        }
        choice
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_all(moves: &[&str]) -> Vec<UciMove> {
    moves.iter().filter_map(|uci| uci.parse().ok()).collect()
}
