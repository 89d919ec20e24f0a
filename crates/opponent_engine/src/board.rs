//! Position handle used by the search
//!
//! `Game` wraps a `shakmaty::Chess` position (which owns the chess rules)
//! and adds what the search needs on top: push/undo with an explicit undo
//! stack, a cached position identity, a repetition history and terminal
//! queries.
//!
//! # Coordinate System
//!
//! Squares follow shakmaty: a1 = 0, h1 = 7, a8 = 56, h8 = 63. Moves are
//! exchanged with callers in UCI notation (`e2e4`, `e7e8q`).

use crate::constants::{HALFMOVE_LIMIT, REPETITION_LIMIT};
use crate::error::{EngineError, EngineResult};
use crate::hash::PositionId;
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position};

/// Snapshot needed to restore the previous position
#[derive(Debug, Clone)]
struct Undo {
    position: Chess,
    id: PositionId,
}

/// Mutable game position with push/undo
#[derive(Debug, Clone)]
pub struct Game {
    position: Chess,
    id: PositionId,
    undo: Vec<Undo>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl Game {
    /// Standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Chess) -> Self {
        let id = PositionId::of(&position);
        Self {
            position,
            id,
            undo: Vec::new(),
        }
    }

    /// Parse a FEN string into a game
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let parsed: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
            EngineError::InvalidFen {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| EngineError::InvalidFen {
                    fen: fen.to_string(),
                    reason: e.to_string(),
                })?;
        Ok(Self::from_position(position))
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Board layout only (first FEN field), used as the opening book key
    pub fn board_key(&self) -> String {
        self.position.board().to_string()
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn id(&self) -> PositionId {
        self.id
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// +1 when White is to move, -1 when Black is to move
    #[inline]
    pub fn side_sign(&self) -> i32 {
        match self.position.turn() {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn fullmove_number(&self) -> u32 {
        self.position.fullmoves().get()
    }

    /// Number of moves pushed and not yet undone
    pub fn ply(&self) -> usize {
        self.undo.len()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        self.position.is_legal(*mv)
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    /// Whether playing `mv` puts the opponent in check
    pub fn gives_check(&self, mv: &Move) -> bool {
        let mut next = self.position.clone();
        next.play_unchecked(*mv);
        next.is_check()
    }

    /// How many times the current position occurred along the pushed line,
    /// including the current occurrence
    pub fn repetitions(&self) -> usize {
        1 + self.undo.iter().filter(|u| u.id == self.id).count()
    }

    /// Reason the game is over, if it is
    pub fn game_over_reason(&self) -> Option<&'static str> {
        if self.position.is_checkmate() {
            Some("checkmate")
        } else if self.position.is_stalemate() {
            Some("stalemate")
        } else if self.position.is_insufficient_material() {
            Some("insufficient material")
        } else if self.position.halfmoves() >= HALFMOVE_LIMIT {
            Some("seventy-five move rule")
        } else if self.repetitions() >= REPETITION_LIMIT {
            Some("fivefold repetition")
        } else {
            None
        }
    }

    /// Checkmate, stalemate or draw
    pub fn is_terminal(&self) -> bool {
        self.game_over_reason().is_some()
    }

    /// Apply a legal move, remembering how to undo it
    pub fn push(&mut self, mv: &Move) {
        debug_assert!(
            self.position.is_legal(*mv),
            "illegal move {} pushed in {}",
            mv.to_uci(CastlingMode::Standard),
            self.fen()
        );
        self.undo.push(Undo {
            position: self.position.clone(),
            id: self.id,
        });
        self.position.play_unchecked(*mv);
        self.id = PositionId::of(&self.position);
    }

    /// Restore the position before the last push; false if nothing to undo
    pub fn pop(&mut self) -> bool {
        match self.undo.pop() {
            Some(Undo { position, id }) => {
                self.position = position;
                self.id = id;
                true
            }
            None => false,
        }
    }

    /// Parse a UCI move and check it is legal here
    pub fn parse_uci(&self, uci: &str) -> EngineResult<Move> {
        let illegal = || EngineError::IllegalMove {
            uci: uci.to_string(),
        };
        let parsed: UciMove = uci.parse().map_err(|_| illegal())?;
        let mv = parsed.to_move(&self.position).map_err(|_| illegal())?;
        if self.is_legal(&mv) {
            Ok(mv)
        } else {
            Err(illegal())
        }
    }

    /// Parse and play a UCI move
    pub fn push_uci(&mut self, uci: &str) -> EngineResult<Move> {
        let mv = self.parse_uci(uci)?;
        self.push(&mv);
        Ok(mv)
    }
}

/// UCI text of a move
pub fn to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_restores_position() {
        let mut game = Game::new();
        let fen = game.fen();
        let id = game.id();

        game.push_uci("e2e4").unwrap();
        game.push_uci("e7e5").unwrap();
        assert_ne!(game.id(), id);
        assert_eq!(game.ply(), 2);

        assert!(game.pop());
        assert!(game.pop());
        assert!(!game.pop(), "Nothing left to undo");
        assert_eq!(game.fen(), fen);
        assert_eq!(game.id(), id);
    }

    #[test]
    fn test_board_key_ignores_counters() {
        let game = Game::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
        assert_eq!(game.board_key(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn test_invalid_fen_is_reported() {
        let err = Game::from_fen("not a fen").unwrap_err();
        assert!(matches!(err, EngineError::InvalidFen { .. }));
    }

    #[test]
    fn test_illegal_uci_is_rejected() {
        let game = Game::new();
        assert!(matches!(
            game.parse_uci("e2e5"),
            Err(EngineError::IllegalMove { .. })
        ));
        assert!(matches!(
            game.parse_uci("zz"),
            Err(EngineError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_terminal_states() {
        //! Fool's mate, a stalemate and a bare-kings draw
        let mated =
            Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(mated.is_checkmate());
        assert_eq!(mated.game_over_reason(), Some("checkmate"));

        let stalemate = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stalemate.game_over_reason(), Some("stalemate"));

        let bare = Game::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        assert_eq!(bare.game_over_reason(), Some("insufficient material"));

        assert!(!Game::new().is_terminal());
    }

    #[test]
    fn test_fivefold_repetition_is_terminal() {
        let mut game = Game::new();
        for _ in 0..4 {
            for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                game.push_uci(uci).unwrap();
            }
        }
        assert_eq!(game.repetitions(), 5);
        assert_eq!(game.game_over_reason(), Some("fivefold repetition"));
    }

    #[test]
    fn test_gives_check() {
        let game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let mate = game.parse_uci("a1a8").unwrap();
        let quiet = game.parse_uci("a1a2").unwrap();
        assert!(game.gives_check(&mate));
        assert!(!game.gives_check(&quiet));
    }
}
