//! Error types for the opponent engine
//!
//! Provides custom error types for move selection, position setup,
//! opening-book construction and configuration validation.

use thiserror::Error;

/// Errors that can occur in the opponent engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Move selection was requested on a finished game
    #[error("Game is already over: {reason}")]
    GameOver { reason: String },

    /// FEN string could not be turned into a legal position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Move is malformed or not legal in the current position
    #[error("Illegal move: {uci}")]
    IllegalMove { uci: String },

    /// Opening book entry does not parse
    #[error("Invalid opening book entry for '{board}': {reason}")]
    InvalidBookEntry { board: String, reason: String },

    /// Engine configuration out of range
    #[error("Invalid engine configuration: {message}")]
    Config { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
