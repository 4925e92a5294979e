//! Errors used throughout the chess engine.
//!
//! Board mutation and move generation are infallible by contract: they
//! trust the caller to pass moves drawn from the current legal-move list.
//! `ChessError` covers the boundary where outside input enters the engine
//! (FEN text, coordinate notation, move requests) and the match harness.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN string failed to parse or describes an unusable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in coordinate notation failed to parse.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A requested move is not in the current legal-move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The position does not contain exactly one king for this color.
    #[error("position must contain exactly one {0:?} king")]
    MissingKing(Color),

    /// No legal moves are available for the side to move.
    #[error("no legal moves available")]
    NoLegalMoves,
}

pub type ChessResult<T> = Result<T, ChessError>;
