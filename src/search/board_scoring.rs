//! Static material evaluation.
//!
//! Scores are from White's point of view: positive favors White.

use crate::game_state::{board::Board, chess_types::*};

/// Score of a side that has been checkmated, seen from the winner.
pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 0,
        PieceKind::Queen => 10,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 3,
        PieceKind::Knight => 3,
        PieceKind::Pawn => 1,
    }
}

/// White material minus Black material.
pub fn score_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}
