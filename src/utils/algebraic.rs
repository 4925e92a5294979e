//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `(row, col)` squares. Row 0 is rank 8, so rank = 8 - row.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert coordinate notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid file '{}' in {square}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid rank '{}' in {square}",
            rank as char
        )));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok((row, col))
}

/// Convert an on-board square to coordinate notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.1 as u8);
    let rank_char = char::from(b'8' - square.0 as u8);
    format!("{file_char}{rank_char}")
}
