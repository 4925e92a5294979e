//! Coordinate move notation such as `e2e4` or `a7a8q`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Split `e2e4` into its start and end squares.
///
/// A fifth character is accepted only as a queen promotion suffix (`q` or
/// `Q`), since pawns always promote to a queen.
pub fn parse_move_squares(notation: &str) -> ChessResult<(Square, Square)> {
    let notation = notation.trim();
    let invalid = || ChessError::InvalidAlgebraic(notation.to_owned());

    match notation.len() {
        4 => {}
        5 if notation.ends_with(['q', 'Q']) => {}
        _ => return Err(invalid()),
    }

    let start = notation.get(0..2).ok_or_else(invalid)?;
    let end = notation.get(2..4).ok_or_else(invalid)?;
    Ok((algebraic_to_square(start)?, algebraic_to_square(end)?))
}

/// Coordinate notation for `mv`, with a `q` suffix on promotions.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = mv.get_chess_notation();
    if mv.is_promotion() {
        out.push('q');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;

    #[test]
    fn parses_plain_and_promotion_moves() {
        assert_eq!(parse_move_squares("e2e4"), Ok(((6, 4), (4, 4))));
        assert_eq!(parse_move_squares("a7a8q"), Ok(((1, 0), (0, 0))));
        assert_eq!(parse_move_squares(" g1f3 "), Ok(((7, 6), (5, 5))));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!(parse_move_squares("e2").is_err());
        assert!(parse_move_squares("e2e9").is_err());
        assert!(parse_move_squares("a7a8n").is_err());
        assert!(parse_move_squares("é2e4").is_err());
    }

    #[test]
    fn formats_promotions_with_suffix() {
        let board = Board::starting_position();
        let push = Move::new((6, 4), (4, 4), &board).expect("pawn on e2");
        assert_eq!(move_to_long_algebraic(&push), "e2e4");
    }
}
