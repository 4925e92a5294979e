//! Pawn pushes, captures and en passant.
//!
//! Promotion is not decided here: `Move` flags it from the destination row.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let direction = side.pawn_direction();
    let board = game_state.board();

    if let Some(one_step) = offset_square(from, direction, 0) {
        if board.is_empty(one_step) {
            out.extend(Move::new(from, one_step, board));

            if from.0 == side.pawn_home_row() {
                if let Some(two_step) = offset_square(from, 2 * direction, 0) {
                    if board.is_empty(two_step) {
                        out.extend(Move::new(from, two_step, board));
                    }
                }
            }
        }
    }

    for target in pawn_attacks(from, side) {
        if board.is_color(target, side.opposite()) {
            out.extend(Move::new(from, target, board));
        } else if game_state.en_passant_target() == Some(target) {
            out.extend(Move::en_passant(from, target, board));
        }
    }
}

/// Diagonal squares a pawn of `color` on `from` attacks, whatever stands there.
pub fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let direction = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| offset_square(from, direction, d_col))
}
