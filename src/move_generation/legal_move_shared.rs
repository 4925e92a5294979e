//! Occupancy-aware helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// One move per offset that stays on the board and does not land on an allied piece.
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let ally = game_state.side_to_move();
    let board = game_state.board();

    for &(d_row, d_col) in offsets {
        let Some(to) = offset_square(from, d_row, d_col) else {
            continue;
        };
        if !board.is_color(to, ally) {
            out.extend(Move::new(from, to, board));
        }
    }
}

/// Slide along each direction until the edge, an allied piece (excluded)
/// or an enemy piece (included as a capture).
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let ally = game_state.side_to_move();
    let board = game_state.board();

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, d_row, d_col) {
            match board.view(to) {
                None => out.extend(Move::new(from, to, board)),
                Some(piece) => {
                    if piece.color != ally {
                        out.extend(Move::new(from, to, board));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
