use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::generate_rook_moves;

/// Union of the rook and bishop rays.
pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_rook_moves(game_state, from, out);
    generate_bishop_moves(game_state, from, out);
}
