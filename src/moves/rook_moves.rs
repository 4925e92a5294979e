use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, &ROOK_DIRECTIONS, out);
}
