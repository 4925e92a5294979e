//! King steps and castling.
//!
//! Castling is generated separately from the plain steps because it needs
//! attack detection, which itself runs the plain generators.

use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, KING_START_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, &KING_OFFSETS, out);
}

/// Append the castle moves available to the side to move.
///
/// Requires the right for that wing, the king on its original square and
/// not in check, an allied rook on the corner, empty squares between them,
/// and the two squares the king crosses or lands on not attacked.
pub fn generate_castle_moves(game_state: &mut GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let king = game_state.king_location(side);
    if king != (side.back_row(), KING_START_COL) {
        return;
    }
    if game_state.square_under_attack(king) {
        return;
    }

    let rights = game_state.castling_rights();
    if rights.king_side(side) {
        generate_king_side_castle(game_state, king, out);
    }
    if rights.queen_side(side) {
        generate_queen_side_castle(game_state, king, out);
    }
}

fn generate_king_side_castle(game_state: &mut GameState, king: Square, out: &mut Vec<Move>) {
    let (row, col) = king;
    let board = game_state.board();
    if !(board.is_empty((row, col + 1)) && board.is_empty((row, col + 2))) {
        return;
    }
    if !has_allied_rook(game_state, (row, KING_SIDE_ROOK_COL)) {
        return;
    }
    if game_state.square_under_attack((row, col + 1))
        || game_state.square_under_attack((row, col + 2))
    {
        return;
    }
    out.extend(Move::castle(king, (row, col + 2), game_state.board()));
}

fn generate_queen_side_castle(game_state: &mut GameState, king: Square, out: &mut Vec<Move>) {
    let (row, col) = king;
    let board = game_state.board();
    if !(board.is_empty((row, col - 1))
        && board.is_empty((row, col - 2))
        && board.is_empty((row, col - 3)))
    {
        return;
    }
    if !has_allied_rook(game_state, (row, QUEEN_SIDE_ROOK_COL)) {
        return;
    }
    if game_state.square_under_attack((row, col - 1))
        || game_state.square_under_attack((row, col - 2))
    {
        return;
    }
    out.extend(Move::castle(king, (row, col - 2), game_state.board()));
}

fn has_allied_rook(game_state: &GameState, square: Square) -> bool {
    game_state.board().view(square) == Some(Piece::new(game_state.side_to_move(), PieceKind::Rook))
}
