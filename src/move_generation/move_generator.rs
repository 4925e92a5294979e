//! Pseudo-legal move generation: every move that obeys piece movement and
//! occupancy, ignoring whether the mover's king ends up attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Dispatch to the generator for `kind`, treating the piece on `from` as
/// belonging to the side to move.
pub fn generate_moves(kind: PieceKind, from: Square, game_state: &GameState, out: &mut Vec<Move>) {
    match kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, out),
        PieceKind::King => generate_king_moves(game_state, from, out),
    }
}

/// All pseudo-legal moves for the side to move, castling excluded.
pub fn generate_all_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut out = Vec::with_capacity(48);

    for (square, piece) in game_state.board().pieces() {
        if piece.color == side {
            generate_moves(piece.kind, square, game_state, &mut out);
        }
    }

    out
}
