//! Perft: count leaf nodes of the legal move tree to a fixed depth.
//!
//! Walks the tree with make/undo on a single state, so it doubles as a
//! consistency check for move application and restoration.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Number of leaf nodes at `depth`.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.get_valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        game_state.make_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.undo_move();
    }
    nodes
}

/// Leaf counts broken down by the kind of the last move played.
pub fn perft_counts(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_valid_moves() {
        game_state.make_move(mv);
        if depth == 1 {
            total.merge(leaf_counts(game_state, &mv));
        } else {
            total.merge(perft_counts(game_state, depth - 1));
        }
        game_state.undo_move();
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in game_state.get_valid_moves() {
        game_state.make_move(mv);
        out.push((mv, perft(game_state, depth - 1)));
        game_state.undo_move();
    }
    out
}

fn leaf_counts(game_state: &mut GameState, mv: &Move) -> PerftCounts {
    PerftCounts {
        nodes: 1,
        captures: u64::from(mv.piece_captured().is_some()),
        en_passant: u64::from(mv.is_en_passant()),
        castles: u64::from(mv.is_castle()),
        promotions: u64::from(mv.is_promotion()),
        checks: u64::from(game_state.in_check()),
    }
}
