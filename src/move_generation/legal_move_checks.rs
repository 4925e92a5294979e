//! Attack and check detection.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_moves;
use crate::moves::pawn_moves::pawn_attacks;

impl GameState {
    /// True when the opponent of the side to move attacks `square`.
    ///
    /// Pawns attack their two forward diagonals regardless of occupancy;
    /// other pieces attack every square they could move to. The side to
    /// move is unchanged when this returns.
    pub fn square_under_attack(&mut self, square: Square) -> bool {
        self.toggle_side_to_move();
        let attacked = self.attacked_by_side_to_move(square);
        self.toggle_side_to_move();
        attacked
    }

    /// True when the king of the side to move is attacked.
    pub fn in_check(&mut self) -> bool {
        let king = self.king_location(self.side_to_move());
        self.square_under_attack(king)
    }

    fn attacked_by_side_to_move(&self, square: Square) -> bool {
        let attacker = self.side_to_move();
        let mut targets = Vec::new();

        for (from, piece) in self.board().pieces() {
            if piece.color != attacker {
                continue;
            }
            if piece.kind == PieceKind::Pawn {
                if pawn_attacks(from, attacker).any(|target| target == square) {
                    return true;
                }
                continue;
            }
            targets.clear();
            generate_moves(piece.kind, from, self, &mut targets);
            if targets.iter().any(|mv| mv.end() == square) {
                return true;
            }
        }

        false
    }
}
