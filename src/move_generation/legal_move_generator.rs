//! Legal move generation.
//!
//! Pseudo-legal candidates (castling included) are played on the real
//! state, checked for an exposed king and taken back again.

use tracing::trace;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_all_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_castle_moves;
use crate::utils::long_algebraic::parse_move_squares;

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Also refreshes the checkmate and stalemate flags. Board, side to
    /// move, en passant target and castling rights are the same on return
    /// as on entry.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.current_castling_rights;

        let mut candidates = generate_all_moves(self);
        generate_castle_moves(self, &mut candidates);

        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            self.make_move(mv);
            // make_move handed the turn over; look from the mover's side again.
            self.toggle_side_to_move();
            let exposed = self.in_check();
            self.toggle_side_to_move();
            self.undo_move();

            if exposed {
                trace!(mv = %mv, "rejected move leaving king attacked");
            } else {
                legal.push(mv);
            }
        }

        if legal.is_empty() {
            let in_check = self.in_check();
            self.check_mate = in_check;
            self.stale_mate = !in_check;
        } else {
            self.check_mate = false;
            self.stale_mate = false;
        }

        self.en_passant_target = saved_en_passant;
        self.current_castling_rights = saved_rights;
        legal
    }

    /// Look up a legal move by coordinate notation (`e2e4`, `e7e8q`).
    pub fn find_legal_move(&mut self, notation: &str) -> ChessResult<Move> {
        let (start, end) = parse_move_squares(notation)?;
        self.get_valid_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
            .ok_or_else(|| ChessError::IllegalMove(notation.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessError;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut game = GameState::new();
        let before = game.get_fen();
        assert_eq!(game.get_valid_moves().len(), 20);
        assert_eq!(game.get_fen(), before);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let mut game = GameState::from_fen("k3r3/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("fen");
        let moves = game.get_valid_moves();
        assert!(moves.iter().all(|m| m.start() != (6, 4)));
        assert!(!moves.is_empty());
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv = game.find_legal_move(notation).expect("legal");
            game.make_move(mv);
        }
        assert!(game.get_valid_moves().is_empty());
        assert!(game.check_mate());
        assert!(!game.stale_mate());
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen");
        assert!(game.get_valid_moves().is_empty());
        assert!(game.stale_mate());
        assert!(!game.check_mate());
    }

    #[test]
    fn flags_clear_once_moves_exist_again() {
        let mut game = GameState::new();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv = game.find_legal_move(notation).expect("legal");
            game.make_move(mv);
        }
        game.get_valid_moves();
        assert!(game.check_mate());
        game.undo_move();
        assert!(!game.get_valid_moves().is_empty());
        assert!(!game.check_mate());
    }

    #[test]
    fn unknown_moves_are_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.find_legal_move("e2e5"),
            Err(ChessError::IllegalMove("e2e5".to_owned()))
        );
        assert!(matches!(
            game.find_legal_move("zz"),
            Err(ChessError::InvalidAlgebraic(_))
        ));
    }

    #[test]
    fn both_castles_are_legal_on_an_open_back_rank() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        let castles: Vec<_> = game
            .get_valid_moves()
            .into_iter()
            .filter(|m| m.is_castle())
            .collect();
        assert_eq!(castles.len(), 2);
    }
}
