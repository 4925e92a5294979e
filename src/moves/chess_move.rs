//! Immutable description of a single ply.
//!
//! A `Move` snapshots the moving piece and the captured piece at
//! construction time so `GameState::undo_move` can restore the board
//! exactly, including en passant where the captured pawn does not sit on
//! the destination square.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_promotion: bool,
    is_en_passant: bool,
    is_castle: bool,
    move_id: u16,
}

impl Move {
    /// Regular move or capture read off `board`. Returns `None` if `start` is empty.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.view(start)?;
        Some(Self::build(start, end, piece_moved, board.view(end), false, false))
    }

    /// En passant capture. The captured pawn is the opposing pawn beside `start`.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.view(start)?;
        let captured = Piece::new(piece_moved.color.opposite(), PieceKind::Pawn);
        Some(Self::build(start, end, piece_moved, Some(captured), true, false))
    }

    /// King move of two columns that also relocates the rook.
    pub fn castle(start: Square, end: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.view(start)?;
        Some(Self::build(start, end, piece_moved, board.view(end), false, true))
    }

    fn build(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && end.0 == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant,
            is_castle,
            move_id: encode_move_id(start, end),
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn move_id(&self) -> u16 {
        self.move_id
    }

    /// True for a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && (self.start.0 - self.end.0).abs() == 2
    }

    /// True when the king moved toward the h-file rook.
    #[inline]
    pub fn is_king_side_castle(&self) -> bool {
        self.is_castle && self.end.1 > self.start.1
    }

    /// Coordinate notation of the start square followed by the end square, e.g. `e2e4`.
    pub fn get_chess_notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

/// `start_row*1000 + start_col*100 + end_row*10 + end_col`.
#[inline]
pub const fn encode_move_id(start: Square, end: Square) -> u16 {
    start.0 as u16 * 1000 + start.1 as u16 * 100 + end.0 as u16 * 10 + end.1 as u16
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id == other.move_id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_chess_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_maps_rows_to_ranks() {
        let board = Board::starting_position();
        let mv = Move::new((6, 4), (4, 4), &board).expect("pawn on e2");
        assert_eq!(mv.get_chess_notation(), "e2e4");
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.move_id(), 6444);
        assert!(mv.is_double_pawn_push());
        assert_eq!(mv.piece_captured(), None);
    }

    #[test]
    fn construction_snapshots_captured_piece() {
        let board = Board::starting_position();
        let mv = Move::new((7, 0), (0, 0), &board).expect("rook on a1");
        assert_eq!(
            mv.piece_captured(),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert!(Move::new((4, 4), (3, 4), &board).is_none());
    }

    #[test]
    fn promotion_flag_derives_from_destination_row() {
        let mut board = Board::empty();
        board.place((1, 0), Piece::new(Color::White, PieceKind::Pawn));
        board.place((6, 7), Piece::new(Color::Black, PieceKind::Pawn));
        board.place((1, 5), Piece::new(Color::White, PieceKind::Rook));

        assert!(Move::new((1, 0), (0, 0), &board).expect("pawn").is_promotion());
        assert!(Move::new((6, 7), (7, 7), &board).expect("pawn").is_promotion());
        assert!(!Move::new((1, 5), (0, 5), &board).expect("rook").is_promotion());
    }

    #[test]
    fn en_passant_captures_opposing_pawn() {
        let mut board = Board::empty();
        board.place((3, 4), Piece::new(Color::White, PieceKind::Pawn));
        board.place((3, 3), Piece::new(Color::Black, PieceKind::Pawn));
        let mv = Move::en_passant((3, 4), (2, 3), &board).expect("pawn on e5");
        assert!(mv.is_en_passant());
        assert_eq!(
            mv.piece_captured(),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn equality_is_by_coordinates_only() {
        let board = Board::starting_position();
        let a = Move::new((6, 4), (5, 4), &board).expect("pawn");
        let b = Move::castle((6, 4), (5, 4), &board).expect("pawn");
        let c = Move::new((6, 4), (4, 4), &board).expect("pawn");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
