//! 8x8 mailbox board.
//!
//! Row-major grid of optional pieces. Row 0 is rank 8, row 7 is rank 1.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.place((0, col), Piece::new(Color::Black, *kind));
            board.place((1, col), Piece::new(Color::Black, PieceKind::Pawn));
            board.place((6, col), Piece::new(Color::White, PieceKind::Pawn));
            board.place((7, col), Piece::new(Color::White, *kind));
        }
        board
    }

    #[inline]
    pub fn view(&self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize][square.1 as usize]
    }

    #[inline]
    pub fn at(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[square.0 as usize][square.1 as usize]
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        *self.at(square) = Some(piece);
    }

    /// Empty a square, returning what stood there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.at(square).take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.view(square).is_none()
    }

    /// True when the square holds a piece of `color`.
    #[inline]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.view(square), Some(piece) if piece.color == color)
    }

    /// Every occupied square with its piece, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|piece| ((row as i8, col as i8), piece)))
        })
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
            .map(|(square, _)| square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
