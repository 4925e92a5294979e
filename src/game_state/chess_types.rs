//! Core value types shared by the board model, move generation and search.
//!
//! Squares are `(row, col)` pairs on the 8x8 grid. Row 0 is Black's back
//! rank (rank 8) and row 7 is White's back rank (rank 1); column 0 is the
//! a-file.

pub use crate::game_state::game_state::GameState;

/// Board coordinate as `(row, col)`, both in `0..8`.
pub type Square = (i8, i8);

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row from which this color's pawns may advance two squares.
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.fen_char().to_ascii_uppercase(),
            Color::Black => self.kind.fen_char(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self { color, kind })
    }
}

/// Shift a square by a row/column delta, returning `None` when it leaves the board.
#[inline]
pub fn offset_square(square: Square, d_row: i8, d_col: i8) -> Option<Square> {
    let row = square.0 + d_row;
    let col = square.1 + d_col;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row, col))
    } else {
        None
    }
}

/// Snapshot of the four castling permissions.
///
/// Snapshots are never mutated once recorded; revoking a right produces a
/// new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_king_side: false,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: false,
        }
    }

    #[inline]
    pub const fn king_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    /// Both wings lost, as after a king move.
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        self.without_king_side(color).without_queen_side(color)
    }

    #[must_use]
    pub const fn without_king_side(self, color: Color) -> Self {
        match color {
            Color::White => Self {
                white_king_side: false,
                ..self
            },
            Color::Black => Self {
                black_king_side: false,
                ..self
            },
        }
    }

    #[must_use]
    pub const fn without_queen_side(self, color: Color) -> Self {
        match color {
            Color::White => Self {
                white_queen_side: false,
                ..self
            },
            Color::Black => Self {
                black_queen_side: false,
                ..self
            },
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}
