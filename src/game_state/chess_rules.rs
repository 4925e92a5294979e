//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed columns used by castling bookkeeping.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of both kings at the start of the game (the e-file).
pub const KING_START_COL: i8 = 4;

/// Column of the king-side rooks at the start of the game (the h-file).
pub const KING_SIDE_ROOK_COL: i8 = 7;

/// Column of the queen-side rooks at the start of the game (the a-file).
pub const QUEEN_SIDE_ROOK_COL: i8 = 0;
