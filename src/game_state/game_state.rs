//! Mutable game model and the make/undo protocol.
//!
//! `GameState` owns the board, side to move, king locations, the per-ply
//! castling-rights and en-passant snapshot logs, and the move log. Every
//! `make_move` pushes exactly one entry onto each log and every
//! `undo_move` pops one, so
//! `castle_rights_log.len() == move_log.len() + 1` always holds and an
//! undo restores the position bit for bit.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) white_king_location: Square,
    pub(crate) black_king_location: Square,
    pub(crate) check_mate: bool,
    pub(crate) stale_mate: bool,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) current_castling_rights: CastlingRights,
    castle_rights_log: Vec<CastlingRights>,
    en_passant_log: Vec<Option<Square>>,
    move_log: Vec<Move>,
    starting_fullmove: u16,
    started_with_black: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let board = Board::starting_position();
        Self {
            board,
            white_to_move: true,
            white_king_location: (7, 4),
            black_king_location: (0, 4),
            check_mate: false,
            stale_mate: false,
            en_passant_target: None,
            current_castling_rights: CastlingRights::all(),
            castle_rights_log: vec![CastlingRights::all()],
            en_passant_log: vec![None],
            move_log: Vec::new(),
            starting_fullmove: 1,
            started_with_black: false,
        }
    }

    /// Build a state from an arbitrary layout. Each side must have exactly one king.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let white_king_location = single_king(&board, Color::White)?;
        let black_king_location = single_king(&board, Color::Black)?;

        Ok(Self {
            board,
            white_to_move: side_to_move == Color::White,
            white_king_location,
            black_king_location,
            check_mate: false,
            stale_mate: false,
            en_passant_target,
            current_castling_rights: castling_rights,
            castle_rights_log: vec![castling_rights],
            en_passant_log: vec![en_passant_target],
            move_log: Vec::new(),
            starting_fullmove: 1,
            started_with_black: side_to_move == Color::Black,
        })
    }

    /// Fullmove counter the position started from (FEN field 6).
    pub(crate) fn with_starting_fullmove(mut self, fullmove: u16) -> Self {
        self.starting_fullmove = fullmove.max(1);
        self
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Discard the current game and start over from the initial position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Set by the most recent `get_valid_moves` call.
    #[inline]
    pub fn check_mate(&self) -> bool {
        self.check_mate
    }

    /// Set by the most recent `get_valid_moves` call.
    #[inline]
    pub fn stale_mate(&self) -> bool {
        self.stale_mate
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.current_castling_rights
    }

    #[inline]
    pub fn castle_rights_log(&self) -> &[CastlingRights] {
        &self.castle_rights_log
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// FEN fullmove number: starts at 1 and increments after each Black move.
    pub fn fullmove_number(&self) -> u16 {
        let plies = self.move_log.len() + usize::from(self.started_with_black);
        self.starting_fullmove
            .saturating_add(u16::try_from(plies / 2).unwrap_or(u16::MAX))
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.check_mate || self.stale_mate
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.check_mate {
            Some(GameOutcome::Checkmate {
                winner: self.side_to_move().opposite(),
            })
        } else if self.stale_mate {
            Some(GameOutcome::Stalemate)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn toggle_side_to_move(&mut self) {
        self.white_to_move = !self.white_to_move;
    }

    /// Apply a move taken from the current legal-move list. Not re-validated.
    pub fn make_move(&mut self, mv: Move) {
        let start = mv.start();
        let end = mv.end();
        let moved = mv.piece_moved();

        self.board.clear(start);
        self.board.place(end, moved);

        if moved.kind == PieceKind::King {
            self.set_king_location(moved.color, end);
        }

        if mv.is_promotion() {
            self.board.place(end, Piece::new(moved.color, PieceKind::Queen));
        }

        if mv.is_en_passant() {
            self.board.clear((start.0, end.1));
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(((start.0 + end.0) / 2, start.1))
        } else {
            None
        };

        if mv.is_castle() {
            let row = end.0;
            if mv.is_king_side_castle() {
                self.relocate((row, end.1 + 1), (row, end.1 - 1));
            } else {
                self.relocate((row, end.1 - 2), (row, end.1 + 1));
            }
        }

        self.current_castling_rights = updated_castling_rights(self.current_castling_rights, &mv);
        self.castle_rights_log.push(self.current_castling_rights);
        self.en_passant_log.push(self.en_passant_target);
        self.move_log.push(mv);
        self.toggle_side_to_move();
    }

    /// Take back the last move. No-op when nothing has been played.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let start = mv.start();
        let end = mv.end();
        let moved = mv.piece_moved();

        self.board.place(start, moved);
        *self.board.at(end) = mv.piece_captured();

        if moved.kind == PieceKind::King {
            self.set_king_location(moved.color, start);
        }

        if mv.is_en_passant() {
            self.board.clear(end);
            *self.board.at((start.0, end.1)) = mv.piece_captured();
        }

        self.castle_rights_log.pop();
        self.current_castling_rights = self
            .castle_rights_log
            .last()
            .copied()
            .unwrap_or_else(CastlingRights::none);

        // Restoring the snapshot also covers the one-ply en passant window:
        // after undoing an en passant capture the target is the capture
        // square again, after undoing a double push it is whatever preceded it.
        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();

        if mv.is_castle() {
            let row = end.0;
            if mv.is_king_side_castle() {
                self.relocate((row, end.1 - 1), (row, end.1 + 1));
            } else {
                self.relocate((row, end.1 + 1), (row, end.1 - 2));
            }
        }

        self.toggle_side_to_move();
        self.check_mate = false;
        self.stale_mate = false;
    }

    fn set_king_location(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_location = square,
            Color::Black => self.black_king_location = square,
        }
    }

    fn relocate(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.board.clear(from) {
            self.board.place(to, piece);
        }
    }
}

/// Rights after `mv`: lost for good once the king or a corner rook moves,
/// or once something lands on a rook's original corner.
fn updated_castling_rights(rights: CastlingRights, mv: &Move) -> CastlingRights {
    let moved = mv.piece_moved();
    let mut rights = match moved.kind {
        PieceKind::King => rights.without_color(moved.color),
        PieceKind::Rook => revoke_for_corner(rights, moved.color, mv.start()),
        _ => rights,
    };

    if let Some(captured) = mv.piece_captured() {
        if captured.kind == PieceKind::Rook {
            rights = revoke_for_corner(rights, captured.color, mv.end());
        }
    }

    rights
}

fn revoke_for_corner(rights: CastlingRights, color: Color, square: Square) -> CastlingRights {
    if square.0 != color.back_row() {
        return rights;
    }
    match square.1 {
        QUEEN_SIDE_ROOK_COL => rights.without_queen_side(color),
        KING_SIDE_ROOK_COL => rights.without_king_side(color),
        _ => rights,
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let king = Piece::new(color, PieceKind::King);
    let mut kings = board.pieces().filter(|(_, piece)| *piece == king);
    match (kings.next(), kings.next()) {
        (Some((square, _)), None) => Ok(square),
        _ => Err(ChessError::MissingKing(color)),
    }
}
