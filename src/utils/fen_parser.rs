//! FEN-to-GameState parser.
//!
//! Builds a game state from a Forsyth-Edwards Notation string: piece
//! placement, side to move, castling rights and en passant target. The
//! halfmove clock is accepted but not tracked; the fullmove number seeds
//! the state's move counter.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    if let Some(target) = en_passant_target {
        check_en_passant_target(&board, side_to_move, target)?;
    }
    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    let fullmove = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;

    let game_state =
        GameState::from_parts(board, side_to_move, castling_rights, en_passant_target)?;
    Ok(game_state.with_starting_fullmove(fullmove))
}

fn invalid(what: &str) -> ChessError {
    ChessError::InvalidFen(what.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0 here.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid(&format!("rank '{rank_str}' has too many files")));
            }

            board.place((row as i8, col as i8), piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("en-passant square '{en_passant_part}'")))
}

/// The target must be the empty square an opposing pawn just skipped over.
fn check_en_passant_target(board: &Board, side_to_move: Color, target: Square) -> ChessResult<()> {
    let opponent = side_to_move.opposite();
    let expected_row = opponent.pawn_home_row() + opponent.pawn_direction();
    let pushed_pawn = (target.0 + opponent.pawn_direction(), target.1);

    if target.0 != expected_row
        || !board.is_empty(target)
        || board.view(pushed_pawn) != Some(Piece::new(opponent, PieceKind::Pawn))
    {
        let square = square_to_algebraic(target);
        return Err(invalid(&format!("en-passant square '{square}' does not follow a double push")));
    }
    Ok(())
}
