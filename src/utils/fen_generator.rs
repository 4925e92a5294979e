//! GameState-to-FEN serializer.
//!
//! The halfmove clock is not tracked and is always written as `0`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::new();
    let board = game_state.board();

    for row in 0..8i8 {
        let mut empty_run = 0u8;
        for col in 0..8i8 {
            match board.view((row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(if game_state.white_to_move() { 'w' } else { 'b' });
    out.push(' ');
    out.push_str(&castling_field(game_state.castling_rights()));
    out.push(' ');
    match game_state.en_passant_target() {
        Some(square) => out.push_str(&square_to_algebraic(square)),
        None => out.push('-'),
    }
    out.push_str(" 0 ");
    out.push_str(&game_state.fullmove_number().to_string());

    out
}

fn castling_field(rights: CastlingRights) -> String {
    let field: String = [
        (rights.white_king_side, 'K'),
        (rights.white_queen_side, 'Q'),
        (rights.black_king_side, 'k'),
        (rights.black_queen_side, 'q'),
    ]
    .iter()
    .filter(|(held, _)| *held)
    .map(|(_, ch)| *ch)
    .collect();

    if field.is_empty() {
        "-".to_owned()
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;

    #[test]
    fn regenerates_parsed_positions() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "1r4k1/7p/3p1bp1/p1pP4/P1P1prP1/1N2R2P/1P1N1PK1/8 b - - 0 31",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w Kq d6 0 3",
        ] {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(game.get_fen(), fen);
        }
    }

    #[test]
    fn fullmove_advances_after_black_moves() {
        let mut game = GameState::new();
        for notation in ["e2e4", "e7e5", "g1f3"] {
            let mv = game.find_legal_move(notation).expect("legal opening move");
            game.make_move(mv);
        }
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 2"
        );
    }
}
