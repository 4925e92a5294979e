//! PGN-style game records in coordinate notation.
//!
//! Writes the move history of a position with Seven Tag Roster headers.
//! Positions other than the standard start carry `SetUp`/`FEN` tags.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::utils::engine_match_harness::MatchResult;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// PGN record of a finished harness match, dated today.
pub fn match_to_pgn(result: &MatchResult) -> String {
    match_to_pgn_dated(result, Local::now().date_naive())
}

pub fn match_to_pgn_dated(result: &MatchResult, date: NaiveDate) -> String {
    let mut headers = default_headers(date);
    headers.insert("White".to_owned(), result.white_name.clone());
    headers.insert("Black".to_owned(), result.black_name.clone());
    headers.insert("Result".to_owned(), result.outcome.pgn_result().to_owned());
    insert_setup_headers(&mut headers, &result.initial_state);
    write_pgn_with_headers(&result.initial_state, &result.played_moves, &headers)
}

pub fn write_pgn(
    initial_state: &GameState,
    move_history: &[Move],
    result: &str,
    date: NaiveDate,
) -> String {
    let mut headers = default_headers(date);
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());
    insert_setup_headers(&mut headers, initial_state);
    write_pgn_with_headers(initial_state, move_history, &headers)
}

pub fn write_pgn_with_headers(
    initial_state: &GameState,
    move_history: &[Move],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();
    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut fullmove = initial_state.fullmove_number();
    let mut white_to_move = initial_state.white_to_move();
    let mut movetext_parts = Vec::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let lan = move_to_long_algebraic(mv);
        if white_to_move {
            movetext_parts.push(format!("{fullmove}. {lan}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{fullmove}... {lan}"));
        } else {
            movetext_parts.push(lan);
        }
        if !white_to_move {
            fullmove += 1;
        }
        white_to_move = !white_to_move;
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn default_headers(date: NaiveDate) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Event".to_owned(), "Twoply Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers
}

fn insert_setup_headers(headers: &mut BTreeMap<String, String>, initial_state: &GameState) {
    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
