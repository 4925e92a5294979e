//! Two-ply minimax over material.
//!
//! For each candidate move, assume the opponent answers with the reply
//! that is best for them by material, then pick the candidate whose best
//! reply is least damaging. Candidates are shuffled first so equal scores
//! are broken at random.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_material, CHECKMATE, STALEMATE};

/// Best move for the side to move among `valid_moves`, or `None` when no
/// candidate scored below the initial bound.
///
/// `game_state` is restored on return. `valid_moves` should be the
/// current legal-move list.
pub fn find_best_move(game_state: &mut GameState, valid_moves: &[Move]) -> Option<Move> {
    find_best_move_with_rng(game_state, valid_moves, &mut rand::rng())
}

pub fn find_best_move_with_rng<R: Rng + ?Sized>(
    game_state: &mut GameState,
    valid_moves: &[Move],
    rng: &mut R,
) -> Option<Move> {
    let turn_multiplier = if game_state.white_to_move() { 1 } else { -1 };
    let mut candidates = valid_moves.to_vec();
    candidates.shuffle(rng);

    let mut opponent_min_max_score = CHECKMATE;
    let mut best_move = None;

    for player_move in candidates {
        game_state.make_move(player_move);
        let opponent_moves = game_state.get_valid_moves();

        let opponent_max_score = if game_state.stale_mate() {
            STALEMATE
        } else if game_state.check_mate() {
            -CHECKMATE
        } else {
            best_reply_score(game_state, &opponent_moves, turn_multiplier)
        };

        if opponent_max_score < opponent_min_max_score {
            opponent_min_max_score = opponent_max_score;
            best_move = Some(player_move);
        }
        game_state.undo_move();
    }

    match best_move {
        Some(mv) => debug!(mv = %mv, score = opponent_min_max_score, "minimax selected move"),
        None => debug!("minimax found no move below the checkmate bound"),
    }
    best_move
}

/// Highest score the opponent can reach with one reply, from their side.
fn best_reply_score(game_state: &mut GameState, replies: &[Move], turn_multiplier: i32) -> i32 {
    let mut opponent_max_score = -CHECKMATE;

    for &reply in replies {
        game_state.make_move(reply);
        game_state.get_valid_moves();

        let score = if game_state.check_mate() {
            CHECKMATE
        } else if game_state.stale_mate() {
            STALEMATE
        } else {
            -turn_multiplier * score_material(game_state.board())
        };

        opponent_max_score = opponent_max_score.max(score);
        game_state.undo_move();
    }

    opponent_max_score
}

/// Uniformly random pick from `valid_moves`.
pub fn find_random_move(valid_moves: &[Move]) -> Option<Move> {
    find_random_move_with_rng(valid_moves, &mut rand::rng())
}

pub fn find_random_move_with_rng<R: Rng + ?Sized>(
    valid_moves: &[Move],
    rng: &mut R,
) -> Option<Move> {
    valid_moves.choose(rng).copied()
}
