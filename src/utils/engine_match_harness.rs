//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other without any input
//! or rendering, with an optional seeded random opening prefix.

use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameOutcome, GameState};
use crate::moves::chess_move::Move;
use crate::search::minimax::find_random_move_with_rng;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinsCheckmate,
    BlackWinsCheckmate,
    Stalemate,
    MaxPlies,
}

impl MatchOutcome {
    pub fn pgn_result(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinsCheckmate => "1-0",
            MatchOutcome::BlackWinsCheckmate => "0-1",
            MatchOutcome::Stalemate => "1/2-1/2",
            MatchOutcome::MaxPlies => "*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
    /// Random plies played before the engines take over.
    pub opening_random_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            opening_random_plies: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub initial_state: GameState,
    pub final_state: GameState,
    pub played_moves: Vec<Move>,
    pub played_moves_lan: Vec<String>,
    pub white_name: String,
    pub black_name: String,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    /// Draw colors per game; otherwise player 1 always has White.
    pub randomize_colors: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
            randomize_colors: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub unfinished: u16,
    pub results: Vec<MatchResult>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} unfinished={}",
            self.games, self.player1_wins, self.player2_wins, self.draws, self.unfinished
        )
    }
}

/// Play one match from the standard starting position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(GameState::new(), engine_white, engine_black, config)
}

/// Play one match from `start_state`. The side to move in `start_state`
/// is handed to the matching engine.
pub fn play_engine_match_from_state(
    start_state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = start_state;
    let initial_state = state.clone();
    let mut opening_rng = StdRng::seed_from_u64(config.seed);
    let mut played_moves = Vec::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let outcome = loop {
        let legal_moves = state.get_valid_moves();
        if let Some(outcome) = state.outcome() {
            break match outcome {
                GameOutcome::Checkmate {
                    winner: Color::White,
                } => MatchOutcome::WhiteWinsCheckmate,
                GameOutcome::Checkmate {
                    winner: Color::Black,
                } => MatchOutcome::BlackWinsCheckmate,
                GameOutcome::Stalemate => MatchOutcome::Stalemate,
            };
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::MaxPlies;
        }

        let mover = state.side_to_move();
        let chosen = if played_moves.len() < usize::from(config.opening_random_plies) {
            find_random_move_with_rng(&legal_moves, &mut opening_rng)
        } else {
            let started = Instant::now();
            let out = match mover {
                Color::White => engine_white.choose_move(&mut state)?,
                Color::Black => engine_black.choose_move(&mut state)?,
            };
            let elapsed_ns = started.elapsed().as_nanos();
            match mover {
                Color::White => white_total_time_ns += elapsed_ns,
                Color::Black => black_total_time_ns += elapsed_ns,
            }
            out.best_move
        };

        let chosen = chosen.ok_or(ChessError::NoLegalMoves)?;
        if !legal_moves.contains(&chosen) {
            return Err(ChessError::IllegalMove(chosen.get_chess_notation()));
        }
        debug!(ply = played_moves.len(), mv = %chosen, "engine move");
        state.make_move(chosen);
        played_moves.push(chosen);
    };

    let result = MatchResult {
        outcome,
        played_moves_lan: played_moves.iter().map(move_to_long_algebraic).collect(),
        initial_state,
        final_state: state,
        played_moves,
        white_name: engine_white.name().to_owned(),
        black_name: engine_black.name().to_owned(),
        white_total_time_ns,
        black_total_time_ns,
    };
    info!(
        white = %result.white_name,
        black = %result.black_name,
        outcome = ?result.outcome,
        plies = result.played_moves.len(),
        "match finished"
    );
    debug!("final position\n{}", result.final_state.board());
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Factories receive the per-game seed. When colors are randomized they are
/// drawn each game, deterministically from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = !config.randomize_colors || color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let game_config = MatchConfig {
            seed,
            ..config.per_game.clone()
        };

        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed.wrapping_add(1));
        info!(game = i + 1, games = config.games, seed, player1_is_white, "starting game");

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), &game_config)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), &game_config)?
        };

        let winner = match result.outcome {
            MatchOutcome::WhiteWinsCheckmate => Some(Color::White),
            MatchOutcome::BlackWinsCheckmate => Some(Color::Black),
            MatchOutcome::Stalemate => {
                stats.draws += 1;
                None
            }
            MatchOutcome::MaxPlies => {
                stats.unfinished += 1;
                None
            }
        };
        if let Some(color) = winner {
            let player1_color = if player1_is_white { Color::White } else { Color::Black };
            match winning_player(color, player1_color) {
                PlayerId::Player1 => stats.player1_wins += 1,
                PlayerId::Player2 => stats.player2_wins += 1,
            }
        }
        stats.results.push(result);
    }

    Ok(stats)
}

fn winning_player(winner: Color, player1_color: Color) -> PlayerId {
    if winner == player1_color {
        PlayerId::Player1
    } else {
        PlayerId::Player2
    }
}
