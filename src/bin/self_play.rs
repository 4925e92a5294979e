//! Engine-vs-engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --games 4 --white minimax --black random`
//! `RUST_LOG=twoply_chess=trace cargo run --bin self_play -- --games 1`

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use twoply_chess::chess_errors::ChessResult;
use twoply_chess::engines::engine_minimax::MinimaxEngine;
use twoply_chess::engines::engine_random::RandomEngine;
use twoply_chess::engines::engine_trait::Engine;
use twoply_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use twoply_chess::utils::pgn::match_to_pgn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

impl EngineKind {
    fn build(self, seed: u64) -> Box<dyn Engine> {
        match self {
            EngineKind::Minimax => Box::new(MinimaxEngine::with_seed(seed)),
            EngineKind::Random => Box::new(RandomEngine::with_seed(seed)),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "self_play", about = "Play two-ply engines against each other")]
struct Args {
    /// Number of games in the series.
    #[arg(long, default_value_t = MatchSeriesConfig::default().games)]
    games: u16,

    /// Plies after which an unfinished game is abandoned.
    #[arg(long, default_value_t = MatchConfig::default().max_plies)]
    max_plies: u16,

    /// Random plies played before the engines take over.
    #[arg(long, default_value_t = 0)]
    opening_plies: u8,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    black: EngineKind,

    /// Draw colors per game instead of keeping --white on White.
    #[arg(long)]
    random_colors: bool,

    /// Print a PGN record for every game.
    #[arg(long)]
    pgn: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ChessResult<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = MatchSeriesConfig {
        games: args.games,
        base_seed: args.seed,
        per_game: MatchConfig {
            max_plies: args.max_plies,
            seed: args.seed,
            opening_random_plies: args.opening_plies,
        },
        randomize_colors: args.random_colors,
    };

    let player1 = args.white;
    let player2 = args.black;
    let stats = play_engine_match_series(
        |seed| player1.build(seed),
        |seed| player2.build(seed),
        &config,
    )?;

    if args.pgn {
        for result in &stats.results {
            println!("{}", match_to_pgn(result));
        }
    }
    println!("{}", stats.report());
    Ok(())
}
