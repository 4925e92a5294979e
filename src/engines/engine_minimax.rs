//! Two-ply material minimax engine.
//!
//! Falls back to a random legal move when the search does not settle on one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::search::minimax::{find_best_move_with_rng, find_random_move_with_rng};

pub struct MinimaxEngine {
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.get_valid_moves();
        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("minimax_engine legal_moves {}", legal_moves.len()));

        let searched = find_best_move_with_rng(game_state, &legal_moves, &mut self.rng);
        out.best_move = match searched {
            Some(mv) => Some(mv),
            None => {
                debug!("minimax returned no move, picking at random");
                out.info_lines.push("minimax_engine random_fallback".to_owned());
                find_random_move_with_rng(&legal_moves, &mut self.rng)
            }
        };
        Ok(out)
    }
}
