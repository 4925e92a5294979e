//! Random-move engine.
//!
//! Selects uniformly from legal moves. Useful as a sparring partner and for
//! exercising the rules engine over long games.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::search::minimax::find_random_move_with_rng;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.get_valid_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = find_random_move_with_rng(&legal_moves, &mut self.rng);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move() {
        let mut engine = RandomEngine::with_seed(11);
        let mut game = GameState::new();
        let legal = game.get_valid_moves();
        let out = engine.choose_move(&mut game).expect("engine output");
        let mv = out.best_move.expect("move");
        assert!(legal.contains(&mv));
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn same_seed_same_choice() {
        let mut game = GameState::new();
        let a = RandomEngine::with_seed(3).choose_move(&mut game).expect("output");
        let b = RandomEngine::with_seed(3).choose_move(&mut game).expect("output");
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn no_move_when_mated() {
        let mut game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fen");
        let out = RandomEngine::with_seed(1).choose_move(&mut game).expect("output");
        assert!(out.best_move.is_none());
    }
}
