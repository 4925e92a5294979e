//! Engine abstraction used by the match harness and the self-play binary.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `best_move` is `None` only when
    /// there are no legal moves. The state is unchanged on return.
    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput>;
}
