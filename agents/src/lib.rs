//! Move selection for Lines of Action: the position evaluator, the
//! fixed-depth search built on it, and the agents that play a side.

pub mod evaluation;
pub mod machine;
pub mod random;
pub mod search;

use loa_core::{Board, Move};

/// Core trait for anything that can choose a move for the side to move.
pub trait Agent {
    /// Chooses a legal move for `board.turn()`, or `None` if there is none.
    fn best_move(&mut self, board: &Board) -> Option<Move>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use evaluation::*;
pub use machine::MachineAgent;
pub use random::RandomAgent;
pub use search::*;
