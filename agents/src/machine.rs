use crate::{
    search::{search_to_depth, DEPTH},
    Agent,
};
use loa_core::{Board, Move};
use log::{info, warn};

/// Plays the side to move with a fixed-depth search.
pub struct MachineAgent {
    name: String,
    depth: u8,
}

impl MachineAgent {
    pub fn new() -> Self {
        Self::with_depth(DEPTH)
    }

    /// Searches `depth` plies instead of the standard [`DEPTH`].
    pub fn with_depth(depth: u8) -> Self {
        MachineAgent {
            name: format!("Machine(depth={})", depth),
            depth,
        }
    }
}

impl Default for MachineAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MachineAgent {
    /// Picks the searched move, or the first legal move if the search found
    /// nothing better than a loss. `None` only when no move is legal.
    fn best_move(&mut self, board: &Board) -> Option<Move> {
        let side = board.turn();
        let result = search_to_depth(board, side, self.depth);

        let chosen = match result.best_move {
            Some(mv) => Some(mv),
            None => {
                let fallback = board.legal_moves().next();
                if let Some(mv) = fallback {
                    warn!("search found no move for {side}, falling back to {mv}");
                }
                fallback
            }
        };

        if let Some(mv) = chosen {
            info!("{}::{}", side.abbrev().to_ascii_uppercase(), mv);
        }
        chosen
    }

    fn name(&self) -> &str {
        &self.name
    }
}
