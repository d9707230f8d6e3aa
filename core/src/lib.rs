pub mod board;
pub mod error;
pub mod move_gen;
pub mod moves;
pub mod perft;
pub mod position;
pub mod types;

pub use board::*;
pub use error::{LoaError, Result};
pub use move_gen::*;
pub use moves::Move;
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use position::positions;
pub use types::*;
