pub mod game_state;
pub mod hole;
pub mod jumps;
pub mod memo;
pub mod position;
pub mod solver;

use thiserror::Error;

pub use game_state::{GameState, Solvability};
pub use hole::{Hole, symmetry_classes};
pub use jumps::{MOVE_CATALOG, Move};
pub use memo::UnsolvableMemo;
pub use position::{PegStatus, Position};
pub use solver::{MemoStats, SolutionSink, SolveStats, Solver, SolverConfig};

pub const NR_HOLES: usize = 15;
pub const NR_ROWS: usize = 5;
pub const NR_MOVES: usize = 36;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("hole {index} is not on the board (expected 0..{max})", max = NR_HOLES)]
    InvalidIndex { index: usize },

    #[error("move {mv} is not legal in the current position")]
    IllegalMove { mv: Move },

    #[error("cannot parse board: {0}")]
    InvalidAscii(String),
}
