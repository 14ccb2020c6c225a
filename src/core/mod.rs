//! Core data model: symbols, cells, the board, game status, RNG.

mod board;
mod rng;
mod status;
mod symbol;

pub use board::{Board, Cell, CellIndex, Line, BOARD_CELLS, LINES};
pub use rng::GameRng;
pub use status::GameStatus;
pub use symbol::Symbol;
