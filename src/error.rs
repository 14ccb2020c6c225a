//! Move rejection reasons.
//!
//! Every variant is a local, recoverable condition: the engine state is
//! unchanged on each error path and the caller may simply ignore the
//! rejected input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The game is still deciding the first turn, or has already ended.
    #[error("game is not accepting moves")]
    GameNotAcceptingMoves,

    /// Cell index outside `0..9`.
    #[error("cell index out of range")]
    InvalidCell,

    /// The target cell already holds a mark.
    #[error("cell is already occupied")]
    CellOccupied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            MoveError::GameNotAcceptingMoves.to_string(),
            "game is not accepting moves"
        );
        assert_eq!(MoveError::InvalidCell.to_string(), "cell index out of range");
        assert_eq!(
            MoveError::CellOccupied.to_string(),
            "cell is already occupied"
        );
    }
}
