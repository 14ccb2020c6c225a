//! Game status: the tagged variant the whole lifecycle hangs off.
//!
//! ```text
//! (start) -> Deciding -> InProgress(X|O) --moves--> Won | Draw
//! Won | Draw --start--> Deciding
//! ```

use serde::{Deserialize, Serialize};

use super::board::Line;
use super::symbol::Symbol;

/// Where the game is in its lifecycle.
///
/// `Won` and `Draw` are terminal: no move is accepted until the engine is
/// started again. `Deciding` is the transient pre-game state while the
/// starting symbol is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Starting symbol not yet drawn; moves are rejected.
    Deciding,
    /// Game underway; `next` moves next.
    InProgress { next: Symbol },
    /// `symbol` completed `line`. Terminal.
    Won { symbol: Symbol, line: Line },
    /// Board full with no completed line. Terminal.
    Draw,
}

impl GameStatus {
    /// Check whether the game has ended (won or drawn).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won { .. } | GameStatus::Draw)
    }

    /// Check whether a move would currently be accepted.
    #[must_use]
    pub fn accepts_moves(self) -> bool {
        matches!(self, GameStatus::InProgress { .. })
    }

    /// The symbol to move next, if the game is in progress.
    #[must_use]
    pub fn next_symbol(self) -> Option<Symbol> {
        match self {
            GameStatus::InProgress { next } => Some(next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminality() {
        assert!(!GameStatus::Deciding.is_terminal());
        assert!(!GameStatus::InProgress { next: Symbol::X }.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert!(GameStatus::Won {
            symbol: Symbol::O,
            line: [0, 4, 8]
        }
        .is_terminal());
    }

    #[test]
    fn test_accepts_moves() {
        assert!(!GameStatus::Deciding.accepts_moves());
        assert!(GameStatus::InProgress { next: Symbol::O }.accepts_moves());
        assert!(!GameStatus::Draw.accepts_moves());
    }

    #[test]
    fn test_next_symbol() {
        assert_eq!(
            GameStatus::InProgress { next: Symbol::X }.next_symbol(),
            Some(Symbol::X)
        );
        assert_eq!(GameStatus::Deciding.next_symbol(), None);
        assert_eq!(GameStatus::Draw.next_symbol(), None);
    }

    #[test]
    fn test_status_serde() {
        let status = GameStatus::Won {
            symbol: Symbol::X,
            line: [2, 4, 6],
        };

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: GameStatus = serde_json::from_str(&json).unwrap();

        assert_eq!(status, deserialized);
    }
}
