//! Win and draw evaluation.
//!
//! Only the mover's lines are checked after a move: the opponent cannot
//! have completed a line while it was not their turn.

use crate::core::{Board, Line, Symbol, LINES};

/// Find the first line fully marked by `symbol`, in [`LINES`] order.
///
/// Returns `None` if no line is complete.
#[must_use]
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<Line> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| board.cell_at(i).is_marked_by(symbol)))
}

/// Check whether the board is a draw: full, with no completed line for
/// either symbol.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && winning_line(board, Symbol::X).is_none()
        && winning_line(board, Symbol::O).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellIndex;

    fn board_with(marks: &[(usize, Symbol)]) -> Board {
        let mut board = Board::empty();
        for &(index, symbol) in marks {
            board.mark(CellIndex::new(index).unwrap(), symbol);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::empty();
        assert_eq!(winning_line(&board, Symbol::X), None);
        assert_eq!(winning_line(&board, Symbol::O), None);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_each_line_is_detected() {
        for line in LINES {
            let marks: Vec<_> = line.iter().map(|&i| (i, Symbol::O)).collect();
            let board = board_with(&marks);

            assert_eq!(winning_line(&board, Symbol::O), Some(line));
            assert_eq!(winning_line(&board, Symbol::X), None);
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Symbol::X), (1, Symbol::O), (2, Symbol::X)]);
        assert_eq!(winning_line(&board, Symbol::X), None);
        assert_eq!(winning_line(&board, Symbol::O), None);
    }

    #[test]
    fn test_first_line_wins_on_multiple_completions() {
        // X on every cell completes all eight lines; the first enumerated
        // row must be reported.
        let marks: Vec<_> = (0..9).map(|i| (i, Symbol::X)).collect();
        let board = board_with(&marks);

        assert_eq!(winning_line(&board, Symbol::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_draw_requires_full_board() {
        // Canonical non-winning fill.
        let board = board_with(&[
            (0, Symbol::X),
            (1, Symbol::O),
            (2, Symbol::X),
            (4, Symbol::O),
            (3, Symbol::X),
            (5, Symbol::O),
            (7, Symbol::X),
            (6, Symbol::O),
            (8, Symbol::X),
        ]);

        assert!(is_draw(&board));

        let partial = board_with(&[(0, Symbol::X), (1, Symbol::O)]);
        assert!(!is_draw(&partial));
    }
}
