//! Outbound status notifications.

use crate::core::GameStatus;

/// Receiver for status changes.
///
/// The engine calls `status_changed` on every transition: the `Deciding`
/// reset, the deferred first-turn draw, each accepted move, and terminal
/// outcomes. Display adapters render from these; they never poll.
pub trait StatusObserver: Send {
    fn status_changed(&mut self, status: GameStatus);
}

/// Any sendable closure over the status is an observer.
impl<F> StatusObserver for F
where
    F: FnMut(GameStatus) + Send,
{
    fn status_changed(&mut self, status: GameStatus) {
        self(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    #[test]
    fn test_closure_is_an_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |status: GameStatus| seen.push(status);
            observer.status_changed(GameStatus::Deciding);
            observer.status_changed(GameStatus::InProgress { next: Symbol::X });
        }

        assert_eq!(
            seen,
            vec![
                GameStatus::Deciding,
                GameStatus::InProgress { next: Symbol::X }
            ]
        );
    }
}
