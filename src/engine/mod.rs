//! The game engine: the sole mutation and query surface over one game.
//!
//! ## Concurrency
//!
//! The game lives behind a mutex, so `start` and `apply_move` are
//! serialized no matter how many handles exist. The only deferred work is
//! the first-turn draw, which runs through a [`DelayScheduler`] and is
//! guarded by a generation counter: a completion that fires after a newer
//! `start` is a no-op.
//!
//! Observer callbacks run with the game lock released, so a callback may
//! read `current_status` or `board`. Mutating the engine from inside a
//! callback is not supported; a lifecycle host reacting to a terminal
//! status should forward the event to its own loop and call `start` from
//! there.

mod observer;
mod scheduler;

pub use observer::StatusObserver;
pub use scheduler::{DelayScheduler, InlineScheduler, ManualScheduler, Task, ThreadScheduler};

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use crate::core::{Board, CellIndex, GameRng, GameStatus, Symbol};
use crate::error::MoveError;
use crate::rules::winning_line;

/// Default pause before the starting symbol is drawn, long enough for a
/// host to show a "deciding first turn" message.
pub const DEFAULT_DECIDE_DELAY: Duration = Duration::from_millis(500);

/// Mutable game state. Everything behind the engine's lock.
struct GameState {
    board: Board,
    status: GameStatus,
    rng: GameRng,
    /// Incremented by every `start`; stale timer completions compare
    /// against it and bail out.
    generation: u64,
}

type ObserverSet = Arc<Mutex<Vec<Box<dyn StatusObserver>>>>;

/// Two-player tic-tac-toe engine.
///
/// Owns one game at a time. `start` begins (or restarts) a game,
/// `apply_move` plays the current turn's symbol into a cell, and
/// registered observers hear about every status change, including the
/// deferred `Deciding -> InProgress` transition.
pub struct GameEngine {
    state: Arc<Mutex<GameState>>,
    observers: ObserverSet,
    scheduler: Arc<dyn DelayScheduler>,
    decide_delay: Duration,
}

/// Builder for a [`GameEngine`].
pub struct GameEngineBuilder {
    seed: Option<u64>,
    decide_delay: Duration,
    scheduler: Option<Arc<dyn DelayScheduler>>,
}

impl Default for GameEngineBuilder {
    fn default() -> Self {
        Self {
            seed: None,
            decide_delay: DEFAULT_DECIDE_DELAY,
            scheduler: None,
        }
    }
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the first-turn draw for reproducible games.
    ///
    /// Defaults to system entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// How long the engine stays in `Deciding` before drawing the
    /// starting symbol.
    pub fn decide_delay(mut self, delay: Duration) -> Self {
        self.decide_delay = delay;
        self
    }

    /// Replace the default thread-based scheduler.
    pub fn scheduler(mut self, scheduler: Arc<dyn DelayScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build the engine. The game is not started until [`GameEngine::start`].
    pub fn build(self) -> GameEngine {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        GameEngine {
            state: Arc::new(Mutex::new(GameState {
                board: Board::empty(),
                status: GameStatus::Deciding,
                rng,
                generation: 0,
            })),
            observers: Arc::new(Mutex::new(Vec::new())),
            scheduler: self
                .scheduler
                .unwrap_or_else(|| Arc::new(ThreadScheduler)),
            decide_delay: self.decide_delay,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine with default settings: entropy seed, 500 ms decide
    /// delay, thread-based scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customized engine.
    #[must_use]
    pub fn builder() -> GameEngineBuilder {
        GameEngineBuilder::new()
    }

    /// Register an observer for status changes.
    ///
    /// Closures work too: any `FnMut(GameStatus) + Send` is an observer.
    pub fn subscribe(&self, observer: impl StatusObserver + 'static) {
        self.observers
            .lock()
            .expect("observer lock poisoned")
            .push(Box::new(observer));
    }

    /// Start a new game.
    ///
    /// Resets the board, moves to `Deciding`, and schedules the deferred
    /// first-turn draw. Never blocks on the delay; the eventual
    /// `InProgress` transition reaches observers through [`subscribe`].
    /// Starting over a pending or finished game is always valid.
    ///
    /// [`subscribe`]: GameEngine::subscribe
    pub fn start(&self) -> GameStatus {
        let generation = {
            let mut state = self.state.lock().expect("engine lock poisoned");
            state.board = Board::empty();
            state.status = GameStatus::Deciding;
            state.generation += 1;
            state.generation
        };

        notify(&self.observers, GameStatus::Deciding);

        let state = Arc::downgrade(&self.state);
        let observers = Arc::downgrade(&self.observers);
        self.scheduler.schedule(
            self.decide_delay,
            Box::new(move || complete_first_turn(&state, &observers, generation)),
        );

        GameStatus::Deciding
    }

    /// Play the current turn's symbol into `cell`.
    ///
    /// Preconditions, checked in order: the game must be accepting moves,
    /// the index must be in `0..9`, and the cell must be empty. Rejected
    /// moves leave the game untouched.
    ///
    /// On success the move may complete a line (`Won`), fill the board
    /// (`Draw`), or flip the turn. Returns the resulting status, which is
    /// also delivered to observers.
    pub fn apply_move(&self, cell: usize) -> Result<GameStatus, MoveError> {
        let status = {
            let mut state = self.state.lock().expect("engine lock poisoned");

            let mover = state
                .status
                .next_symbol()
                .ok_or(MoveError::GameNotAcceptingMoves)?;
            let index = CellIndex::new(cell)?;
            if !state.board.cell(index).is_empty() {
                return Err(MoveError::CellOccupied);
            }

            state.board.mark(index, mover);
            state.status = resolve(&state.board, mover);
            state.status
        };

        notify(&self.observers, status);
        Ok(status)
    }

    /// The current status. Pure read.
    #[must_use]
    pub fn current_status(&self) -> GameStatus {
        self.state.lock().expect("engine lock poisoned").status
    }

    /// Snapshot of the board. Pure read.
    #[must_use]
    pub fn board(&self) -> Board {
        self.state.lock().expect("engine lock poisoned").board
    }
}

/// Status after `mover` has just marked a cell.
fn resolve(board: &Board, mover: Symbol) -> GameStatus {
    if let Some(line) = winning_line(board, mover) {
        GameStatus::Won {
            symbol: mover,
            line,
        }
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            next: mover.other(),
        }
    }
}

/// Timer completion for the first-turn draw.
///
/// Weak references: a completion outliving its engine does nothing. The
/// generation check drops completions superseded by a newer `start`.
fn complete_first_turn(
    state: &Weak<Mutex<GameState>>,
    observers: &Weak<Mutex<Vec<Box<dyn StatusObserver>>>>,
    generation: u64,
) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let status = {
        let mut state = state.lock().expect("engine lock poisoned");
        if state.generation != generation || state.status != GameStatus::Deciding {
            return;
        }
        let first = state.rng.starting_symbol();
        state.status = GameStatus::InProgress { next: first };
        state.status
    };

    if let Some(observers) = observers.upgrade() {
        notify(&observers, status);
    }
}

fn notify(observers: &ObserverSet, status: GameStatus) {
    let mut observers = observers.lock().expect("observer lock poisoned");
    for observer in observers.iter_mut() {
        observer.status_changed(status);
    }
}
