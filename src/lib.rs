//! # tictactoe-engine
//!
//! A two-player, turn-based tic-tac-toe engine. The crate owns the game
//! state machine: turn sequencing, move validation, win/draw detection,
//! and lifecycle transitions. Rendering and input belong to the host.
//!
//! ## Design Principles
//!
//! 1. **Single mutation surface**: all state changes go through
//!    [`GameEngine::start`] and [`GameEngine::apply_move`]. Hosts observe,
//!    they never mutate.
//!
//! 2. **Status is a tagged variant**: terminality is a fact of the
//!    [`GameStatus`] type, not a boolean flag scattered across callbacks.
//!
//! 3. **Deferred first-turn draw**: `start` never blocks while the starting
//!    symbol is decided. The delay runs through a [`DelayScheduler`] seam so
//!    hosts and tests control timing.
//!
//! ## Modules
//!
//! - `core`: Symbols, cells, the board, game status, RNG
//! - `rules`: Win-line and draw evaluation
//! - `engine`: The stateful engine, observers, delay scheduling
//! - `error`: Move rejection reasons
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, InlineScheduler};
//! use std::sync::Arc;
//!
//! let engine = GameEngine::builder()
//!     .seed(42)
//!     .scheduler(Arc::new(InlineScheduler))
//!     .build();
//!
//! engine.start();
//! let next = match engine.current_status() {
//!     GameStatus::InProgress { next } => next,
//!     other => panic!("expected a started game, got {:?}", other),
//! };
//!
//! let status = engine.apply_move(4).unwrap();
//! assert_eq!(status, GameStatus::InProgress { next: next.other() });
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellIndex, GameRng, GameStatus, Line, Symbol, BOARD_CELLS, LINES,
};

pub use crate::engine::{
    DelayScheduler, GameEngine, GameEngineBuilder, InlineScheduler, ManualScheduler,
    StatusObserver, Task, ThreadScheduler,
};

pub use crate::error::MoveError;

pub use crate::rules::{is_draw, winning_line};
