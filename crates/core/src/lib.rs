//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game: the grid, the shape
//! catalog, the active and held pieces, scoring, and the tick function that
//! advances everything. It does no I/O; rendering, input and persistence live
//! in sibling crates.
//!
//! # Module Structure
//!
//! - [`shape`]: boolean shape matrices and quarter-turn rotation
//! - [`catalog`]: the seven templates, the palette, and piece sources
//! - [`grid`]: fixed-size board with line detection and clearing
//! - [`piece`]: positioned pieces and clamping
//! - [`scoring`]: line clear table and combo payout
//! - [`config`]: grid size and simulation rates
//! - [`game_state`]: the tick function and input interpreter
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Rules
//!
//! - Pieces are drawn uniformly from the catalog with a random color and a
//!   random number of clockwise spins.
//! - Gravity moves the piece one row every `round(15 / 3) = 5` ticks.
//! - A piece that cannot fall locks immediately; there is no lock delay.
//! - Lines completed by a lock are cleared on the following tick.
//! - Locking in the top row ends the game and resets everything.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::Command;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.tick();
//! assert!(game.active().is_some());
//!
//! game.apply_command(Command::HardDrop);
//! let summary = game.tick();
//! assert!(summary.locked);
//! assert_eq!(game.grid().filled_count(), 4);
//! ```

pub mod catalog;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{catalog, template, PieceSource, RandomSource, Spawn};
pub use config::GameConfig;
pub use game_state::{GameState, TickSummary};
pub use grid::{Cell, Grid, GridError};
pub use piece::{HeldPiece, Piece};
pub use scoring::{calculate_score, ScoreResult};
pub use shape::Shape;
pub use snapshot::GameSnapshot;
