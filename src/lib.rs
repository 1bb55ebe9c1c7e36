//! # lights-out
//!
//! Engine and terminal front-end for the Lights Out puzzle.
//!
//! Pressing a cell flips it and its four orthogonal neighbors; the board
//! is solved once every light is off.
//!
//! ## Design
//!
//! 1. **Caller-owned state**: One `BoardEngine` per session holds the
//!    configuration, RNG and `GameState`. There are no globals.
//!
//! 2. **Derived win flag**: `GameState::has_won` is recomputed from the
//!    grid after every change and is never stored independently.
//!
//! 3. **Single convention**: Cells are addressed `(row, col)` everywhere,
//!    so non-square boards behave like square ones.
//!
//! ## Modules
//!
//! - `core`: Coordinates, grid, game state, configuration, RNG
//! - `rules`: The board engine (initialize, toggle, restart)
//! - `ui`: Views, command parsing and the line-driven session
//! - `error`: The crate error type
//!
//! ```
//! use lights_out::{BoardConfig, BoardEngine, Coord};
//!
//! let mut engine = BoardEngine::with_seed(BoardConfig::new(1, 1, 1.0), 7).unwrap();
//! let outcome = engine.toggle_around(Coord::new(0, 0)).unwrap();
//! assert!(outcome.won);
//! assert!(engine.state().has_won());
//! ```

pub mod core;
pub mod rules;
pub mod ui;
pub mod error;

pub use crate::core::{
    BoardConfig, Coord, Flipped, GameRng, GameRngState, GameState, Grid, Phase,
};
pub use crate::rules::{BoardEngine, ToggleOutcome};
pub use crate::ui::{run_session, BoardView, Command, SessionSummary, TextView};
pub use crate::error::{LightsOutError, Result};
