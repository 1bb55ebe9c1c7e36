//! Core value types: coordinates, grid, game state, configuration, RNG.
//!
//! Everything here is plain data with no I/O. The engine in `rules`
//! owns one of each and drives them.

pub mod coord;
pub mod grid;
pub mod state;
pub mod config;
pub mod rng;

pub use coord::Coord;
pub use grid::{Flipped, Grid};
pub use state::{GameState, Phase};
pub use config::{
    BoardConfig, DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS,
};
pub use rng::{GameRng, GameRngState};
