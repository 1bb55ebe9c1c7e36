//! The board engine: initialization, toggling, win tracking, restart.
//!
//! The engine is the only place game state changes. Views in `ui` only
//! read `GameState` and forward commands.

pub mod engine;

pub use engine::{BoardEngine, ToggleOutcome};
