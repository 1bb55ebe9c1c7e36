//! Game state: the grid plus the win flag derived from it.
//!
//! ## Phases
//!
//! - `InProgress`: at least one light is on, the grid takes toggles
//! - `Won`: every light is off, only a restart moves the game on
//!
//! `has_won` is recomputed whenever the grid changes, including on
//! deserialization, so it can never drift from the cells.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::grid::{Flipped, Grid};
use crate::error::Result;

/// Which of the two modes a game is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Lights remain on.
    InProgress,
    /// All lights are off.
    Won,
}

/// A board and whether it is solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGameState")]
pub struct GameState {
    grid: Grid,
    has_won: bool,
}

#[derive(Deserialize)]
struct RawGameState {
    grid: Grid,
}

impl From<RawGameState> for GameState {
    fn from(raw: RawGameState) -> Self {
        Self::new(raw.grid)
    }
}

impl GameState {
    /// Wrap a grid, computing the win flag from it.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let has_won = grid.is_all_off();
        Self { grid, has_won }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True iff every cell of the grid is off.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.has_won {
            Phase::Won
        } else {
            Phase::InProgress
        }
    }

    /// Toggle around `coord` in place and refresh the win flag.
    pub(crate) fn toggle_around(&mut self, coord: Coord) -> Result<Flipped> {
        let flipped = self.grid.toggle_around(coord)?;
        self.has_won = self.grid.is_all_off();
        Ok(flipped)
    }

    /// The state that results from toggling around `coord`.
    ///
    /// `self` is left untouched; the grid clone is O(1).
    pub fn toggled_around(&self, coord: Coord) -> Result<(GameState, Flipped)> {
        let mut next = self.clone();
        let flipped = next.toggle_around(coord)?;
        Ok((next, flipped))
    }
}
