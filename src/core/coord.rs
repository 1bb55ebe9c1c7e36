//! Cell coordinates.
//!
//! A coordinate is a `(row, col)` pair. Its composite key form is
//! `"row-col"`, the same key a view attaches to each rendered cell so a
//! click can be forwarded back to the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::LightsOutError;

/// A cell position on the board, rows first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbors in the order up, down, left, right.
    ///
    /// Candidates that would fall outside `usize` are left out. Upper
    /// bounds depend on the board, so callers still check those.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Coord; 4]> {
        let mut out = SmallVec::new();
        if let Some(up) = self.row.checked_sub(1) {
            out.push(Coord::new(up, self.col));
        }
        if let Some(down) = self.row.checked_add(1) {
            out.push(Coord::new(down, self.col));
        }
        if let Some(left) = self.col.checked_sub(1) {
            out.push(Coord::new(self.row, left));
        }
        if let Some(right) = self.col.checked_add(1) {
            out.push(Coord::new(self.row, right));
        }
        out
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = LightsOutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LightsOutError::InvalidCoord(s.to_string());
        let (row, col) = s.trim().split_once('-').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}
