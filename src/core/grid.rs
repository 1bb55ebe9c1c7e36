//! The board: a rectangle of lights.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a grid to
//! derive the next state is O(1) and only touched chunks are copied.
//!
//! For this board:
//!
//! ```text
//! . . .
//! O O .     (. is off, O is on)
//! . . .
//! ```
//!
//! `Grid::from_rows` takes `[[f, f, f], [t, t, f], [f, f, f]]`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;
use super::rng::GameRng;
use crate::error::{LightsOutError, Result};

/// Cells flipped by one toggle: the pressed cell first, then its neighbors.
pub type Flipped = SmallVec<[Coord; 5]>;

/// A `rows x cols` grid of on/off lights.
///
/// Every constructor, deserialization included, guarantees
/// `cells.len() == rows * cols`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<bool>,
}

#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = LightsOutError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let expected = raw
            .rows
            .checked_mul(raw.cols)
            .ok_or(LightsOutError::BoardTooLarge {
                rows: raw.rows,
                cols: raw.cols,
                max: usize::MAX,
            })?;
        if raw.cells.len() != expected {
            return Err(LightsOutError::ShapeMismatch {
                rows: raw.rows,
                cols: raw.cols,
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: Vector::from(raw.cells),
        })
    }
}

impl Grid {
    /// A grid with every light off.
    #[must_use]
    pub fn unlit(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, false)
    }

    /// A grid with every light on.
    #[must_use]
    pub fn lit(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, true)
    }

    fn filled(rows: usize, cols: usize, value: bool) -> Self {
        Self {
            rows,
            cols,
            cells: std::iter::repeat(value).take(rows * cols).collect(),
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// All rows must have the length of the first one, and there must be
    /// at least one non-empty row.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(LightsOutError::EmptyBoard {
                rows: n_rows,
                cols: n_cols,
            });
        }

        let mut cells = Vector::new();
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(LightsOutError::RaggedRow {
                    row: index,
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Light each cell independently with probability `chance`.
    ///
    /// Cells are drawn in row-major order, one draw per cell.
    pub fn random(rows: usize, cols: usize, chance: f64, rng: &mut GameRng) -> Self {
        Self {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| rng.chance(chance)).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    /// Light state at `coord`, or `None` off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).and_then(|i| self.cells.get(i).copied())
    }

    /// Flip a single cell.
    ///
    /// Returns false and leaves the grid alone when `coord` is off the board.
    pub fn flip(&mut self, coord: Coord) -> bool {
        match self.index(coord).and_then(|i| self.cells.get_mut(i)) {
            Some(cell) => {
                *cell = !*cell;
                true
            }
            None => false,
        }
    }

    /// Flip `coord` and each of its orthogonal neighbors that is on the board.
    ///
    /// Corner cells flip 3 lights, edge cells 4, interior cells 5. A
    /// `coord` off the board is rejected without touching any cell.
    pub fn toggle_around(&mut self, coord: Coord) -> Result<Flipped> {
        if !self.contains(coord) {
            return Err(LightsOutError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut flipped = Flipped::new();
        for cell in std::iter::once(coord).chain(coord.neighbors()) {
            if self.flip(cell) {
                flipped.push(cell);
            }
        }
        Ok(flipped)
    }

    /// True when every light is off.
    #[must_use]
    pub fn is_all_off(&self) -> bool {
        self.cells.iter().all(|lit| !lit)
    }

    /// Number of lights currently on.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|lit| **lit).count()
    }

    /// Iterate over every row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Iterate one row of cells, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        let (start, len) = if row < self.rows {
            (row * self.cols, self.cols)
        } else {
            (0, 0)
        };
        self.cells.iter().skip(start).take(len).copied()
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(|row| row.collect()).collect()
    }
}
