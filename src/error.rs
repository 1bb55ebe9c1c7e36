//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::core::Coord;

/// Errors raised by board construction, toggling and command parsing.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LightsOutError {
    /// A board needs at least one row and one column.
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    /// The start-on probability is not a finite value in [0, 1].
    #[error("chance a light starts on must be within [0, 1], got {0}")]
    InvalidChance(f64),

    /// The primary cell of a toggle lies outside the board.
    #[error("cell {coord} is outside the {rows}x{cols} board")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    /// Won boards accept no toggles until restarted.
    #[error("the game is already won; restart to play again")]
    AlreadyWon,

    /// Cell storage does not match the declared dimensions.
    #[error("a {rows}x{cols} grid needs {expected} cells, got {actual}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    /// Row `row` has a different length than the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    /// The cell count overflows or exceeds the supported maximum.
    #[error("a {rows}x{cols} board is too large, at most {max} cells are supported")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },

    /// A cell key that is not of the form `row-col`.
    #[error("invalid cell key {0:?}, expected \"row-col\"")]
    InvalidCoord(String),

    /// An input line that is not a known command.
    #[error("unknown command {0:?}, type \"help\" for the list of commands")]
    UnknownCommand(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LightsOutError>;
