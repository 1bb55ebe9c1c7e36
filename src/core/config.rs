//! Board configuration.
//!
//! A `BoardConfig` fixes the board size and how likely each light is to
//! start lit. The host builds one, the engine validates it once and keeps
//! it unchanged for as long as the engine lives.

use serde::{Deserialize, Serialize};

use crate::error::{LightsOutError, Result};

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 5;
/// Default number of columns.
pub const DEFAULT_COLS: usize = 5;
/// Default chance that any light starts lit.
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.25;
/// Largest board, in cells, a configuration may ask for.
pub const MAX_CELLS: usize = 1 << 20;

/// Per-game board parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (at least 1).
    pub n_rows: usize,

    /// Number of columns (at least 1).
    pub n_cols: usize,

    /// Probability in `[0, 1]` that a cell starts lit.
    pub chance_light_starts_on: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            n_rows: DEFAULT_ROWS,
            n_cols: DEFAULT_COLS,
            chance_light_starts_on: DEFAULT_CHANCE_LIGHT_STARTS_ON,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with explicit values.
    #[must_use]
    pub fn new(n_rows: usize, n_cols: usize, chance_light_starts_on: f64) -> Self {
        Self {
            n_rows,
            n_cols,
            chance_light_starts_on,
        }
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, n_rows: usize) -> Self {
        self.n_rows = n_rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_cols(mut self, n_cols: usize) -> Self {
        self.n_cols = n_cols;
        self
    }

    /// Set the chance that a light starts lit.
    #[must_use]
    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance_light_starts_on = chance;
        self
    }

    /// Total number of cells, saturating at `usize::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.n_rows.saturating_mul(self.n_cols)
    }

    /// Check that the dimensions are positive, the board is at most
    /// `MAX_CELLS` cells and the chance is a probability.
    pub fn validate(&self) -> Result<()> {
        if self.n_rows == 0 || self.n_cols == 0 {
            return Err(LightsOutError::EmptyBoard {
                rows: self.n_rows,
                cols: self.n_cols,
            });
        }
        match self.n_rows.checked_mul(self.n_cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(LightsOutError::BoardTooLarge {
                    rows: self.n_rows,
                    cols: self.n_cols,
                    max: MAX_CELLS,
                })
            }
        }
        let chance = self.chance_light_starts_on;
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(LightsOutError::InvalidChance(chance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.n_rows, 5);
        assert_eq!(config.n_cols, 5);
        assert_eq!(config.chance_light_starts_on, 0.25);
        assert_eq!(config.cell_count(), 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::default()
            .with_rows(3)
            .with_cols(7)
            .with_chance(0.5);

        assert_eq!(config, BoardConfig::new(3, 7, 0.5));
        assert_eq!(config.cell_count(), 21);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            BoardConfig::new(0, 4, 0.5).validate(),
            Err(LightsOutError::EmptyBoard { rows: 0, cols: 4 })
        );
        assert_eq!(
            BoardConfig::new(4, 0, 0.5).validate(),
            Err(LightsOutError::EmptyBoard { rows: 4, cols: 0 })
        );
    }

    #[test]
    fn test_oversized_board_rejected() {
        let too_large = LightsOutError::BoardTooLarge {
            rows: usize::MAX,
            cols: 2,
            max: MAX_CELLS,
        };
        assert_eq!(BoardConfig::new(usize::MAX, 2, 0.0).validate(), Err(too_large));
        assert!(BoardConfig::new(1 << 11, 1 << 10, 0.5).validate().is_err());
        assert!(BoardConfig::new(1 << 10, 1 << 10, 0.5).validate().is_ok());
    }

    #[test]
    fn test_chance_bounds() {
        assert!(BoardConfig::new(2, 2, 0.0).validate().is_ok());
        assert!(BoardConfig::new(2, 2, 1.0).validate().is_ok());
        assert_eq!(
            BoardConfig::new(2, 2, -0.1).validate(),
            Err(LightsOutError::InvalidChance(-0.1))
        );
        assert_eq!(
            BoardConfig::new(2, 2, 1.01).validate(),
            Err(LightsOutError::InvalidChance(1.01))
        );
        assert!(BoardConfig::new(2, 2, f64::NAN).validate().is_err());
        assert!(BoardConfig::new(2, 2, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = BoardConfig::new(4, 6, 0.4);
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
