//! Presentation of a `GameState`.
//!
//! A view shows the sign, then either the grid with the instructions
//! below it, or the win banner with the play-again prompt. It holds no
//! game logic: each cell is drawn from a single boolean.

use std::fmt;

use crate::core::GameState;

/// Title shown above every board.
pub const SIGN: &str = "Lights Out";

/// Shown below the grid while the game is in progress.
pub const INSTRUCTIONS: &str = "Instructions:\n\
    Select a box to switch it.\n\
    Surrounding boxes will also switch.\n\
    Switch all the boxes off to win!";

/// Shown instead of the grid once the board is solved.
pub const WIN_BANNER: &str = "You Win!";

/// Prompt offered next to the win banner.
pub const PLAY_AGAIN: &str = "Play Again! (type \"restart\")";

/// Something that can draw a game state.
pub trait BoardView {
    /// Render `state` to text.
    fn render(&self, state: &GameState) -> String;
}

/// Plain-text view with a row and column ruler.
#[derive(Clone, Debug)]
pub struct TextView {
    lit: char,
    unlit: char,
}

impl Default for TextView {
    fn default() -> Self {
        Self { lit: 'O', unlit: '.' }
    }
}

impl TextView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom glyphs for lit and unlit cells.
    #[must_use]
    pub fn with_glyphs(mut self, lit: char, unlit: char) -> Self {
        self.lit = lit;
        self.unlit = unlit;
        self
    }

    fn glyph(&self, lit: bool) -> char {
        if lit {
            self.lit
        } else {
            self.unlit
        }
    }
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// A game state paired with the view that draws it.
struct Rendered<'a> {
    view: &'a TextView,
    state: &'a GameState,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SIGN}")?;
        writeln!(f)?;

        if self.state.has_won() {
            writeln!(f, "{WIN_BANNER}")?;
            return writeln!(f, "{PLAY_AGAIN}");
        }

        let grid = self.state.grid();
        let label = digits(grid.rows().saturating_sub(1));
        let cell = digits(grid.cols().saturating_sub(1));

        write!(f, "{:label$} ", "")?;
        for col in 0..grid.cols() {
            write!(f, " {col:>cell$}")?;
        }
        writeln!(f)?;

        for (row, cells) in grid.iter_rows().enumerate() {
            write!(f, "{row:>label$} ")?;
            for lit in cells {
                write!(f, " {:>cell$}", self.view.glyph(lit))?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "{INSTRUCTIONS}")
    }
}

impl BoardView for TextView {
    fn render(&self, state: &GameState) -> String {
        Rendered { view: self, state }.to_string()
    }
}
