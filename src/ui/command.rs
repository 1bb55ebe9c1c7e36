//! Player input: one command per line.

use std::str::FromStr;

use crate::core::Coord;
use crate::error::LightsOutError;

/// Help text listing every command.
pub const HELP: &str = "Commands:\n\
    \x20 <row> <col>   switch the box at row, col (also row-col or row,col)\n\
    \x20 restart, r    start a new board\n\
    \x20 help, h, ?    show this list\n\
    \x20 quit, q       leave the game";

/// A parsed player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Press the box at a coordinate.
    Toggle(Coord),
    /// Draw a new board.
    Restart,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = LightsOutError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let unknown = || LightsOutError::UnknownCommand(trimmed.to_string());

        let command = match trimmed.to_ascii_lowercase().as_str() {
            "restart" | "r" | "play again" | "p" => Command::Restart,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => {
                let parts: Vec<&str> = trimmed
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|part| !part.is_empty())
                    .collect();
                let coord = match parts.as_slice() {
                    // Cell key form, "row-col".
                    [key] => key.parse::<Coord>().map_err(|_| unknown())?,
                    [row, col] => match (row.parse(), col.parse()) {
                        (Ok(row), Ok(col)) => Coord::new(row, col),
                        _ => return Err(unknown()),
                    },
                    _ => return Err(unknown()),
                };
                Command::Toggle(coord)
            }
        };
        Ok(command)
    }
}
