//! Line-driven play session.
//!
//! Reads commands from any `BufRead`, forwards them to the engine and
//! writes the rendered board to any `Write` after every change. Engine
//! and parse errors are reported on their own line; they never end the
//! session. Only `quit` or end of input does.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use super::command::{Command, HELP};
use super::view::BoardView;
use crate::rules::BoardEngine;

/// Counters reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Boards solved.
    pub wins: u32,
    /// Boards drawn, the first one included.
    pub games_played: u32,
}

/// Play until `quit` or end of input.
pub fn run_session<V, R, W>(
    engine: &mut BoardEngine,
    view: &V,
    input: R,
    mut output: W,
) -> io::Result<SessionSummary>
where
    V: BoardView + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    write!(output, "{}", view.render(engine.state()))?;
    writeln!(output, "Type \"help\" for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!("rejected input {line:?}");
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Toggle(coord) => match engine.toggle_around(coord) {
                Ok(outcome) => {
                    if outcome.won {
                        summary.wins += 1;
                    }
                    write!(output, "{}", view.render(engine.state()))?;
                }
                Err(err) => {
                    warn!("toggle at {coord} refused: {err}");
                    writeln!(output, "{err}")?;
                }
            },
            Command::Restart => {
                let state = engine.restart();
                write!(output, "{}", view.render(state))?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    output.flush()?;
    summary.games_played = engine.games_played();
    Ok(summary)
}
