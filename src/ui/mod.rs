//! Presentation side: views, command parsing and the play session.
//!
//! Nothing here mutates a board directly. Views read a `GameState`;
//! commands are forwarded to `BoardEngine`.

pub mod view;
pub mod command;
pub mod session;

pub use view::{BoardView, TextView, INSTRUCTIONS, PLAY_AGAIN, SIGN, WIN_BANNER};
pub use command::{Command, HELP};
pub use session::{run_session, SessionSummary};
