//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, Direction, InputMode, Message, MessageStyle, run_tui};
