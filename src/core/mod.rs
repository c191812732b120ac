//! Core domain types for bingo
//!
//! This module contains the board model, board generation and win detection.
//! Everything here is pure apart from the random source used by the generator,
//! and has no dependency on storage or any user interface.

mod board;
pub mod generator;
mod win;

pub use board::{
    Board, CELL_COUNT, DEFAULT_FREE_LABEL, FREE_INDEX, GRID_SIZE, index_of, position_of,
};
pub use generator::{PICKS_NEEDED, generate, generate_with};
pub use win::{Line, has_win, winning_lines};
