//! Bingo Board
//!
//! A 5×5 bingo board dealt from a word list, with a free center cell, win
//! detection over rows, columns and diagonals, saved state that survives
//! restarts, and a one-page document export.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bingo_board::config::Configuration;
//! use bingo_board::controller::BoardController;
//! use bingo_board::presenter::RenderedBoard;
//! use bingo_board::storage::{MemoryStore, PersistenceStore};
//! use bingo_board::wordlists::WordSource;
//!
//! let mut view = RenderedBoard::new();
//! let mut controller = BoardController::with_config(
//!     Configuration::default(),
//!     WordSource::Embedded,
//!     PersistenceStore::new(MemoryStore::new()),
//!     &mut view,
//! );
//!
//! for index in [0, 6, 18, 24] {
//!     controller.toggle(index, &mut view).unwrap();
//! }
//! assert!(controller.is_won());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Display configuration
pub mod config;

// Saved board state
pub mod storage;

// Rendering callbacks
pub mod presenter;

// Board lifecycle
pub mod controller;

// Page document export
pub mod export;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
