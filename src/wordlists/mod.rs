//! Word pools for board generation
//!
//! Provides the embedded default list and loaders for external word files.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{WordPool, WordSource};
