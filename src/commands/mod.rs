//! Command implementations

pub mod board;
pub mod export;
pub mod simple;

pub use board::{BoardAction, BoardReport, run_board_action};
pub use export::{export_view, run_export};
pub use simple::run_simple;

use crate::controller::BoardController;
use crate::presenter::Presenter;
use crate::storage::{FileStore, PersistenceStore};
use crate::wordlists::WordSource;
use std::path::PathBuf;

/// Where a session reads its inputs and keeps its saved board
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub config_path: PathBuf,
    pub words: WordSource,
    pub data_dir: PathBuf,
}

impl SessionOptions {
    /// Open the saved-state store and initialize a controller
    pub fn open(&self, presenter: &mut dyn Presenter) -> BoardController<FileStore> {
        let store = PersistenceStore::new(FileStore::new(&self.data_dir));
        BoardController::initialize(&self.config_path, self.words.clone(), store, presenter)
    }
}
