//! Board lifecycle
//!
//! [`BoardController`] owns the active board together with its configuration,
//! word pool and saved-state slot. Front ends call its methods in response to
//! input and receive updates through a [`Presenter`].

use crate::config::Configuration;
use crate::core::{
    Board, CELL_COUNT, DEFAULT_FREE_LABEL, FREE_INDEX, Line, generate, winning_lines,
};
use crate::presenter::Presenter;
use crate::storage::{KeyValueStore, PersistenceStore};
use crate::wordlists::{WordPool, WordSource};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Rejected controller request; never fatal to play
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("cell index {0} is out of range (expected 0-{max})", max = CELL_COUNT - 1)]
    IndexOutOfRange(usize),
}

/// Owns the active board and keeps the saved slot in step with it
pub struct BoardController<S> {
    config: Configuration,
    source: WordSource,
    pool: WordPool,
    board: Board,
    store: PersistenceStore<S>,
    won: bool,
}

impl<S: KeyValueStore> BoardController<S> {
    /// Start a session
    ///
    /// Runs in order: configuration from `config_path` (defaults if missing
    /// or invalid), then the word pool from `source` (empty if unreadable),
    /// then restore the saved board or generate and save a new one.
    pub fn initialize(
        config_path: &Path,
        source: WordSource,
        store: PersistenceStore<S>,
        presenter: &mut dyn Presenter,
    ) -> Self {
        let config = Configuration::load_or_default(config_path);
        Self::with_config(config, source, store, presenter)
    }

    /// Start a session with an already resolved configuration
    pub fn with_config(
        config: Configuration,
        source: WordSource,
        mut store: PersistenceStore<S>,
        presenter: &mut dyn Presenter,
    ) -> Self {
        let pool = source.load();

        let board = if let Some(board) = store.load() {
            info!("restored saved board");
            board
        } else {
            let board = generate(pool.words(), config.free_label());
            persist(&mut store, &board);
            info!(words = pool.len(), "generated new board");
            board
        };

        // A restored board may already hold a line; that is not a new win
        let won = board.has_win();
        let controller = Self {
            config,
            source,
            pool,
            board,
            store,
            won,
        };
        controller.render_all(presenter);
        controller
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }

    /// Whether the board currently has a complete line
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Every complete line on the board
    #[must_use]
    pub fn winning_lines(&self) -> Vec<Line> {
        winning_lines(self.board.marks())
    }

    /// Text shown for cell `index`
    ///
    /// The free cell shows the configured label when its saved content is
    /// empty or the stock `FREE` label.
    #[must_use]
    pub fn display_content(&self, index: usize) -> &str {
        let content = self.board.content(index).unwrap_or_default();
        if index == FREE_INDEX && (content.is_empty() || content == DEFAULT_FREE_LABEL) {
            self.config.free_label()
        } else {
            content
        }
    }

    /// Flip the mark on cell `index`, save, and check for a win
    ///
    /// Returns whether the board has a complete line after the toggle. Every
    /// toggle that leaves a complete line signals `on_win`, so a board can
    /// win repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::IndexOutOfRange`] if `index` is not a cell.
    pub fn toggle(
        &mut self,
        index: usize,
        presenter: &mut dyn Presenter,
    ) -> Result<bool, ControllerError> {
        let marked = self
            .board
            .toggle(index)
            .ok_or(ControllerError::IndexOutOfRange(index))?;
        debug!(index, marked, "toggled cell");

        persist(&mut self.store, &self.board);
        presenter.on_cell_rendered(index, self.display_content(index), marked);

        self.won = self.board.has_win();
        if self.won {
            info!(lines = ?self.winning_lines(), "bingo");
            presenter.on_win();
        }
        Ok(self.won)
    }

    /// Replace the board with a fresh one from the current pool
    pub fn new_board(&mut self, presenter: &mut dyn Presenter) {
        self.board = generate(self.pool.words(), self.config.free_label());
        self.won = false;
        persist(&mut self.store, &self.board);
        info!("started new board");

        presenter.on_board_replaced();
        self.render_all(presenter);
    }

    /// Reload the word pool from its source, then start a new board
    pub fn shuffle(&mut self, presenter: &mut dyn Presenter) {
        self.pool = self.source.load();
        self.new_board(presenter);
    }

    /// Delete the saved board, then start a new board
    pub fn clear_saved(&mut self, presenter: &mut dyn Presenter) {
        match self.store.clear() {
            Ok(()) => info!("cleared saved board"),
            Err(e) => warn!(error = %e, "could not clear saved board"),
        }
        self.new_board(presenter);
    }

    fn render_all(&self, presenter: &mut dyn Presenter) {
        for index in 0..CELL_COUNT {
            presenter.on_cell_rendered(
                index,
                self.display_content(index),
                self.board.is_marked(index),
            );
        }
    }
}

/// Save `board`, logging instead of failing
fn persist<S: KeyValueStore>(store: &mut PersistenceStore<S>, board: &Board) {
    if let Err(e) = store.save(board) {
        warn!(error = %e, "could not save bingo state");
    }
}
