//! One-shot board commands
//!
//! Each command opens the saved board, applies a single action and reports
//! the resulting board.

use super::SessionOptions;
use crate::controller::{BoardController, ControllerError};
use crate::core::Line;
use crate::presenter::{RenderedBoard, RenderedCell};
use crate::storage::KeyValueStore;

/// Action applied by a one-shot command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Restore (or create) the board and show it
    Show,
    /// Flip one cell
    Toggle(usize),
    /// Generate a new board from the current pool
    New,
    /// Reload the word list, then generate a new board
    Shuffle,
    /// Delete the saved board, then generate a new board
    Clear,
}

/// Snapshot of a board for printing
#[derive(Debug, Clone)]
pub struct BoardReport {
    pub title: String,
    pub header_image: Option<String>,
    pub cells: Vec<RenderedCell>,
    pub winning_lines: Vec<Line>,
    /// Whether this command's action produced a win signal
    pub win_signalled: bool,
    pub pool_size: usize,
}

impl BoardReport {
    /// Build a report from the controller and what its presenter rendered
    #[must_use]
    pub fn new<S: KeyValueStore>(controller: &BoardController<S>, view: &RenderedBoard) -> Self {
        let config = controller.config();
        Self {
            title: config.board_title.clone(),
            header_image: config.header_image().map(str::to_string),
            cells: view.cells().to_vec(),
            winning_lines: controller.winning_lines(),
            win_signalled: view.wins_signalled() > 0,
            pool_size: controller.pool().len(),
        }
    }

    /// Whether `index` lies on a complete line
    #[must_use]
    pub fn on_winning_line(&self, index: usize) -> bool {
        self.winning_lines.iter().any(|line| line.contains(index))
    }
}

/// Open the session, apply `action`, and report the board
///
/// # Errors
///
/// Returns an error if a toggle index is not a cell.
pub fn run_board_action(
    options: &SessionOptions,
    action: BoardAction,
) -> Result<BoardReport, ControllerError> {
    let mut view = RenderedBoard::new();
    let mut controller = options.open(&mut view);
    apply(&mut controller, &mut view, action)?;
    Ok(BoardReport::new(&controller, &view))
}

fn apply<S: KeyValueStore>(
    controller: &mut BoardController<S>,
    view: &mut RenderedBoard,
    action: BoardAction,
) -> Result<(), ControllerError> {
    match action {
        BoardAction::Show => {}
        BoardAction::Toggle(index) => {
            controller.toggle(index, view)?;
        }
        BoardAction::New => controller.new_board(view),
        BoardAction::Shuffle => controller.shuffle(view),
        BoardAction::Clear => controller.clear_saved(view),
    }
    Ok(())
}
