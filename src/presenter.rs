//! Presentation signals
//!
//! The controller reports what changed through [`Presenter`]; front ends
//! implement it to redraw. [`RenderedBoard`] is a presenter that simply
//! remembers the last rendered state of every cell.

use crate::core::CELL_COUNT;

/// Receiver for board updates
///
/// Every method has a no-op default so presenters implement only what
/// they draw.
pub trait Presenter {
    /// Cell `index` now shows `content` with the given mark
    fn on_cell_rendered(&mut self, _index: usize, _content: &str, _marked: bool) {}

    /// A toggle left at least one line fully marked
    fn on_win(&mut self) {}

    /// The board was discarded and a new one is about to be rendered
    fn on_board_replaced(&mut self) {}
}

/// Presenter that ignores every signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Last rendered state of one cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCell {
    pub content: String,
    pub marked: bool,
}

/// Presenter that keeps a copy of what is on screen
///
/// Also tracks the win overlay: shown on `on_win`, hidden when the board is
/// replaced or when the player closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBoard {
    cells: [RenderedCell; CELL_COUNT],
    overlay_visible: bool,
    wins_signalled: usize,
}

impl Default for RenderedBoard {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| RenderedCell::default()),
            overlay_visible: false,
            wins_signalled: 0,
        }
    }
}

impl RenderedBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cells(&self) -> &[RenderedCell; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&RenderedCell> {
        self.cells.get(index)
    }

    #[must_use]
    pub const fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Number of win signals received since creation
    #[must_use]
    pub const fn wins_signalled(&self) -> usize {
        self.wins_signalled
    }

    /// Close the win overlay
    pub fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }

    /// Re-open the win overlay (used to restore it after an export)
    pub fn show_overlay(&mut self) {
        self.overlay_visible = true;
    }
}

impl Presenter for RenderedBoard {
    fn on_cell_rendered(&mut self, index: usize, content: &str, marked: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            content.clone_into(&mut cell.content);
            cell.marked = marked;
        }
    }

    fn on_win(&mut self) {
        self.wins_signalled += 1;
        self.overlay_visible = true;
    }

    fn on_board_replaced(&mut self) {
        self.overlay_visible = false;
    }
}
