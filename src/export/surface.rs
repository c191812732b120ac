//! Snapshot of the rendered board handed to exporters

use crate::config::{Colors, Configuration};
use crate::core::{CELL_COUNT, FREE_INDEX};
use crate::presenter::{RenderedBoard, RenderedCell};

/// Everything an exporter needs to draw the board as shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSurface {
    pub title: String,
    pub header_image: Option<String>,
    pub colors: Colors,
    pub cells: Vec<RenderedCell>,
}

impl BoardSurface {
    /// Capture the presenter's cells with the configured title and palette
    #[must_use]
    pub fn capture(config: &Configuration, view: &RenderedBoard) -> Self {
        Self {
            title: config.board_title.clone(),
            header_image: config.header_image().map(str::to_string),
            colors: config.colors.clone(),
            cells: view.cells().to_vec(),
        }
    }

    /// Whether the surface holds a full board with something rendered on it
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.cells.len() == CELL_COUNT && self.cells.iter().any(|c| !c.content.is_empty())
    }

    #[must_use]
    pub fn is_free(index: usize) -> bool {
        index == FREE_INDEX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Presenter;

    #[test]
    fn capture_copies_config_and_cells() {
        let config = Configuration {
            board_title: "Team".to_string(),
            header_image: "logo.png".to_string(),
            ..Configuration::default()
        };
        let mut view = RenderedBoard::new();
        view.on_cell_rendered(12, "FREE", true);

        let surface = BoardSurface::capture(&config, &view);

        assert_eq!(surface.title, "Team");
        assert_eq!(surface.header_image.as_deref(), Some("logo.png"));
        assert_eq!(surface.cells.len(), CELL_COUNT);
        assert!(surface.cells[12].marked);
        assert!(surface.is_rendered());
    }

    #[test]
    fn blank_view_is_not_rendered() {
        let surface = BoardSurface::capture(&Configuration::default(), &RenderedBoard::new());
        assert!(!surface.is_rendered());
        assert_eq!(surface.header_image, None);
    }
}
