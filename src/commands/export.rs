//! Export command

use super::SessionOptions;
use crate::config::Configuration;
use crate::export::{BoardSurface, ExportError, Exporter};
use crate::presenter::RenderedBoard;
use std::path::PathBuf;

/// Export what `view` currently shows
///
/// The win overlay is hidden while the surface is captured and restored
/// afterwards, whether or not the export succeeds.
///
/// # Errors
///
/// Returns the exporter's error if the document could not be produced.
pub fn export_view(
    config: &Configuration,
    view: &mut RenderedBoard,
    exporter: &dyn Exporter,
) -> Result<PathBuf, ExportError> {
    let overlay_was_visible = view.overlay_visible();
    view.hide_overlay();

    let result = exporter.export(&BoardSurface::capture(config, view));

    if overlay_was_visible {
        view.show_overlay();
    }
    result
}

/// Open the saved board and export it
///
/// # Errors
///
/// Returns the exporter's error if the document could not be produced.
pub fn run_export(
    options: &SessionOptions,
    exporter: &dyn Exporter,
) -> Result<PathBuf, ExportError> {
    let mut view = RenderedBoard::new();
    let controller = options.open(&mut view);
    export_view(controller.config(), &mut view, exporter)
}
