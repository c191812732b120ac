//! Board export
//!
//! Exporters turn a [`BoardSurface`] (a snapshot of what is currently
//! rendered) into a single-page document. The board model is never consulted
//! directly: whatever the presenter shows is what gets exported.

mod page;
mod surface;
mod svg;

pub use page::{PageLayout, Placement};
pub use surface::BoardSurface;
pub use svg::{DEFAULT_EXPORT_FILE, SvgExporter};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while producing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("board not found: nothing has been rendered yet")]
    NotRendered,

    #[error("could not write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not format export document")]
    Format(#[from] std::fmt::Error),
}

/// Writes the rendered board to a single-page document
pub trait Exporter {
    /// Export `surface`, returning the path of the written document
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the surface is empty or the document
    /// cannot be written.
    fn export(&self, surface: &BoardSurface) -> Result<PathBuf, ExportError>;
}
