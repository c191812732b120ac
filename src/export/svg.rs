//! SVG page exporter

use super::page::PageLayout;
use super::surface::BoardSurface;
use super::{ExportError, Exporter};
use crate::core::{GRID_SIZE, position_of};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name used when no output path is given
pub const DEFAULT_EXPORT_FILE: &str = "bingo-board.svg";

// Board image geometry, in image pixels
const CELL: f64 = 120.0;
const GAP: f64 = 8.0;
const PADDING: f64 = 16.0;
const TITLE_HEIGHT: f64 = 56.0;
const HEADER_IMAGE_HEIGHT: f64 = 72.0;
const FONT_SIZE: f64 = 15.0;
const LINE_HEIGHT: f64 = 18.0;
const WRAP_COLUMNS: usize = 14;
const MAX_LINES: usize = 5;

/// Draws the board onto one page of an SVG document
#[derive(Debug, Clone)]
pub struct SvgExporter {
    output: PathBuf,
    page: PageLayout,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_FILE)
    }
}

impl SvgExporter {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(output: P) -> Self {
        Self {
            output: output.into(),
            page: PageLayout::default(),
        }
    }

    #[must_use]
    pub const fn with_page(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Render `surface` to an SVG document string
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotRendered`] for an empty surface.
    pub fn render(&self, surface: &BoardSurface) -> Result<String, ExportError> {
        if !surface.is_rendered() {
            return Err(ExportError::NotRendered);
        }

        let grid = CELL * GRID_SIZE as f64 + GAP * (GRID_SIZE - 1) as f64;
        let header = if surface.header_image.is_some() {
            HEADER_IMAGE_HEIGHT
        } else {
            0.0
        };
        let image_width = grid + PADDING * 2.0;
        let image_height = PADDING * 2.0 + header + TITLE_HEIGHT + grid;

        let placed = self.page.fit(image_width, image_height);
        let scale = placed.scale_from(image_width);
        let colors = &surface.colors;

        let mut svg = String::new();
        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}pt" height="{h}pt" viewBox="0 0 {w} {h}">"#,
            w = self.page.width,
            h = self.page.height,
        )?;
        writeln!(svg, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        writeln!(
            svg,
            r#"<g transform="translate({:.2} {:.2}) scale({scale:.4})">"#,
            placed.x, placed.y
        )?;
        writeln!(
            svg,
            r#"<rect width="{image_width}" height="{image_height}" rx="12" fill="{}"/>"#,
            escape(&colors.bg)
        )?;

        let mut top = PADDING;
        if let Some(href) = &surface.header_image {
            writeln!(
                svg,
                r#"<image href="{}" x="{PADDING}" y="{top}" width="{grid}" height="{HEADER_IMAGE_HEIGHT}" preserveAspectRatio="xMidYMid meet"/>"#,
                escape(href)
            )?;
            top += HEADER_IMAGE_HEIGHT;
        }

        writeln!(
            svg,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="32" font-weight="bold" text-anchor="middle" fill="{}">{}</text>"#,
            image_width / 2.0,
            top + TITLE_HEIGHT * 0.7,
            escape(&colors.accent),
            escape(&surface.title)
        )?;
        top += TITLE_HEIGHT;

        for (index, cell) in surface.cells.iter().enumerate() {
            let (row, col) = position_of(index);
            let x = PADDING + col as f64 * (CELL + GAP);
            let y = top + row as f64 * (CELL + GAP);
            let fill = if cell.marked {
                &colors.marked
            } else {
                &colors.card
            };
            let stroke_width = if BoardSurface::is_free(index) { 3 } else { 1 };

            writeln!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{CELL}" height="{CELL}" rx="8" fill="{}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                escape(fill),
                escape(&colors.accent)
            )?;

            let lines = wrap_label(&cell.content, WRAP_COLUMNS, MAX_LINES);
            let first_baseline = y + CELL / 2.0 - LINE_HEIGHT * (lines.len() as f64 - 1.0) / 2.0
                + FONT_SIZE / 3.0;
            write!(
                svg,
                r#"<text x="{}" font-family="sans-serif" font-size="{FONT_SIZE}" text-anchor="middle" fill="{}">"#,
                x + CELL / 2.0,
                escape(&colors.text)
            )?;
            for (i, line) in lines.iter().enumerate() {
                write!(
                    svg,
                    r#"<tspan x="{}" y="{}">{}</tspan>"#,
                    x + CELL / 2.0,
                    first_baseline + LINE_HEIGHT * i as f64,
                    escape(line)
                )?;
            }
            writeln!(svg, "</text>")?;
        }

        writeln!(svg, "</g>")?;
        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

impl Exporter for SvgExporter {
    fn export(&self, surface: &BoardSurface) -> Result<PathBuf, ExportError> {
        let document = self.render(surface)?;
        fs::write(&self.output, document).map_err(|source| ExportError::Io {
            path: self.output.clone(),
            source,
        })?;

        info!(path = %self.output.display(), "exported board");
        Ok(self.output.clone())
    }
}

/// Greedy word wrap; lines past `max_lines` are folded into an ellipsis
fn wrap_label(text: &str, columns: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > columns && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
