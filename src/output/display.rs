//! Display functions for command results

use super::formatters::{fit_cell, line_name};
use crate::commands::BoardReport;
use crate::core::{FREE_INDEX, GRID_SIZE, index_of};
use colored::Colorize;
use std::path::Path;

/// Width of one printed cell, in columns
const CELL_WIDTH: usize = 16;

/// Print the board as a grid
///
/// Marked cells are green, the free cell is yellow, and cells on a complete
/// line are bold.
pub fn print_board(report: &BoardReport) {
    let rule = "─".repeat((CELL_WIDTH + 3) * GRID_SIZE + 1);

    println!("\n{}", "═".repeat(rule.chars().count()).cyan());
    println!(" {}", report.title.bright_yellow().bold());
    if let Some(image) = &report.header_image {
        println!(" {}", format!("[{image}]").bright_black());
    }
    println!("{}", "═".repeat(rule.chars().count()).cyan());

    for row in 0..GRID_SIZE {
        let cells: Vec<String> = (0..GRID_SIZE)
            .map(|col| {
                let index = index_of(row, col);
                let cell = &report.cells[index];
                let text = fit_cell(&cell.content, CELL_WIDTH);

                let styled = if cell.marked {
                    text.black().on_green()
                } else if index == FREE_INDEX {
                    text.yellow()
                } else {
                    text.normal()
                };
                let styled = if report.on_winning_line(index) {
                    styled.bold()
                } else {
                    styled
                };
                format!(" {styled} ")
            })
            .collect();

        println!("{}", rule.bright_black());
        println!("│{}│", cells.join("│"));
        let indices: Vec<String> = (0..GRID_SIZE)
            .map(|col| format!(" {:<width$} ", index_of(row, col), width = CELL_WIDTH))
            .collect();
        println!("│{}│", indices.join("│").bright_black());
    }
    println!("{}", rule.bright_black());

    let marked = report.cells.iter().filter(|c| c.marked).count();
    println!("  Marked: {marked}/{}   Words: {}", report.cells.len(), report.pool_size);

    if !report.winning_lines.is_empty() {
        let lines: Vec<String> = report.winning_lines.iter().map(|l| line_name(*l)).collect();
        println!(
            "  {} {}",
            "BINGO!".bright_green().bold(),
            format!("({})", lines.join(", ")).green()
        );
    }
    println!();
}

/// Print where an export was written
pub fn print_export_result(path: &Path) {
    println!(
        "{} {}",
        "📄 Exported board to".green(),
        path.display().to_string().bright_white().bold()
    );
}
