//! Formatting utilities for terminal output

use crate::core::Line;

/// Fit `text` into exactly `width` columns, centered
///
/// Text that is too long is cut and ends with `…`.
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        if width > 0 {
            cut.push('…');
        }
        return cut;
    }

    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Human-readable name of a winning line (rows and columns are 1-based)
#[must_use]
pub fn line_name(line: Line) -> String {
    match line {
        Line::Row(row) => format!("row {}", row + 1),
        Line::Column(col) => format!("column {}", col + 1),
        Line::Diagonal => "diagonal".to_string(),
        Line::AntiDiagonal => "anti-diagonal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_cell_centers_short_text() {
        assert_eq!(fit_cell("ab", 6), "  ab  ");
        assert_eq!(fit_cell("abc", 6), " abc  ");
        assert_eq!(fit_cell("", 3), "   ");
    }

    #[test]
    fn fit_cell_truncates_long_text() {
        assert_eq!(fit_cell("abcdefgh", 5), "abcd…");
        assert_eq!(fit_cell("abcdefgh", 5).chars().count(), 5);
        assert_eq!(fit_cell("ab", 0), "");
    }

    #[test]
    fn fit_cell_counts_chars_not_bytes() {
        assert_eq!(fit_cell("café", 6), " café ");
    }

    #[test]
    fn line_names() {
        assert_eq!(line_name(Line::Row(0)), "row 1");
        assert_eq!(line_name(Line::Column(4)), "column 5");
        assert_eq!(line_name(Line::AntiDiagonal), "anti-diagonal");
    }
}
