//! Bingo board representation
//!
//! A Board stores the 25 tile strings and their marks in row-major order
//! (`index = row * 5 + col`).

use super::win;
use std::fmt;

/// Width and height of the grid
pub const GRID_SIZE: usize = 5;

/// Number of cells on a board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Index of the free center cell (row 2, col 2)
pub const FREE_INDEX: usize = 12;

/// Label used for the free cell when none is configured
pub const DEFAULT_FREE_LABEL: &str = "FREE";

/// A 5×5 bingo board
///
/// `contents` and `marks` are parallel arrays, so both always hold exactly
/// [`CELL_COUNT`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    contents: [String; CELL_COUNT],
    marks: [bool; CELL_COUNT],
}

impl Board {
    /// Build a board from its content and mark arrays
    ///
    /// # Examples
    /// ```
    /// use bingo_board::core::{Board, FREE_INDEX};
    ///
    /// let contents = std::array::from_fn(|i| format!("tile {i}"));
    /// let marks = std::array::from_fn(|i| i == FREE_INDEX);
    /// let board = Board::from_parts(contents, marks);
    ///
    /// assert!(board.is_marked(FREE_INDEX));
    /// assert_eq!(board.content(0), Some("tile 0"));
    /// ```
    #[must_use]
    pub const fn from_parts(contents: [String; CELL_COUNT], marks: [bool; CELL_COUNT]) -> Self {
        Self { contents, marks }
    }

    /// All tile strings in row-major order
    #[inline]
    #[must_use]
    pub const fn contents(&self) -> &[String; CELL_COUNT] {
        &self.contents
    }

    /// All marks in row-major order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[bool; CELL_COUNT] {
        &self.marks
    }

    /// Tile string at `index`, or `None` if out of range
    #[inline]
    #[must_use]
    pub fn content(&self, index: usize) -> Option<&str> {
        self.contents.get(index).map(String::as_str)
    }

    /// Whether the cell at `index` is marked (out of range reads as unmarked)
    #[inline]
    #[must_use]
    pub fn is_marked(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Flip the mark at `index`
    ///
    /// Returns the new mark, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let mark = self.marks.get_mut(index)?;
        *mark = !*mark;
        Some(*mark)
    }

    /// Number of marked cells, free cell included
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    /// Whether any row, column or diagonal is fully marked
    #[must_use]
    pub fn has_win(&self) -> bool {
        win::has_win(&self.marks)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            let cells: Vec<String> = (0..GRID_SIZE)
                .map(|col| {
                    let index = index_of(row, col);
                    let marker = if self.marks[index] { '*' } else { ' ' };
                    format!("{marker}{}", self.contents[index])
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Row-major index of a grid position
///
/// # Examples
/// ```
/// use bingo_board::core::{index_of, FREE_INDEX};
///
/// assert_eq!(index_of(2, 2), FREE_INDEX);
/// assert_eq!(index_of(4, 0), 20);
/// ```
#[inline]
#[must_use]
pub const fn index_of(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

/// Grid position `(row, col)` of a row-major index
#[inline]
#[must_use]
pub const fn position_of(index: usize) -> (usize, usize) {
    (index / GRID_SIZE, index % GRID_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let contents = std::array::from_fn(|i| format!("w{i}"));
        let marks = std::array::from_fn(|i| i == FREE_INDEX);
        Board::from_parts(contents, marks)
    }

    #[test]
    fn free_index_is_center() {
        assert_eq!(position_of(FREE_INDEX), (2, 2));
        assert_eq!(index_of(2, 2), FREE_INDEX);
    }

    #[test]
    fn index_position_roundtrip_covers_grid() {
        for index in 0..CELL_COUNT {
            let (row, col) = position_of(index);
            assert!(row < GRID_SIZE && col < GRID_SIZE);
            assert_eq!(index_of(row, col), index);
        }
    }

    #[test]
    fn toggle_flips_and_reports_new_mark() {
        let mut board = sample_board();

        assert_eq!(board.toggle(3), Some(true));
        assert!(board.is_marked(3));
        assert_eq!(board.toggle(3), Some(false));
        assert!(!board.is_marked(3));
    }

    #[test]
    fn toggle_out_of_range_is_none() {
        let mut board = sample_board();
        let before = board.clone();

        assert_eq!(board.toggle(CELL_COUNT), None);
        assert_eq!(board, before);
    }

    #[test]
    fn free_cell_can_be_unmarked() {
        let mut board = sample_board();
        assert_eq!(board.toggle(FREE_INDEX), Some(false));
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn content_lookup() {
        let board = sample_board();
        assert_eq!(board.content(24), Some("w24"));
        assert_eq!(board.content(25), None);
    }

    #[test]
    fn display_marks_cells_with_asterisk() {
        let board = sample_board();
        let text = board.to_string();

        assert_eq!(text.lines().count(), GRID_SIZE);
        assert!(text.contains("*w12"));
        assert!(text.contains(" w0"));
    }
}
