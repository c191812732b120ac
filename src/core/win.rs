//! Win detection
//!
//! A bingo is any row, column or diagonal of the 5×5 mark grid with all
//! five cells marked.

use super::board::{CELL_COUNT, GRID_SIZE, index_of};

/// One of the 12 lines that can complete a bingo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row 0-4
    Row(usize),
    /// Column 0-4
    Column(usize),
    /// Top-left to bottom-right (`row == col`)
    Diagonal,
    /// Top-right to bottom-left (`col == 4 - row`)
    AntiDiagonal,
}

impl Line {
    /// Every winning line: 5 rows, 5 columns, then both diagonals
    pub const ALL: [Self; 12] = [
        Self::Row(0),
        Self::Row(1),
        Self::Row(2),
        Self::Row(3),
        Self::Row(4),
        Self::Column(0),
        Self::Column(1),
        Self::Column(2),
        Self::Column(3),
        Self::Column(4),
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// Board indices covered by this line
    ///
    /// Only meaningful when [`Line::is_on_board`] holds.
    ///
    /// # Examples
    /// ```
    /// use bingo_board::core::Line;
    ///
    /// assert_eq!(Line::Row(1).indices(), [5, 6, 7, 8, 9]);
    /// assert_eq!(Line::AntiDiagonal.indices(), [4, 8, 12, 16, 20]);
    /// ```
    #[must_use]
    pub fn indices(self) -> [usize; GRID_SIZE] {
        std::array::from_fn(|i| match self {
            Self::Row(row) => index_of(row, i),
            Self::Column(col) => index_of(i, col),
            Self::Diagonal => index_of(i, i),
            Self::AntiDiagonal => index_of(i, GRID_SIZE - 1 - i),
        })
    }

    /// Whether the row or column number is on the board (0-4)
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        match self {
            Self::Row(n) | Self::Column(n) => n < GRID_SIZE,
            Self::Diagonal | Self::AntiDiagonal => true,
        }
    }

    /// Whether every cell on this line is marked
    ///
    /// A line off the board is never complete.
    #[must_use]
    pub fn is_complete(self, marks: &[bool; CELL_COUNT]) -> bool {
        self.is_on_board() && self.indices().iter().all(|&index| marks[index])
    }

    /// Whether `index` lies on this line
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.is_on_board() && self.indices().contains(&index)
    }
}

/// Whether any winning line is fully marked
///
/// Pure: reads `marks` as a row-major grid and stops at the first complete
/// line.
///
/// # Examples
/// ```
/// use bingo_board::core::has_win;
///
/// let mut marks = [false; 25];
/// assert!(!has_win(&marks));
///
/// for col in 0..5 {
///     marks[col] = true;
/// }
/// assert!(has_win(&marks));
/// ```
#[must_use]
pub fn has_win(marks: &[bool; CELL_COUNT]) -> bool {
    Line::ALL.iter().any(|line| line.is_complete(marks))
}

/// Every fully marked line, in [`Line::ALL`] order
#[must_use]
pub fn winning_lines(marks: &[bool; CELL_COUNT]) -> Vec<Line> {
    Line::ALL
        .into_iter()
        .filter(|line| line.is_complete(marks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks_for(indices: &[usize]) -> [bool; CELL_COUNT] {
        let mut marks = [false; CELL_COUNT];
        for &index in indices {
            marks[index] = true;
        }
        marks
    }

    #[test]
    fn empty_grid_has_no_win() {
        assert!(!has_win(&[false; CELL_COUNT]));
        assert!(winning_lines(&[false; CELL_COUNT]).is_empty());
    }

    #[test]
    fn full_grid_wins_every_line() {
        let marks = [true; CELL_COUNT];
        assert!(has_win(&marks));
        assert_eq!(winning_lines(&marks), Line::ALL.to_vec());
    }

    #[test]
    fn each_single_line_wins() {
        for line in Line::ALL {
            let marks = marks_for(&line.indices());
            assert!(has_win(&marks), "{line:?} should win");
            assert_eq!(winning_lines(&marks), vec![line]);
        }
    }

    #[test]
    fn four_of_five_never_wins() {
        for line in Line::ALL {
            let indices = line.indices();
            for skip in 0..GRID_SIZE {
                let partial: Vec<usize> = indices
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &index)| index)
                    .collect();
                assert!(!has_win(&marks_for(&partial)), "{line:?} minus {skip}");
            }
        }
    }

    #[test]
    fn row_zero_wins() {
        assert!(has_win(&marks_for(&[0, 1, 2, 3, 4])));
    }

    #[test]
    fn scattered_marks_do_not_win() {
        // Free cell plus a knight's-move scatter touching every row and column
        let marks = marks_for(&[12, 0, 7, 14, 16, 23]);
        assert!(!has_win(&marks));
    }

    #[test]
    fn diagonal_indices() {
        assert_eq!(Line::Diagonal.indices(), [0, 6, 12, 18, 24]);
        assert_eq!(Line::Column(3).indices(), [3, 8, 13, 18, 23]);
        assert!(Line::Diagonal.contains(12));
        assert!(!Line::Row(0).contains(12));
    }

    #[test]
    fn has_win_does_not_mutate_input() {
        let marks = marks_for(&[0, 6, 12, 18, 24]);
        let copy = marks;
        let _ = has_win(&marks);
        assert_eq!(marks, copy);
    }

    #[test]
    fn off_board_lines_are_never_complete() {
        let marks = [true; CELL_COUNT];
        for line in [Line::Row(5), Line::Column(7), Line::Row(usize::MAX)] {
            assert!(!line.is_on_board());
            assert!(!line.is_complete(&marks));
            assert!(!line.contains(0));
        }
        assert!(Line::ALL.iter().all(|line| line.is_on_board()));
    }
}
