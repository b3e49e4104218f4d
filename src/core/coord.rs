use std::fmt;

use serde::Serialize;

/// Zero-based (row, column) position on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Shift by a signed delta. `None` when either axis would go below zero.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// The up-to-eight cells touching this one, diagonals included.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// True when the two cells are equal or touch, diagonals included.
    pub fn is_adjacent_or_equal(&self, other: &Coordinate) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Coordinate {
    /// One-based, the way players read the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row + 1, self.col + 1)
    }
}
