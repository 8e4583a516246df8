//! Grid module - the board of locked cells
//!
//! The grid is `width x height` cells stored row-major in a flat vector.
//! Coordinates are `(row, col)` with row 0 at the top. Dimensions are fixed
//! for the lifetime of a grid; clearing a line always inserts an empty row at
//! the top so the row count never changes.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Color, MAX_GRID_DIM};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub filled: bool,
    pub color: Color,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        filled: false,
        color: Color::WHITE,
    };

    pub const fn filled(color: Color) -> Self {
        Self {
            filled: true,
            color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Invariant violations raised when locking a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell (row {row}, col {col}) is outside the grid")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell (row {row}, col {col}) is already filled")]
    Occupied { row: i32, col: i32 },
}

/// Row indices of complete lines, ascending.
pub type CompleteLines = ArrayVec<usize, MAX_GRID_DIM>;

/// Fixed-size board of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or larger than [`MAX_GRID_DIM`].
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            (1..=MAX_GRID_DIM).contains(&width) && (1..=MAX_GRID_DIM).contains(&height),
            "grid dimensions {width}x{height} out of range"
        );
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Get the cell at `(row, col)`, `None` if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True if `(row, col)` is outside the grid or filled.
    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        self.get(row, col).map_or(true, |cell| cell.filled)
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// True iff every cell in `row` is filled. Out-of-range rows are never complete.
    pub fn is_line_complete(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.filled)
    }

    /// Snapshot of every complete row index, ascending.
    pub fn complete_lines(&self) -> CompleteLines {
        (0..self.height)
            .filter(|&row| self.is_line_complete(row))
            .collect()
    }

    /// Remove `row` and insert an empty row at the top.
    ///
    /// Rows above `row` move down by one; rows below are untouched.
    pub fn clear_line(&mut self, row: usize) {
        if row >= self.height {
            return;
        }
        let width = self.width;
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(Cell::EMPTY);
    }

    /// Clear every complete line and return how many were removed.
    ///
    /// Completeness is snapshotted before any removal. Indices are processed
    /// top to bottom: clearing row `i` only shifts rows above `i`, so each
    /// later snapshotted index still names the row it named before.
    pub fn clear_complete_lines(&mut self) -> usize {
        let lines = self.complete_lines();
        for &row in &lines {
            self.clear_line(row);
        }
        lines.len()
    }

    /// True if every occupied cell of `piece` is in bounds and empty.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .all(|(row, col)| !self.is_blocked(row, col))
    }

    /// Lock `piece` into the grid.
    ///
    /// All-or-nothing: on error the grid is left untouched.
    pub fn place(&mut self, piece: &Piece) -> Result<(), GridError> {
        for (row, col) in piece.cells() {
            match self.get(row, col) {
                None => return Err(GridError::OutOfBounds { row, col }),
                Some(cell) if cell.filled => return Err(GridError::Occupied { row, col }),
                Some(_) => {}
            }
        }

        let cell = Cell::filled(piece.color);
        for (row, col) in piece.cells() {
            self.set(row, col, cell);
        }
        Ok(())
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled).count()
    }

    /// Fill an entire row (test helper).
    #[cfg(test)]
    pub(crate) fn fill_row(&mut self, row: usize, color: Color) {
        let start = row * self.width;
        self.cells[start..start + self.width].fill(Cell::filled(color));
    }
}
