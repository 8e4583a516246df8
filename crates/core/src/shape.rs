//! Shape module - boolean occupancy matrices and their rotation
//!
//! A shape is stored row-major in a flat vector. Rotation never mutates a
//! shape in place; it produces a new one with transposed dimensions.

/// Boolean occupancy matrix of a piece in its local frame.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    /// Row-major cells (`row * cols + col`)
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from row slices.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty, or the rows are empty or ragged.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "shape needs at least one row");
        let cols = rows[0].as_ref().len();
        assert!(cols > 0, "shape needs at least one column");

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "ragged shape rows");
            cells.extend_from_slice(row);
        }

        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether local cell `(row, col)` is occupied. Out of range is empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col]
    }

    /// Iterate occupied cells as `(row, col)` in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Rotate 90° clockwise.
    ///
    /// The result is `cols x rows`; output cell `(r, c)` takes input cell
    /// `(rows - 1 - c, r)`.
    pub fn rotate_cw(&self) -> Shape {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells = vec![false; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                cells[r * cols + c] = self.get(self.rows - 1 - c, r);
            }
        }
        Shape { rows, cols, cells }
    }

    /// Rotate 90° anticlockwise (three clockwise turns).
    pub fn rotate_ccw(&self) -> Shape {
        self.rotated(3)
    }

    /// Apply `turns` clockwise rotations.
    pub fn rotated(&self, turns: u8) -> Shape {
        let mut shape = self.clone();
        for _ in 0..turns % 4 {
            shape = shape.rotate_cw();
        }
        shape
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row_to_string = |r: usize| -> String {
            (0..self.cols)
                .map(|c| if self.get(r, c) { '#' } else { '.' })
                .collect()
        };
        f.debug_list()
            .entries((0..self.rows).map(row_to_string))
            .finish()
    }
}
