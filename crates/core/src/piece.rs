//! Piece module - the active falling piece and the held piece

use crate::shape::Shape;
use crate::types::Color;

/// A shape placed on the grid.
///
/// `(x, y)` is the grid position of the shape's top-left cell: `x` is the
/// column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(shape: Shape, color: Color, x: i32, y: i32) -> Self {
        Self { shape, color, x, y }
    }

    /// Occupied cells in grid coordinates, as `(row, col)`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(r, c)| (self.y + r as i32, self.x + c as i32))
    }

    pub fn width(&self) -> i32 {
        self.shape.cols() as i32
    }

    pub fn height(&self) -> i32 {
        self.shape.rows() as i32
    }

    /// Copy moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Copy with a replacement shape at the same position.
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self {
            shape,
            ..self.clone()
        }
    }

    /// Copy clamped so the shape lies within `width` columns and its bottom
    /// does not pass row `height - 1`.
    ///
    /// A shape wider than the grid is pinned to column 0.
    pub fn clamped(&self, width: usize, height: usize) -> Self {
        let max_x = (width as i32 - self.width()).max(0);
        let max_y = height as i32 - self.height();
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.min(max_y),
            ..self.clone()
        }
    }
}

/// The piece set aside in the hold slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeldPiece {
    pub shape: Shape,
    pub color: Color,
}

impl From<Piece> for HeldPiece {
    fn from(piece: Piece) -> Self {
        Self {
            shape: piece.shape,
            color: piece.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(x: i32, y: i32) -> Piece {
        Piece::new(
            Shape::from_rows(&[[true, true, true, true]]),
            Color::WHITE,
            x,
            y,
        )
    }

    #[test]
    fn test_cells_translate_by_position() {
        let cells: Vec<_> = bar(2, 5).cells().collect();
        assert_eq!(cells, vec![(5, 2), (5, 3), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_clamp_left_edge() {
        let p = bar(-3, 0).clamped(16, 16);
        assert_eq!((p.x, p.y), (0, 0));
    }

    #[test]
    fn test_clamp_right_edge() {
        let p = bar(14, 0).clamped(16, 16);
        assert_eq!(p.x + p.width(), 16);
    }

    #[test]
    fn test_clamp_bottom() {
        let upright = bar(0, 20).with_shape(bar(0, 0).shape.rotate_cw());
        let p = upright.clamped(16, 16);
        assert_eq!(p.y + p.height(), 16);
    }

    #[test]
    fn test_clamp_keeps_in_range_position() {
        let p = bar(5, 3);
        assert_eq!(p.clamped(16, 16), p);
    }

    #[test]
    fn test_held_from_piece() {
        let held = HeldPiece::from(bar(1, 1));
        assert_eq!(held.shape.cols(), 4);
        assert_eq!(held.color, Color::WHITE);
    }
}
