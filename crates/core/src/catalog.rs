//! Piece catalog - shape templates, color palette and spawn sources
//!
//! Shapes are the seven tetrominoes in their 0-rotation frame. Selection is
//! uniform; there is no bag randomizer.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::shape::Shape;
use crate::types::{Color, ShapeKind, PALETTE};

const X: bool = true;
const O: bool = false;

const O_ROWS: [[bool; 2]; 2] = [[X, X], [X, X]];
const S_ROWS: [[bool; 3]; 2] = [[O, X, X], [X, X, O]];
const Z_ROWS: [[bool; 3]; 2] = [[X, X, O], [O, X, X]];
const T_ROWS: [[bool; 3]; 2] = [[O, X, O], [X, X, X]];
const L_ROWS: [[bool; 3]; 2] = [[O, O, X], [X, X, X]];
const J_ROWS: [[bool; 3]; 2] = [[X, O, O], [X, X, X]];
const I_ROWS: [[bool; 4]; 1] = [[X, X, X, X]];

/// Template shape for a kind, in its spawn (0-rotation) frame.
pub fn template(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::O => Shape::from_rows(&O_ROWS),
        ShapeKind::S => Shape::from_rows(&S_ROWS),
        ShapeKind::Z => Shape::from_rows(&Z_ROWS),
        ShapeKind::T => Shape::from_rows(&T_ROWS),
        ShapeKind::L => Shape::from_rows(&L_ROWS),
        ShapeKind::J => Shape::from_rows(&J_ROWS),
        ShapeKind::I => Shape::from_rows(&I_ROWS),
    }
}

/// The fixed, ordered shape set and color palette.
pub fn catalog() -> (&'static [ShapeKind; 7], &'static [Color; 10]) {
    (&ShapeKind::ALL, &PALETTE)
}

/// Pick a shape kind uniformly at random.
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

/// Pick a palette color uniformly at random.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

/// A freshly drawn piece, before it is positioned on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawn {
    pub shape: Shape,
    pub color: Color,
}

/// Source of spawned pieces.
pub trait PieceSource {
    /// Draw the next piece. The returned shape already carries any spawn rotation.
    fn draw(&mut self) -> Spawn;
}

/// Uniform random catalog draws with a random number of clockwise spins.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl PieceSource for RandomSource {
    fn draw(&mut self) -> Spawn {
        let kind = random_shape(&mut self.rng);
        let color = random_color(&mut self.rng);
        let spins = self.rng.gen_range(0..4u8);
        Spawn {
            shape: template(kind).rotated(spins),
            color,
        }
    }
}

impl<F: FnMut() -> Spawn> PieceSource for F {
    fn draw(&mut self) -> Spawn {
        self()
    }
}
