use crate::grid::Grid;
use crate::piece::{HeldPiece, Piece};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Read-only view of a game, handed to the renderer once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<Piece>,
    pub held: Option<HeldPiece>,
    pub score: u32,
    pub combo: u32,
    /// Filled in by the caller; the game itself does not track it.
    pub high_score: u32,
    pub show_help: bool,
}

impl GameSnapshot {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            active: None,
            held: None,
            score: 0,
            combo: 0,
            high_score: 0,
            show_help: true,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(GRID_WIDTH as usize, GRID_HEIGHT as usize)
    }
}
