//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be used by the core
//! simulation, the terminal renderer and the key mapping alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 16 rows (indexed 0-15, row 0 at the top)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 15 | Fixed simulation rate |
//! | `FALL_SPEED` | 3 | Cells fallen per second by gravity |
//!
//! Gravity fires every `round(TICKS_PER_SECOND / FALL_SPEED)` ticks, i.e. every
//! 5th tick with the defaults.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ShapeKind, GRID_WIDTH, PALETTE};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(PALETTE.len(), 10);
//! assert_eq!(GRID_WIDTH, 16);
//! ```

/// Grid width in cells (16 columns)
pub const GRID_WIDTH: u8 = 16;

/// Grid height in cells (16 rows)
pub const GRID_HEIGHT: u8 = 16;

/// Largest grid dimension accepted by the core (either axis).
pub const MAX_GRID_DIM: usize = 64;

/// Simulation ticks per second.
pub const TICKS_PER_SECOND: u32 = 15;

/// Gravity rate: cells fallen per second.
pub const FALL_SPEED: u32 = 3;

/// Cooldown armed on the store (hold) action after a held piece is retrieved.
pub const HOLD_COOLDOWN: u8 = 1;

/// Cooldown armed on the retrieve (unhold) action after a piece is stored.
pub const UNHOLD_COOLDOWN: u8 = 2;

/// Points for clearing 0-4 lines in a single tick.
///
/// Clears of more than four lines pay the four-line value.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Combo payout per streak step, paid on the first tick without a clear.
pub const COMBO_BONUS: u32 = 50;

/// Fixed key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "tetris_high_score";

/// 24-bit RGB color of a piece or grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Piece color palette.
pub const PALETTE: [Color; 10] = [
    Color::rgb(0xff, 0x00, 0x00), // red
    Color::rgb(0x00, 0xff, 0x00), // green
    Color::rgb(0x00, 0x00, 0xff), // blue
    Color::rgb(0x00, 0xbb, 0xff), // light blue
    Color::rgb(0x00, 0xff, 0xff), // cyan
    Color::rgb(0xff, 0x4a, 0xed), // pink
    Color::rgb(0xdb, 0x83, 0x1f), // orange
    Color::rgb(0xcc, 0x1f, 0xdb), // dark purple
    Color::rgb(0x1f, 0xdb, 0x7a), // lighter green
    Color::rgb(0xff, 0xff, 0x00), // bright yellow
];

/// The seven tetromino shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    S,
    Z,
    T,
    L,
    J,
    I,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::I,
    ];
}

/// Discrete input commands understood by the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    HardDrop,
    Hold,
    Pause,
    /// Any other key. Only meaningful for dismissing the help screen.
    AnyKey,
}

/// Top-level mode of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Controls screen; the simulation does not advance.
    #[default]
    ShowingHelp,
    Playing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates() {
        assert_eq!(TICKS_PER_SECOND, 15);
        assert_eq!(FALL_SPEED, 3);
        assert_eq!(HOLD_COOLDOWN, 1);
        assert_eq!(UNHOLD_COOLDOWN, 2);
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            assert!(PALETTE[i + 1..].iter().all(|b| b != a), "{a:?}");
        }
        assert_eq!(PALETTE[5], Color::rgb(0xff, 0x4a, 0xed));
    }

    #[test]
    fn score_table_is_increasing() {
        assert!(LINE_SCORES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn default_mode_is_help() {
        assert_eq!(Mode::default(), Mode::ShowingHelp);
    }
}
