//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] turns a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`] of
//! styled characters without any I/O, and [`TerminalRenderer`] flushes
//! framebuffers to the terminal, emitting only the cells that changed since
//! the previous frame.
//!
//! Board cells are drawn 2 columns wide by default to compensate for the
//! usual terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, HELP_LINES};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
