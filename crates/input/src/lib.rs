//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Commands are
//! discrete: one key press is one command, with no auto-repeat handling
//! beyond what the terminal itself sends.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_reset_high_score, should_quit};
