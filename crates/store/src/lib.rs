//! High score persistence.
//!
//! The best score survives restarts through a [`HighScoreStore`]. The binary
//! uses [`JsonFileStore`], a small JSON object file keyed by
//! [`HIGH_SCORE_KEY`](crate::types::HIGH_SCORE_KEY); tests use
//! [`MemoryStore`]. [`HighScoreTracker`] sits between the game loop and the
//! store and only writes when the live score beats the stored best.

pub mod file;
pub mod tracker;

pub use blockfall_types as types;

pub use file::JsonFileStore;
pub use tracker::HighScoreTracker;

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access score file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {} is not valid", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode score file {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistent storage for the best score.
pub trait HighScoreStore {
    /// Stored best score. A store with nothing saved yet returns 0.
    fn load(&mut self) -> Result<u32, StoreError>;

    fn save(&mut self, score: u32) -> Result<(), StoreError>;

    fn reset(&mut self) -> Result<(), StoreError> {
        self.save(0)
    }
}

/// In-memory store, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub score: u32,
    /// Number of `save` calls.
    pub saves: usize,
}

impl MemoryStore {
    pub fn new(score: u32) -> Self {
        Self { score, saves: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&mut self) -> Result<u32, StoreError> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).save(score)
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        (**self).reset()
    }
}
