use tracing::{info, warn};

use crate::HighScoreStore;

/// Tracks the best score seen and writes it through to a store.
#[derive(Debug)]
pub struct HighScoreTracker<S> {
    store: S,
    best: u32,
}

impl<S: HighScoreStore> HighScoreTracker<S> {
    /// Load the stored best. Unreadable state is logged and treated as 0.
    pub fn open(mut store: S) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(err) => {
                warn!(error = %err, "could not load high score, starting from 0");
                0
            }
        };
        Self { store, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a live score. Returns true if it beats the best.
    ///
    /// A failed save is logged; the new best is still kept in memory.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = self.store.save(score) {
            warn!(error = %err, score, "could not save high score");
        }
        true
    }

    /// Zero the best score. A failed write is logged.
    pub fn reset(&mut self) {
        self.best = 0;
        match self.store.reset() {
            Ok(()) => info!("high score reset"),
            Err(err) => warn!(error = %err, "could not reset stored high score"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StoreError};

    /// Fails every read, and every write when `read_only` is set.
    struct Broken {
        read_only: bool,
        save_attempts: usize,
    }

    fn denied() -> StoreError {
        StoreError::Io {
            path: "broken".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }

    impl HighScoreStore for Broken {
        fn load(&mut self) -> Result<u32, StoreError> {
            Err(denied())
        }

        fn save(&mut self, _score: u32) -> Result<(), StoreError> {
            self.save_attempts += 1;
            if self.read_only {
                Err(denied())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn open_loads_best() {
        let tracker = HighScoreTracker::open(MemoryStore::new(700));
        assert_eq!(tracker.best(), 700);
    }

    #[test]
    fn open_recovers_from_load_error() {
        let tracker = HighScoreTracker::open(Broken {
            read_only: false,
            save_attempts: 0,
        });
        assert_eq!(tracker.best(), 0);
    }

    #[test]
    fn failed_saves_keep_the_best_in_memory() {
        let mut tracker = HighScoreTracker::open(Broken {
            read_only: true,
            save_attempts: 0,
        });
        assert!(tracker.observe(100));
        assert!(!tracker.observe(80));
        assert!(tracker.observe(250));
        assert_eq!(tracker.best(), 250);
        assert_eq!(tracker.store().save_attempts, 2);

        tracker.reset();
        assert_eq!(tracker.best(), 0);
        assert_eq!(tracker.store().save_attempts, 3);
    }

    #[test]
    fn observe_saves_only_improvements() {
        let mut tracker = HighScoreTracker::open(MemoryStore::new(500));
        assert!(!tracker.observe(300));
        assert!(!tracker.observe(500));
        assert!(tracker.observe(600));
        assert!(tracker.observe(650));
        assert_eq!(tracker.best(), 650);
        assert_eq!(tracker.store().saves, 2);
        assert_eq!(tracker.store().score, 650);
    }

    #[test]
    fn reset_clears_best() {
        let mut tracker = HighScoreTracker::open(MemoryStore::new(900));
        tracker.reset();
        assert_eq!(tracker.best(), 0);
        assert_eq!(tracker.store().score, 0);
        assert!(tracker.observe(100));
    }
}
