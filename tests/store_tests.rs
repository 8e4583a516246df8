use std::fs;
use std::path::PathBuf;

use blockfall::core::{GameState, RandomSource};
use blockfall::store::{HighScoreStore, HighScoreTracker, JsonFileStore, MemoryStore};
use blockfall::types::{Command, HIGH_SCORE_KEY};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blockfall-it-{}-{}.json", std::process::id(), name));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn tracker_persists_best_across_sessions() {
    let path = temp_path("sessions");

    let mut tracker = HighScoreTracker::open(JsonFileStore::new(&path));
    assert_eq!(tracker.best(), 0);
    tracker.observe(400);
    tracker.observe(300);

    let tracker = HighScoreTracker::open(JsonFileStore::new(&path));
    assert_eq!(tracker.best(), 400);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[HIGH_SCORE_KEY], 400);
    fs::remove_file(&path).unwrap();
}

#[test]
fn corrupt_file_starts_from_zero() {
    let path = temp_path("corrupt");
    fs::write(&path, "{ nope").unwrap();

    let mut tracker = HighScoreTracker::open(JsonFileStore::new(&path));
    assert_eq!(tracker.best(), 0);
    tracker.observe(50);
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 50);
    fs::remove_file(&path).unwrap();
}

#[test]
fn reset_zeroes_the_file() {
    let path = temp_path("reset");
    JsonFileStore::new(&path).save(9000).unwrap();

    let mut tracker = HighScoreTracker::open(JsonFileStore::new(&path));
    assert_eq!(tracker.best(), 9000);
    tracker.reset();
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 0);
    fs::remove_file(&path).unwrap();
}

#[test]
fn tracker_follows_a_played_game() {
    let mut tracker = HighScoreTracker::open(MemoryStore::default());
    let mut state: GameState<RandomSource> = GameState::new(11);
    state.apply_command(Command::AnyKey);

    let mut peak = 0;
    for i in 0..3000 {
        if i % 3 == 0 {
            state.apply_command(Command::HardDrop);
        }
        if state.tick().game_over {
            state.apply_command(Command::AnyKey);
        }
        peak = peak.max(state.score());
        tracker.observe(state.score());
    }
    assert_eq!(tracker.best(), peak);
    assert_eq!(tracker.store().score, peak);
}

#[test]
fn unwritable_score_file_does_not_stop_play() {
    // A directory cannot be written as a file.
    let dir = std::env::temp_dir().join(format!("blockfall-it-{}-dir", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let mut tracker = HighScoreTracker::open(JsonFileStore::new(&dir));
    assert_eq!(tracker.best(), 0);
    assert!(tracker.observe(100));
    assert_eq!(tracker.best(), 100);
    tracker.reset();
    assert_eq!(tracker.best(), 0);

    assert!(dir.is_dir());
    fs::remove_dir(&dir).unwrap();
}
