//! JSON file backed store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{HighScoreStore, StoreError};

/// On-disk layout: one JSON object. Keys other than the high score are kept
/// as they are when the file is rewritten.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(rename = "tetris_high_score", default)]
    high_score: u32,
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file. A missing file is an empty object.
    fn read(&self) -> Result<ScoreFile, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ScoreFile::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<u32, StoreError> {
        Ok(self.read()?.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        // A corrupt file is overwritten rather than blocking saves forever.
        let mut file = match self.read() {
            Ok(file) => file,
            Err(StoreError::Parse { .. }) => {
                debug!(path = %self.path.display(), "replacing unparsable score file");
                ScoreFile::default()
            }
            Err(err) => return Err(err),
        };
        file.high_score = score;

        let text = serde_json::to_string_pretty(&file).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(score, path = %self.path.display(), "high score saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HIGH_SCORE_KEY;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "blockfall-store-{}-{}.json",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_loads_zero() {
        let mut store = JsonFileStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);
        store.save(1250).unwrap();
        assert_eq!(JsonFileStore::new(&path).load().unwrap(), 1250);

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[HIGH_SCORE_KEY], 1250);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unrelated_keys_survive_a_save() {
        let path = temp_path("keys");
        fs::write(&path, r#"{"theme": "dark", "tetris_high_score": 10}"#).unwrap();
        let mut store = JsonFileStore::new(&path);
        store.save(20).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value[HIGH_SCORE_KEY], 20);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));

        store.reset().unwrap();
        assert_eq!(store.load().unwrap(), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unreadable_file_is_not_overwritten() {
        let dir = temp_path("unreadable");
        fs::create_dir_all(&dir).unwrap();
        let mut store = JsonFileStore::new(&dir);

        assert!(matches!(store.save(10), Err(StoreError::Io { .. })));
        assert!(dir.is_dir());
        fs::remove_dir(&dir).unwrap();
    }

    #[test]
    fn object_without_key_loads_zero() {
        let path = temp_path("nokey");
        fs::write(&path, "{}").unwrap();
        assert_eq!(JsonFileStore::new(&path).load().unwrap(), 0);
        fs::remove_file(&path).unwrap();
    }
}
