//! File-backed high-score store.
//!
//! One JSON document holding the single persisted integer. Every I/O or
//! parse failure degrades to memory-only operation: reads fall back to the
//! last known value, writes are logged at warn level and dropped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use redoubt_sim::highscore::HighScoreStore;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    best: u32,
}

/// High-score store persisted as a JSON file.
#[derive(Debug)]
pub struct FileHighScores {
    path: PathBuf,
    cached: u32,
}

impl FileHighScores {
    /// Open a store at `path`, reading any existing record. A missing or
    /// unreadable file starts the store at zero.
    pub fn open(path: PathBuf) -> Self {
        let cached = read_record(&path).map(|record| record.best).unwrap_or(0);
        Self { path, cached }
    }
}

impl HighScoreStore for FileHighScores {
    fn get(&self) -> u32 {
        self.cached
    }

    fn put(&mut self, value: u32) {
        self.cached = value;
        if let Err(err) = write_record(&self.path, HighScoreRecord { best: value }) {
            log::warn!("high score not persisted: {err}");
        }
    }
}

fn read_record(path: &Path) -> Option<HighScoreRecord> {
    let json = fs::read_to_string(path).ok()?;
    serde_json::from_str(&json).ok()
}

fn write_record(path: &Path, record: HighScoreRecord) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create score directory: {e}"))?;
        }
    }
    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| format!("Failed to serialize high score: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write high score file: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("redoubt_test_highscore")
            .join(format!("{name}.json"))
    }

    #[test]
    fn test_put_then_get_round_trip() {
        let path = temp_path("round_trip");
        let _ = fs::remove_file(&path);

        let mut store = FileHighScores::open(path.clone());
        assert_eq!(store.get(), 0);

        store.put(1234);
        assert_eq!(store.get(), 1234);

        // a fresh store re-reads the persisted value
        let reopened = FileHighScores::open(path.clone());
        assert_eq!(reopened.get(), 1234);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = FileHighScores::open(temp_path("missing_nope"));
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        let store = FileHighScores::open(path.clone());
        assert_eq!(store.get(), 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_put_overwrites_previous_record() {
        let path = temp_path("overwrite");
        let _ = fs::remove_file(&path);

        let mut store = FileHighScores::open(path.clone());
        store.put(10);
        store.put(25);

        let reopened = FileHighScores::open(path.clone());
        assert_eq!(reopened.get(), 25);

        let _ = fs::remove_file(&path);
    }
}
