//! Corpus snapshot persistence
//!
//! The snapshot is a single human-readable JSON file holding the full
//! [`Corpus`]. Its existence at the configured path is the only idempotency
//! signal the crawler uses: if the file is there, a re-run loads it verbatim
//! and performs no network fetches. The file is written exactly once, after
//! the whole corpus has been built; there is no partial checkpointing.

use crate::model::Corpus;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// File-backed snapshot store for a single corpus
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a completed snapshot already exists under this identity
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the snapshot from disk
    pub fn load(&self) -> SnapshotResult<Corpus> {
        let content = fs::read_to_string(&self.path)?;
        let corpus = serde_json::from_str(&content)?;
        Ok(corpus)
    }

    /// Persists the full corpus, replacing any existing file
    pub fn save(&self, corpus: &Corpus) -> SnapshotResult<()> {
        let content = serde_json::to_string_pretty(corpus)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonthArchive, Post, YearArchive};
    use tempfile::TempDir;

    fn sample_corpus() -> Corpus {
        Corpus {
            years: vec![YearArchive {
                year: 2020,
                months: vec![MonthArchive {
                    month: 5,
                    posts: vec![Post {
                        date: "07/05/2020".to_string(),
                        title: "Título con acentos".to_string(),
                        content: vec![
                            "<p>Primer párrafo</p>".to_string(),
                            "<img src=\"https://blog.example.com/a.png\">".to_string(),
                        ],
                        url: "https://blog.example.com/2020/05/post".to_string(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_exists_before_and_after_save() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("corpus.json"));

        assert!(!store.exists());
        store.save(&sample_corpus()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("corpus.json"));

        let corpus = sample_corpus();
        store.save(&corpus).unwrap();
        let restored = store.load().unwrap();

        assert_eq!(restored, corpus);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("missing.json"));
        assert!(matches!(store.load(), Err(SnapshotError::Io(_))));
    }

    #[test]
    fn test_snapshot_is_human_readable_text() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("corpus.json"));
        store.save(&sample_corpus()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("Título con acentos"));
        assert!(raw.lines().count() > 1);
    }
}
