//! File-backed training store: append-only JSON Lines.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;

use crate::error::StoreError;
use crate::models::TrainingExample;

use super::TrainingStore;

/// Training store persisted as one JSON object per line.
///
/// Appends go through a single shared handle behind a mutex, so concurrent
/// writers cannot interleave lines; the same mutex is held while loading,
/// so readers never observe a half-written tail from this process. A torn
/// final line left by a crash is skipped on load.
pub struct JsonlStore {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlStore {
    /// Open the store at `path`, creating an empty file (and any missing
    /// parent directories) if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file: Mutex::new(file) })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrainingStore for JsonlStore {
    fn append(&self, example: TrainingExample) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&example)?;
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.sync_data()?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TrainingExample>, StoreError> {
        let _guard = self.file.lock();
        let content = std::fs::read_to_string(&self.path)?;

        let lines: Vec<&str> = content.lines().collect();
        let mut examples = Vec::with_capacity(lines.len());

        for (idx, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(example) => examples.push(example),
                // A torn trailing line means the process died mid-append;
                // anything earlier is real corruption.
                Err(e) if idx == lines.len() - 1 => {
                    warn!("skipping torn trailing line in {}: {e}", self.path.display());
                }
                Err(e) => return Err(StoreError::Corrupt(e)),
            }
        }

        Ok(examples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedRecord;
    use pretty_assertions::assert_eq;

    fn example(text: &str, bank: &str) -> TrainingExample {
        TrainingExample::new(
            text,
            ExtractedRecord {
                bank: bank.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_open_creates_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(dir.path().join("training.jsonl")).unwrap();
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.path().exists());
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(dir.path().join("training.jsonl")).unwrap();

        store.append(example("первый", "SBER")).unwrap();
        store.append(example("второй", "ALFA")).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].text, "первый");
        assert_eq!(loaded[1].text, "второй");
    }

    #[test]
    fn test_reopen_keeps_examples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training.jsonl");

        {
            let store = JsonlStore::open(&path).unwrap();
            store.append(example("заявка", "VTB")).unwrap();
        }

        let store = JsonlStore::open(&path).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].parsed.bank, "VTB");
    }

    #[test]
    fn test_torn_trailing_line_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training.jsonl");

        let store = JsonlStore::open(&path).unwrap();
        store.append(example("целая", "SBER")).unwrap();

        // Simulate a crash mid-append.
        {
            let mut file = OpenOptions::new().append(true).open(&path).unwrap();
            file.write_all("{\"text\": \"обрыв".as_bytes()).unwrap();
        }

        let store = JsonlStore::open(&path).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "целая");
    }

    #[test]
    fn test_corrupt_middle_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training.jsonl");

        let store = JsonlStore::open(&path).unwrap();
        store.append(example("первая", "SBER")).unwrap();
        {
            let mut file = OpenOptions::new().append(true).open(&path).unwrap();
            file.write_all(b"not json\n").unwrap();
        }
        store.append(example("последняя", "ALFA")).unwrap();

        assert!(store.load_all().is_err());
    }

    #[test]
    fn test_known_lenders_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(dir.path().join("training.jsonl")).unwrap();

        store.append(example("a", "ALFA")).unwrap();
        store.append(example("b", "")).unwrap();
        store.append(example("c", "росбанк")).unwrap();

        assert_eq!(store.known_lenders().unwrap(), vec!["alfa", "росбанк"]);
    }
}
