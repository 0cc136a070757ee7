// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Disk-based store: append-only JSON Lines file with file locking

use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{record::StoredRecord, HighscoreStore};
use crate::errors::StoreError;
use crate::types::entry::ScoreEntry;

/// Append-only JSON Lines store
///
/// Every entry is one line holding a [`StoredRecord`]:
///
/// ```text
/// {"item_id":42,"user_ids":"1,2","score":150,"is_win":1,"timestamp":1760486400}
/// ```
///
/// - Appends open the file in append mode under an exclusive advisory lock
/// - Loads read the whole file under a shared lock, in file order
/// - A missing file loads as an empty record set
///
/// # Examples
///
/// ```rust,ignore
/// use highscores::DiskStore;
///
/// let store = DiskStore::new("data/highscores.jsonl").validate()?;
/// ```
///
/// # File Locking
///
/// Uses the standard library's advisory file locks so that several processes
/// can share one file without interleaving partial lines.
#[derive(Debug)]
pub struct DiskStore {
    path: PathBuf,
}

impl DiskStore {
    /// Creates a new disk store at the specified path
    ///
    /// Path validation is NOT performed until the first I/O operation. Use
    /// [`validate()`](Self::validate) to check the path immediately.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates the store path and creates the parent directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or is not writable.
    pub fn validate(self) -> Result<Self, StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !parent.exists() {
            std::fs::create_dir_all(&parent).map_err(|e| {
                StoreError::io_error(
                    parent.display().to_string(),
                    "Failed to create store directory",
                    e,
                )
            })?;
            debug!(path = %parent.display(), "Created store directory");
        }

        let test_file = parent.join(".highscores_write_test");
        std::fs::write(&test_file, b"test").map_err(|e| {
            StoreError::io_error(
                parent.display().to_string(),
                "Store directory is not writable",
                e,
            )
        })?;
        let _ = std::fs::remove_file(&test_file);

        debug!(path = %self.path.display(), "Store path validated successfully");
        Ok(self)
    }
}

fn io_error(path: &Path, details: &str, source: std::io::Error) -> StoreError {
    StoreError::io_error(path.display().to_string(), details, source)
}

/// Runs blocking file work off the async worker threads
async fn run_blocking<T, F>(path: &Path, op: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce(&Path) -> Result<T, StoreError> + Send + 'static,
{
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || op(&path))
        .await
        .map_err(|e| StoreError::unavailable(format!("Blocking file task failed: {e}")))?
}

fn read_records(path: &Path) -> Result<Vec<ScoreEntry>, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "Store file does not exist, loading nothing");
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| io_error(path, "Failed to open store file", e))?;

    // Shared lock for reading (std lib, requires Rust 1.89+)
    file.lock_shared()
        .map_err(|e| io_error(path, "Failed to acquire read lock", e))?;

    let mut entries = Vec::new();
    for (index, line) in BufReader::new(&file).lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| io_error(path, "Failed to read store file", e))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: StoredRecord = serde_json::from_str(&line).map_err(|e| {
            StoreError::serialization_error(format!("{} line {}", path.display(), line_no), e)
        })?;
        let entry =
            ScoreEntry::try_from(record).map_err(|e| StoreError::invalid_record(line_no, e))?;
        entries.push(entry);
    }

    // Unlock by dropping the file
    drop(file);
    Ok(entries)
}

fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, "Failed to open store file for append", e))?;

    // Exclusive lock for writing (std lib, requires Rust 1.89+)
    file.lock()
        .map_err(|e| io_error(path, "Failed to acquire write lock", e))?;

    file.write_all(line.as_bytes())
        .map_err(|e| io_error(path, "Failed to append record", e))?;
    file.sync_data()
        .map_err(|e| io_error(path, "Failed to flush record", e))?;

    drop(file);
    Ok(())
}

#[async_trait]
impl HighscoreStore for DiskStore {
    async fn load_all(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        let entries = run_blocking(&self.path, read_records).await?;

        info!(
            path = %self.path.display(),
            entries = entries.len(),
            "Read highscore records from disk"
        );

        Ok(entries)
    }

    async fn append(&self, entry: &ScoreEntry) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&StoredRecord::from(entry))
            .map_err(|e| StoreError::serialization_error("Failed to encode record", e))?;
        line.push('\n');

        run_blocking(&self.path, move |path| append_line(path, &line)).await?;

        debug!(
            path = %self.path.display(),
            object_id = %entry.object_id(),
            "Appended highscore record"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "DiskStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EntryError;
    use crate::types::entry::{ObjectId, ParticipantId, UnixTimestamp};
    use tempfile::TempDir;

    fn create_test_entry(object: u32, participants: &[u32], score: i32) -> ScoreEntry {
        ScoreEntry::new(
            ObjectId(object),
            participants.iter().copied().map(ParticipantId).collect(),
            score,
            score > 0,
            UnixTimestamp(1_760_486_400 + i64::from(score)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_disk_store_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskStore::new(temp_dir.path().join("scores.jsonl"))
            .validate()
            .unwrap();

        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disk_store_append_and_load_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.jsonl");
        let store = DiskStore::new(&path).validate().unwrap();

        let first = create_test_entry(42, &[1, 2], 10);
        let second = create_test_entry(42, &[3], 20);
        let third = create_test_entry(7, &[1], 0);

        store.append(&first).await.unwrap();
        store.append(&second).await.unwrap();
        store.append(&third).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded, vec![first, second, third]);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.starts_with(r#"{"item_id":42,"user_ids":"1,2","score":10,"is_win":1"#));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_disk_store_concurrent_appends_keep_whole_lines() {
        let temp_dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(
            DiskStore::new(temp_dir.path().join("scores.jsonl"))
                .validate()
                .unwrap(),
        );

        let tasks: Vec<_> = (1..=32)
            .map(|score| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .append(&create_test_entry(3, &[score as u32], score))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let mut scores: Vec<i32> = store
            .load_all()
            .await
            .unwrap()
            .iter()
            .map(ScoreEntry::score)
            .collect();
        scores.sort_unstable();
        assert_eq!(scores, (1..=32).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_disk_store_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.jsonl");
        let entry = create_test_entry(1, &[5], 99);

        {
            let store = DiskStore::new(&path).validate().unwrap();
            store.append(&entry).await.unwrap();
        }

        {
            let store = DiskStore::new(&path).validate().unwrap();
            assert_eq!(store.load_all().await.unwrap(), vec![entry]);
        }
    }

    #[tokio::test]
    async fn test_disk_store_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.jsonl");
        std::fs::write(
            &path,
            "\n{\"item_id\":1,\"user_ids\":\"1\",\"score\":5,\"is_win\":0,\"timestamp\":10}\n\n",
        )
        .unwrap();

        let store = DiskStore::new(&path);
        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].score(), 5);
    }

    #[tokio::test]
    async fn test_disk_store_reports_corrupt_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.jsonl");
        std::fs::write(
            &path,
            "{\"item_id\":1,\"user_ids\":\"1\",\"score\":5,\"is_win\":0,\"timestamp\":10}\nnot json\n",
        )
        .unwrap();

        let result = DiskStore::new(&path).load_all().await;
        let err = result.unwrap_err();
        assert!(matches!(err, StoreError::SerializationError { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[tokio::test]
    async fn test_disk_store_reports_invalid_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.jsonl");
        std::fs::write(
            &path,
            "{\"item_id\":1,\"user_ids\":\"\",\"score\":5,\"is_win\":0,\"timestamp\":10}\n",
        )
        .unwrap();

        let result = DiskStore::new(&path).load_all().await;
        assert!(matches!(
            result,
            Err(StoreError::InvalidRecord {
                line: 1,
                source: EntryError::EmptyParticipants
            })
        ));
    }

    #[tokio::test]
    async fn test_disk_store_validation_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("scores.jsonl");

        let store = DiskStore::new(&path).validate();
        assert!(store.is_ok());
        assert!(path.parent().unwrap().exists());
    }
}
