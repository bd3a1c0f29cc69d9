//! File-backed storage for student records
//!
//! The whole collection lives in one JSON document and is rewritten on
//! every mutation. Readers never see an error: a missing or corrupt file
//! reads as an empty collection.

use crate::error::Result;
use crate::models::StudentRecord;
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Persistence boundary for the record collection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full collection in insertion order, or an empty one if
    /// nothing usable is stored
    async fn load(&self) -> Vec<StudentRecord>;

    /// Replace the stored collection with `records`
    async fn save(&self, records: &[StudentRecord]) -> Result<()>;
}

/// Stores the collection as a pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. The file does not
    /// need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Vec<StudentRecord> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file {} not found, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&data) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed data file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let total = entries.len();
        let records: Vec<StudentRecord> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping non-record entry in {}: {}", self.path.display(), e);
                    None
                }
            })
            .collect();

        debug!(
            "Loaded {} of {} entries from {}",
            records.len(),
            total,
            self.path.display()
        );
        records
    }

    async fn save(&self, records: &[StudentRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_replace(&path, json.as_bytes()))
            .await
            .map_err(std::io::Error::other)??;

        info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Write `contents` to a temp file next to `path`, then rename it over
/// `path` so readers see either the old or the new document.
fn write_replace(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    Ok(())
}
