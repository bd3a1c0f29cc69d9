//! Validation and append path for new student submissions

use crate::error::{RegistryError, Result};
use crate::models::{next_id, now_millis, StudentRecord};
use crate::storage::RecordStore;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Raw form fields as posted by the entry form
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StudentSubmission {
    pub name: Option<String>,
    pub roll: Option<String>,
    pub department: Option<String>,
}

/// A submission with every field present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub roll: String,
    pub department: String,
}

impl StudentSubmission {
    /// Check that all three fields are present and non-empty.
    ///
    /// Values are kept verbatim; a field of only whitespace counts as
    /// filled in.
    pub fn validate(self) -> Result<ValidSubmission> {
        match (
            non_empty(self.name),
            non_empty(self.roll),
            non_empty(self.department),
        ) {
            (Some(name), Some(roll), Some(department)) => Ok(ValidSubmission {
                name,
                roll,
                department,
            }),
            _ => Err(RegistryError::MissingFields),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Front door to the record store.
///
/// Reads go straight to the store. Appends hold `write_lock` across the
/// whole load, push and save sequence, so concurrent submissions cannot
/// overwrite each other.
pub struct Registry {
    store: Arc<dyn RecordStore>,
    write_lock: Mutex<()>,
}

impl Registry {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All stored records in insertion order
    pub async fn list(&self) -> Vec<StudentRecord> {
        self.store.load().await
    }

    /// Validate `submission`, append it as a new record and persist the
    /// collection. The stored collection is untouched if validation fails.
    pub async fn submit(&self, submission: StudentSubmission) -> Result<StudentRecord> {
        let valid = submission.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await;

        let id = next_id(&records, now_millis())?;
        let record = StudentRecord::new(id, valid.name, valid.roll, valid.department);
        debug!("Appending record {} after {} existing", id, records.len());

        records.push(record.clone());
        self.store.save(&records).await?;

        info!("Added student {} (roll {})", record.name, record.roll);
        Ok(record)
    }
}
