use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::domain::{Assessment, Candidate, Job};

/// Full serialized copy of the three entity collections. This is the only
/// durability unit: every successful mutation rewrites it in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

impl StateSnapshot {
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.candidates.is_empty() && self.assessments.is_empty()
    }
}

/// Storage abstraction so the hiring store can be exercised in isolation.
pub trait SnapshotStore: Send + Sync {
    /// Returns the last saved snapshot, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError>;
    fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError>;
}

/// Error enumeration for snapshot persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed snapshot store. The file is rewritten in full on every save;
/// there is no write-ahead guarantee, matching the durability contract of a
/// browser local-storage key.
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
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_slice(&raw)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        let raw = serde_json::to_vec(snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory snapshot store for tests and the CLI demo.
#[derive(Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<StateSnapshot>>>,
}

impl MemoryStore {
    /// Last saved snapshot, if any. Lets tests assert on durable state directly.
    pub fn saved(&self) -> Option<StateSnapshot> {
        self.inner.lock().expect("snapshot mutex poisoned").clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<StateSnapshot>, SnapshotError> {
        Ok(self.inner.lock().expect("snapshot mutex poisoned").clone())
    }

    fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        *self.inner.lock().expect("snapshot mutex poisoned") = Some(snapshot.clone());
        Ok(())
    }
}
