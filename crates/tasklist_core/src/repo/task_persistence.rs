//! Task collection persistence adapter.
//!
//! # Responsibility
//! - Load the collection from the record stored under `TASKS_STORAGE_KEY`.
//! - Save the full collection back under the same key.
//!
//! # Invariants
//! - An absent record loads as an empty collection.
//! - A malformed record is a `Decode` error; it never falls back to empty.
//! - `save` always writes the complete collection.

use crate::model::task::Task;
use crate::repo::kv_store::{KeyValueStore, KvError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Fixed key of the persisted task record.
pub const TASKS_STORAGE_KEY: &str = "TASKS";

pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Debug)]
pub enum PersistenceError {
    Store(KvError),
    Decode(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "task storage failed: {err}"),
            Self::Decode(err) => write!(f, "stored task record is malformed: {err}"),
            Self::Encode(err) => write!(f, "failed to serialize tasks: {err}"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
        }
    }
}

impl From<KvError> for PersistenceError {
    fn from(value: KvError) -> Self {
        Self::Store(value)
    }
}

/// Loads and saves the task collection through a key-value store.
pub struct TaskPersistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TaskPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the persisted collection.
    pub fn load(&self) -> PersistenceResult<Vec<Task>> {
        let Some(raw) = self.store.get_item(TASKS_STORAGE_KEY)? else {
            info!("event=tasks_load module=repo status=ok source=empty count=0");
            return Ok(Vec::new());
        };

        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|err| {
            error!(
                "event=tasks_load module=repo status=error error_code=decode_failed line={} column={}",
                err.line(),
                err.column()
            );
            PersistenceError::Decode(err)
        })?;

        info!(
            "event=tasks_load module=repo status=ok source=stored count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    /// Serializes `tasks` and overwrites the persisted record.
    pub fn save(&self, tasks: &[Task]) -> PersistenceResult<()> {
        let started_at = Instant::now();
        let raw = serde_json::to_string(tasks).map_err(PersistenceError::Encode)?;

        if let Err(err) = self.store.set_item(TASKS_STORAGE_KEY, &raw) {
            error!(
                "event=tasks_save module=repo status=error count={} error={err}",
                tasks.len()
            );
            return Err(err.into());
        }

        info!(
            "event=tasks_save module=repo status=ok count={} bytes={} duration_ms={}",
            tasks.len(),
            raw.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
