//! In-memory task collection with write-through persistence.
//!
//! # Responsibility
//! - Hold the ordered collection for the current session.
//! - Persist the full collection after every mutation.
//! - Address tasks by `TaskId` through an index, never by shared reference.
//!
//! # Invariants
//! - Insertion order is display order; tasks are never removed or reordered.
//! - Mutations are applied in memory before the save call, so a failed save
//!   leaves memory ahead of storage until the next successful save.
//! - Ids are unique within the collection; duplicates in a stored record
//!   receive fresh ids at load.
//! - `index` maps each id to its position in `tasks`.

use crate::model::task::{Task, TaskId};
use crate::repo::kv_store::KeyValueStore;
use crate::repo::task_persistence::{PersistenceError, TaskPersistence};
use log::{info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Persistence(PersistenceError),
    NotFound(TaskId),
    DuplicateId(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "task id already exists: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Authoritative task collection for one session.
pub struct TaskStore<S: KeyValueStore> {
    persistence: TaskPersistence<S>,
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads the persisted collection and makes it authoritative.
    ///
    /// # Errors
    /// - `StoreError::Persistence` when the backend fails or the stored
    ///   record is malformed.
    pub fn initialize(persistence: TaskPersistence<S>) -> StoreResult<Self> {
        let mut tasks = persistence.load()?;
        let mut index = HashMap::with_capacity(tasks.len());
        let mut reassigned = 0usize;
        for (position, task) in tasks.iter_mut().enumerate() {
            if index.contains_key(&task.id()) {
                let previous = task.id();
                task.reassign_id(Uuid::new_v4());
                reassigned += 1;
                warn!(
                    "event=tasks_load module=service status=warn reason=duplicate_id task_id={previous} new_task_id={}",
                    task.id()
                );
            }
            index.insert(task.id(), position);
        }

        let store = Self {
            persistence,
            tasks,
            index,
        };
        // Each row must address its own task, so repaired ids are written back.
        if reassigned > 0 {
            store.persist()?;
            info!("event=tasks_repair module=service status=ok reassigned={reassigned}");
        }
        Ok(store)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.index.get(&id).map(|&position| &self.tasks[position])
    }

    /// Appends `task` and saves the full collection.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present; nothing is changed.
    /// - `Persistence` when the save fails; the task stays appended.
    pub fn add(&mut self, task: Task) -> StoreResult<TaskId> {
        let id = task.id();
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        self.index.insert(id, self.tasks.len());
        self.tasks.push(task);
        self.persist()?;

        info!(
            "event=task_add module=service status=ok task_id={id} count={}",
            self.tasks.len()
        );
        Ok(id)
    }

    /// Sets the completion flag of the task with `id`, then saves.
    ///
    /// # Errors
    /// - `NotFound` when no task has `id`; no save is attempted.
    /// - `Persistence` when the save fails; the flag stays updated.
    pub fn set_completed(&mut self, id: TaskId, value: bool) -> StoreResult<()> {
        let position = *self.index.get(&id).ok_or(StoreError::NotFound(id))?;
        self.tasks[position].set_completed(value);
        self.persist()?;

        info!("event=task_toggle module=service status=ok task_id={id} completed={value}");
        Ok(())
    }

    fn persist(&self) -> StoreResult<()> {
        self.persistence.save(&self.tasks)?;
        Ok(())
    }
}
