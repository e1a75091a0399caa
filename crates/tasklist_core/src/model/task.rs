//! Task domain model.
//!
//! # Responsibility
//! - Define the single entity persisted in the task collection.
//! - Keep the wire shape (`id`, `title`, `completed`, `createdAt`) stable.
//!
//! # Invariants
//! - `title` and `created_at` are immutable after construction; `id` only
//!   changes when a loaded record carries a duplicate.
//! - `completed` starts as `false` for newly created tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one task.
pub type TaskId = Uuid;

/// One to-do item.
///
/// Serialized with camelCase field names so the persisted record keeps the
/// `createdAt` spelling used by existing stored lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
    /// Captured at creation. Not used for ordering or display.
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not-yet-completed task with a generated ID and the
    /// current time as creation timestamp.
    ///
    /// The title is kept exactly as given; callers validate emptiness.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, Utc::now())
    }

    /// Creates a task with caller-provided identity and timestamp.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TaskId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            created_at,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the completion flag. The only mutation a task supports.
    pub fn set_completed(&mut self, value: bool) {
        self.completed = value;
    }

    /// Replaces the identity of a task whose stored id collides with an
    /// earlier one.
    pub(crate) fn reassign_id(&mut self, id: TaskId) {
        self.id = id;
    }
}
