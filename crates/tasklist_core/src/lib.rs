//! Core logic for the local task list.
//! Owns the task model, its key-value persistence, and page event handling.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use app::controller::{validate_title, IgnoreReason, SubmitOutcome};
pub use app::session::{EventOutcome, PageEvent, TaskListApp};
pub use config::{AppConfig, ConfigError, ConfigOverrides, StorageLocation};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskId};
pub use repo::kv_store::{
    KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore,
};
pub use repo::task_persistence::{
    PersistenceError, PersistenceResult, TaskPersistence, TASKS_STORAGE_KEY,
};
pub use service::task_store::{StoreError, StoreResult, TaskStore};
pub use ui::form::{TaskForm, TextInput};
pub use ui::list::ListContainer;
pub use ui::page::{Anchor, Page, PageCapabilities};
pub use ui::row::{Row, ToggleEvent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
