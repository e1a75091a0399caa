//! Persistence layer: key-value backends and the task record adapter.
//!
//! # Responsibility
//! - Define the string key-value contract the task list persists through.
//! - Isolate SQLite details from the task store.
//!
//! # Invariants
//! - The whole collection lives in a single record under one fixed key.
//! - Every save fully overwrites that record (last writer wins).

pub mod kv_store;
pub mod task_persistence;
