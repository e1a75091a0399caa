//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical `Task` record shared by storage and rendering.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` assigned at creation.
//! - Only the completion flag changes after creation.

pub mod task;
