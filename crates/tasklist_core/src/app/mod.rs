//! Event handling for a mounted task list page.
//!
//! # Responsibility
//! - Validate form submissions and turn them into stored, rendered tasks.
//! - Dispatch row toggles to the task store by id.
//!
//! # Invariants
//! - Every handler runs to completion before the next event is processed.

pub mod controller;
pub mod session;
