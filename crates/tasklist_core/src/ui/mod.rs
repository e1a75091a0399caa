//! Host page model: list container, task form, and rendered rows.
//!
//! # Responsibility
//! - Model the anchors a host surface exposes (list, form, text input).
//! - Render one row per task and turn toggle activations into events.
//!
//! # Invariants
//! - Rows are only ever appended; existing rows keep title and identity.
//! - Rows reference tasks by `TaskId` only.

pub mod form;
pub mod list;
pub mod page;
pub mod row;
