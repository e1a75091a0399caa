//! Session services over the persistence layer.
//!
//! # Responsibility
//! - Own the authoritative in-memory task collection for one session.
//! - Keep UI code decoupled from storage details.

pub mod task_store;
