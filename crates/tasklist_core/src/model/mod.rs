//! Domain model for the task store.
//!
//! # Responsibility
//! - Define the canonical data structure used by repository and store layers.
//!
//! # Invariants
//! - Every record is identified by a stable storage-assigned `TaskId`.
//! - Deletion is a hard delete; no tombstones are kept.

pub mod task;
