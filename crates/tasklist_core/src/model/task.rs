//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the task store.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - `id` values are unique among current and historical records of one
//!   persisted collection and are never reused.

use serde::{Deserialize, Serialize};

/// Stable storage-assigned identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Canonical task record: one short text entry with a stable id.
///
/// The store enforces no length or content constraints on the text fields;
/// input validation is a caller concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Storage-assigned id, monotonically increasing, immutable.
    pub id: TaskId,
    /// Short task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
}

impl Task {
    /// Builds a record from already-persisted parts.
    ///
    /// Used by read paths and tests; insert paths receive their id from the
    /// storage engine instead of constructing one.
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}
