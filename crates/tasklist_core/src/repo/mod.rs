//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for task records.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   engine transport errors (`ReadFailed`/`WriteFailed`).

pub mod task_repo;
