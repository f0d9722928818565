//! Use-case store layer.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-facing CRUD APIs.
//! - Own the change-notification contract for dependent views.

pub mod task_store;
