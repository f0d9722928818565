//! Task repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `tasks` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Repository construction verifies the connection carries the expected
//!   schema before any data access.
//! - Read and write failures are surfaced as distinct error classes so
//!   callers can tell a failed lookup from a failed mutation.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT id, title, description FROM tasks";

const REQUIRED_TABLE: &str = "tasks";
const REQUIRED_COLUMNS: &[&str] = &["id", "title", "description"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy for the task store.
///
/// `StorageUnavailable` and the schema-verification variants mean the
/// environment cannot provide usable storage at all; `ReadFailed` and
/// `WriteFailed` are per-operation engine errors; `NotFound` is the semantic
/// miss for point operations on an absent id.
#[derive(Debug)]
pub enum StoreError {
    StorageUnavailable(DbError),
    ReadFailed(rusqlite::Error),
    WriteFailed(rusqlite::Error),
    NotFound(TaskId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageUnavailable(err) => write!(f, "storage unavailable: {err}"),
            Self::ReadFailed(err) => write!(f, "read failed: {err}"),
            Self::WriteFailed(err) => write!(f, "write failed: {err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table missing: {table}")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column missing: {table}.{column}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageUnavailable(err) => Some(err),
            Self::ReadFailed(err) | Self::WriteFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::StorageUnavailable(value)
    }
}

/// Repository interface for task CRUD operations.
///
/// The store layer is generic over this trait so notification logic stays
/// independent of the SQLite backend.
pub trait TaskRepository {
    /// Inserts a new record; the id is assigned by storage.
    fn insert_task(&self, title: &str, description: &str) -> StoreResult<Task>;
    /// Replaces both text fields of an existing record, id preserved.
    fn update_task(&self, id: TaskId, title: &str, description: &str) -> StoreResult<Task>;
    /// Point lookup; `Ok(None)` when no record has the id.
    fn get_task(&self, id: TaskId) -> StoreResult<Option<Task>>;
    /// Full forward scan in ascending-id order.
    fn list_tasks(&self) -> StoreResult<Vec<Task>>;
    /// Hard delete; `NotFound` when no record has the id.
    fn delete_task(&self, id: TaskId) -> StoreResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Wraps a connection after verifying it carries the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the version this binary expects (0 means setup never ran).
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the version
    ///   matches but the physical schema does not.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        verify_schema(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, title: &str, description: &str) -> StoreResult<Task> {
        self.conn
            .execute(
                "INSERT INTO tasks (title, description) VALUES (?1, ?2);",
                params![title, description],
            )
            .map_err(StoreError::WriteFailed)?;

        Ok(Task::new(self.conn.last_insert_rowid(), title, description))
    }

    fn update_task(&self, id: TaskId, title: &str, description: &str) -> StoreResult<Task> {
        let changed = self
            .conn
            .execute(
                "UPDATE tasks SET title = ?1, description = ?2 WHERE id = ?3;",
                params![title, description, id],
            )
            .map_err(StoreError::WriteFailed)?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(Task::new(id, title, description))
    }

    fn get_task(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))
            .map_err(StoreError::ReadFailed)?;

        let mut rows = stmt.query(params![id]).map_err(StoreError::ReadFailed)?;
        if let Some(row) = rows.next().map_err(StoreError::ReadFailed)? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        // Ascending id is the store-default traversal order; it is stable for
        // a given collection state across repeated scans.
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))
            .map_err(StoreError::ReadFailed)?;

        let mut rows = stmt.query([]).map_err(StoreError::ReadFailed)?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next().map_err(StoreError::ReadFailed)? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn delete_task(&self, id: TaskId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])
            .map_err(StoreError::WriteFailed)?;

        // The engine reports success for deleting an absent key; surface the
        // miss explicitly so callers can tell "deleted" from "nothing there".
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn verify_schema(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(StoreError::ReadFailed)?;

    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [REQUIRED_TABLE],
            |row| row.get(0),
        )
        .map_err(StoreError::ReadFailed)?;
    if table_exists == 0 {
        return Err(StoreError::MissingRequiredTable(REQUIRED_TABLE));
    }

    for &column in REQUIRED_COLUMNS {
        let column_exists: i64 = conn
            .query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2
                );",
                params![REQUIRED_TABLE, column],
                |row| row.get(0),
            )
            .map_err(StoreError::ReadFailed)?;
        if column_exists == 0 {
            return Err(StoreError::MissingRequiredColumn {
                table: REQUIRED_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let id: TaskId = row
        .get("id")
        .map_err(|err| StoreError::InvalidData(format!("tasks.id: {err}")))?;
    let title: String = row
        .get("title")
        .map_err(|err| StoreError::InvalidData(format!("tasks.title: {err}")))?;
    let description: String = row
        .get("description")
        .map_err(|err| StoreError::InvalidData(format!("tasks.description: {err}")))?;

    Ok(Task {
        id,
        title,
        description,
    })
}
