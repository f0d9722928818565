//! Task store: use-case CRUD entry points with change notification.
//!
//! # Responsibility
//! - Provide stable create/list/get/update/delete entry points for callers.
//! - Delegate persistence to repository implementations.
//! - Invoke the registered change listener after every successful mutation.
//!
//! # Invariants
//! - Notification fires synchronously inside the mutating call, after the
//!   write succeeds and before the result is returned, so no successful
//!   mutation goes unobserved and none is deferred to a later tick.
//! - Failed mutations (including `NotFound` deletes) do not notify.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{StoreError, StoreResult, TaskRepository};
use log::debug;

/// Listener slot invoked with no payload; callers re-pull via `list`.
pub type ChangeListener = Box<dyn FnMut()>;

/// Use-case store over a single task collection.
///
/// Generic over [`TaskRepository`] so notification semantics can be tested
/// against in-memory fakes as well as the SQLite backend.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    on_change: Option<ChangeListener>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Creates a store using the provided repository implementation.
    ///
    /// The repository (and the connection it borrows) is an explicitly owned
    /// resource of the caller's scope; the store holds no global state.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            on_change: None,
        }
    }

    /// Registers the change listener. A single slot: a second registration
    /// replaces the first.
    pub fn set_on_change(&mut self, listener: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Removes the registered change listener, if any.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Inserts a new record with a storage-assigned id.
    ///
    /// Both fields are stored as given; input validation is a caller
    /// concern. Triggers one change notification on success.
    pub fn create(&mut self, title: &str, description: &str) -> StoreResult<Task> {
        let task = self.repo.insert_task(title, description)?;
        debug!("event=task_create module=store status=ok id={}", task.id);
        self.notify_changed();
        Ok(task)
    }

    /// Returns all current records in store-default (ascending id) order.
    ///
    /// Each call is an independent full traversal.
    pub fn list(&self) -> StoreResult<Vec<Task>> {
        self.repo.list_tasks()
    }

    /// Point lookup by id; `NotFound` when no record has the id.
    pub fn get(&self, id: TaskId) -> StoreResult<Task> {
        self.repo.get_task(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Replaces both text fields of an existing record wholesale; the id is
    /// preserved. Triggers one change notification on success.
    pub fn update(&mut self, id: TaskId, title: &str, description: &str) -> StoreResult<Task> {
        let task = self.repo.update_task(id, title, description)?;
        debug!("event=task_update module=store status=ok id={id}");
        self.notify_changed();
        Ok(task)
    }

    /// Removes the record with the given id.
    ///
    /// Deleting an absent id surfaces `NotFound` instead of silently
    /// succeeding, so callers can tell "deleted" from "nothing to delete";
    /// the store itself never crashes on the miss. Triggers one change
    /// notification on success only.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        self.repo.delete_task(id)?;
        debug!("event=task_delete module=store status=ok id={id}");
        self.notify_changed();
        Ok(())
    }

    fn notify_changed(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener();
        }
    }
}
