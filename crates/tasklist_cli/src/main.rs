//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tasklist_core::db::open_db_in_memory;
use tasklist_core::{SqliteTaskRepository, StoreError, TaskStore};

fn main() -> Result<(), StoreError> {
    println!("tasklist_core version={}", tasklist_core::core_version());

    // A throwaway in-memory pass through the full CRUD surface, so the probe
    // exercises real store wiring without touching any on-disk state.
    let conn = open_db_in_memory()?;
    let repo = SqliteTaskRepository::try_new(&conn)?;
    let mut store = TaskStore::new(repo);

    store.set_on_change(|| println!("collection changed"));

    let milk = store.create("Buy milk", "2 liters")?;
    let spec = store.create("Write spec", "for review")?;
    store.update(milk.id, "Buy milk", "3 liters")?;
    store.delete(spec.id)?;

    for task in store.list()? {
        println!("task id={} title={} description={}", task.id, task.title, task.description);
    }

    Ok(())
}
