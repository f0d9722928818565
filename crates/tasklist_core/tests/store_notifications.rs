use std::cell::RefCell;
use std::rc::Rc;
use tasklist_core::db::open_db_in_memory;
use tasklist_core::{SqliteTaskRepository, StoreError, TaskStore};

#[test]
fn each_successful_mutation_notifies_exactly_once() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let notifications = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&notifications);
    store.set_on_change(move || *counter.borrow_mut() += 1);

    let task = store.create("Buy milk", "2 liters").unwrap();
    assert_eq!(*notifications.borrow(), 1);

    store.update(task.id, "Buy milk", "3 liters").unwrap();
    assert_eq!(*notifications.borrow(), 2);

    store.delete(task.id).unwrap();
    assert_eq!(*notifications.borrow(), 3);
}

#[test]
fn notification_fires_before_the_mutating_call_returns() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let timeline = Rc::new(RefCell::new(Vec::new()));
    let listener_log = Rc::clone(&timeline);
    store.set_on_change(move || listener_log.borrow_mut().push("notified"));

    store.create("ordering", "check").unwrap();
    timeline.borrow_mut().push("returned");

    assert_eq!(*timeline.borrow(), vec!["notified", "returned"]);
}

#[test]
fn reads_do_not_notify() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let task = store.create("read me", "twice").unwrap();

    let notifications = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&notifications);
    store.set_on_change(move || *counter.borrow_mut() += 1);

    store.get(task.id).unwrap();
    store.list().unwrap();
    store.list().unwrap();

    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn failed_mutations_do_not_notify() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let notifications = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&notifications);
    store.set_on_change(move || *counter.borrow_mut() += 1);

    let missing = 999;
    assert!(matches!(
        store.update(missing, "t", "d"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.delete(missing),
        Err(StoreError::NotFound(_))
    ));

    assert_eq!(*notifications.borrow(), 0);
}

#[test]
fn listener_slot_is_single_and_replaceable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let first = Rc::new(RefCell::new(0u32));
    let second = Rc::new(RefCell::new(0u32));

    let first_counter = Rc::clone(&first);
    store.set_on_change(move || *first_counter.borrow_mut() += 1);
    store.create("a", "counted by first").unwrap();

    let second_counter = Rc::clone(&second);
    store.set_on_change(move || *second_counter.borrow_mut() += 1);
    store.create("b", "counted by second").unwrap();

    assert_eq!(*first.borrow(), 1);
    assert_eq!(*second.borrow(), 1);
}

#[test]
fn cleared_listener_stops_receiving() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let notifications = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&notifications);
    store.set_on_change(move || *counter.borrow_mut() += 1);

    store.create("a", "observed").unwrap();
    store.clear_on_change();
    store.create("b", "unobserved").unwrap();

    assert_eq!(*notifications.borrow(), 1);
}

#[test]
fn list_after_mutation_completion_reflects_the_mutation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut store = TaskStore::new(repo);

    let task = store.create("visible", "immediately").unwrap();
    let listed = store.list().unwrap();
    assert!(listed.iter().any(|t| t.id == task.id));

    store.delete(task.id).unwrap();
    let listed = store.list().unwrap();
    assert!(listed.iter().all(|t| t.id != task.id));
}
