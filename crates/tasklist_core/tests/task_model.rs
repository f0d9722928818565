use tasklist_core::Task;

#[test]
fn task_new_keeps_parts_verbatim() {
    let task = Task::new(7, "Buy milk", "2 liters");

    assert_eq!(task.id, 7);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "2 liters");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::new(42, "Write spec", "for review");

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["title"], "Write spec");
    assert_eq!(json["description"], "for review");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_accepts_empty_text_fields() {
    // The store enforces no content constraints; empty strings are a
    // caller-side validation concern and must round-trip untouched.
    let task = Task::new(1, "", "");
    assert!(task.title.is_empty());
    assert!(task.description.is_empty());
}
