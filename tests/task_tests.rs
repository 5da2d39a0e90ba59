use std::str::FromStr;

use task_cli::task::{Task, TaskStatus, TaskStore};

#[test]
fn test_task_creation() {
    let task = Task::new(1, "Buy groceries");

    assert_eq!(task.id, 1);
    assert_eq!(task.description, "Buy groceries");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn test_task_with_status() {
    let task = Task::new(2, "Cook dinner").with_status(TaskStatus::Done);

    assert!(task.is_done());
}

#[test]
fn test_task_touch_refreshes_updated_at() {
    let mut task = Task::new(1, "Buy groceries");
    let before = task.updated_at;

    task.touch();

    assert!(task.updated_at >= before);
    assert_eq!(task.created_at, before);
}

#[test]
fn test_status_display() {
    assert_eq!(TaskStatus::Todo.to_string(), "todo");
    assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
    assert_eq!(TaskStatus::Done.to_string(), "done");
}

#[test]
fn test_status_from_str() {
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("DONE").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("archived").is_err());
}

#[test]
fn test_status_serde_tokens() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!(
        serde_json::from_str::<TaskStatus>("\"done\"").unwrap(),
        TaskStatus::Done
    );
}

#[test]
fn test_task_serde_field_names() {
    let task = Task::new(7, "Water plants");
    let json = serde_json::to_value(&task).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["status"], "todo");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
}

#[test]
fn test_next_id_empty_store() {
    assert_eq!(TaskStore::next_id(&[]), 1);
}

#[test]
fn test_next_id_is_max_plus_one() {
    let tasks = vec![Task::new(1, "a"), Task::new(2, "b")];
    assert_eq!(TaskStore::next_id(&tasks), 3);

    // Gaps left by deletions do not get reused.
    let tasks = vec![Task::new(2, "a"), Task::new(7, "b")];
    assert_eq!(TaskStore::next_id(&tasks), 8);
}
