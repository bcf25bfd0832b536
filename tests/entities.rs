use taskdeck::entities::{Priority, Task, TaskCollection, TaskError};
use taskdeck::fixtures::seed_tasks;

fn task(id: &str, title: &str) -> Task {
    let mut task = seed_tasks().remove(1);
    task.id = id.to_string();
    task.title = title.to_string();
    task
}

#[test]
fn test_seed_tasks_form_a_valid_collection() {
    let tasks = TaskCollection::from_tasks(seed_tasks()).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.at(0).unwrap().title, "Design Homepage");
    assert_eq!(tasks.position("2"), Some(1));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut tasks = TaskCollection::from_tasks(seed_tasks()).unwrap();
    assert_eq!(
        tasks.insert(task("1", "Another")),
        Err(TaskError::DuplicateId("1".to_string()))
    );
    assert_eq!(tasks.len(), 2);
}

#[test]
fn test_blank_titles_are_rejected() {
    let mut tasks = TaskCollection::new();
    assert_eq!(tasks.insert(task("3", "   ")), Err(TaskError::EmptyTitle));
    assert!(tasks.is_empty());
}

#[test]
fn test_replace_keeps_position() {
    let mut tasks = TaskCollection::from_tasks(seed_tasks()).unwrap();
    tasks.replace(task("1", "Design Landing Page")).unwrap();
    assert_eq!(tasks.at(0).unwrap().title, "Design Landing Page");
    assert_eq!(
        tasks.replace(task("9", "Missing")),
        Err(TaskError::NotFound("9".to_string()))
    );
}

#[test]
fn test_remove() {
    let mut tasks = TaskCollection::from_tasks(seed_tasks()).unwrap();
    let removed = tasks.remove("1").unwrap();
    assert_eq!(removed.title, "Design Homepage");
    assert!(!tasks.contains("1"));
    assert!(tasks.remove("1").is_err());
}

#[test]
fn test_priority_cycle() {
    assert_eq!(Priority::cycle(None), Some(Priority::Low));
    assert_eq!(Priority::cycle(Some(Priority::High)), None);
    assert_eq!(Priority::cycle_back(None), Some(Priority::High));
    assert_eq!(Priority::cycle_back(Some(Priority::Low)), None);
}

#[test]
fn test_priority_parse() {
    assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
    assert_eq!(" high ".parse::<Priority>().unwrap(), Priority::High);
    assert!("urgent".parse::<Priority>().is_err());
}

#[test]
fn test_task_serializes_camel_case() {
    let json = serde_json::to_string(&seed_tasks()[0]).unwrap();
    assert!(json.contains("\"dueDate\":\"2024-07-10\""));
    assert!(json.contains("\"createdBy\":\"user1\""));
    assert!(json.contains("\"priority\":\"high\""));
}
