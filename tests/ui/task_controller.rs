use chrono::{TimeZone, Utc};
use taskdeck::entities::{TaskCollection, TaskError};
use taskdeck::fixtures::seed_tasks;
use taskdeck::ui::core::{InteractionState, Mode, TaskListController};

fn controller() -> TaskListController {
    TaskListController::new(TaskCollection::from_tasks(seed_tasks()).unwrap())
}

#[test]
fn test_starts_in_normal_mode() {
    let controller = controller();
    assert_eq!(controller.mode(), Mode::Normal);
    assert!(controller.state().selection().is_empty());
    assert!(controller.active_task().is_none());
}

#[test]
fn test_request_edit_selects_the_task() {
    let mut controller = controller();
    controller.request_edit("1").unwrap();

    assert_eq!(controller.state(), &InteractionState::edit("1"));
    assert!(controller.state().is_selected("1"));
    assert_eq!(controller.active_task().unwrap().title, "Design Homepage");
}

#[test]
fn test_request_for_unknown_task_keeps_state() {
    let mut controller = controller();
    assert_eq!(controller.request_edit("42"), Err(TaskError::NotFound("42".to_string())));
    assert_eq!(controller.request_delete("42"), Err(TaskError::NotFound("42".to_string())));
    assert_eq!(controller.mode(), Mode::Normal);
}

#[test]
fn test_reset_returns_to_normal() {
    let mut controller = controller();
    controller.request_delete("2").unwrap();
    assert_eq!(controller.mode(), Mode::Delete);

    controller.reset();
    assert_eq!(controller.state(), &InteractionState::normal());
}

#[test]
fn test_confirm_delete_removes_the_target() {
    let mut controller = controller();
    controller.request_delete("2").unwrap();

    let removed = controller.confirm_delete().unwrap();
    assert_eq!(removed.id, "2");
    assert_eq!(controller.tasks().len(), 1);
    assert_eq!(controller.mode(), Mode::Normal);
}

#[test]
fn test_confirm_delete_outside_delete_mode_fails() {
    let mut controller = controller();
    assert!(controller.confirm_delete().is_err());
    assert_eq!(controller.tasks().len(), 2);
}

#[test]
fn test_apply_submit_in_create_mode_inserts() {
    let mut controller = controller();
    controller.request_create();
    assert_eq!(controller.mode(), Mode::Create);

    let mut task = seed_tasks().remove(1);
    task.id = "3".to_string();
    task.title = "Buy milk".to_string();
    controller.apply_submit(task).unwrap();

    assert_eq!(controller.tasks().len(), 3);
    assert_eq!(controller.tasks().at(2).unwrap().title, "Buy milk");
    assert_eq!(controller.mode(), Mode::Normal);
}

#[test]
fn test_apply_submit_in_edit_mode_replaces_the_target_only() {
    let mut controller = controller();
    controller.request_edit("1").unwrap();

    let mut other = seed_tasks().remove(1);
    other.title = "Hijack".to_string();
    assert!(controller.apply_submit(other).is_err());
    assert_eq!(controller.mode(), Mode::Edit);

    let mut edited = seed_tasks().remove(0);
    edited.title = "Design Landing Page".to_string();
    controller.apply_submit(edited).unwrap();
    assert_eq!(controller.tasks().get("1").unwrap().title, "Design Landing Page");
    assert_eq!(controller.mode(), Mode::Normal);
}

#[test]
fn test_toggle_completed_stamps_update() {
    let mut controller = controller();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();

    assert!(controller.toggle_completed("1", now).unwrap());
    let task = controller.tasks().get("1").unwrap();
    assert!(task.completed);
    assert_eq!(task.updated_at, Some(now));

    assert!(!controller.toggle_completed("2", now).unwrap());
}
