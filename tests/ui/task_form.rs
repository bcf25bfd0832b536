use chrono::{NaiveDate, TimeZone, Utc};
use taskdeck::entities::Priority;
use taskdeck::fixtures::seed_tasks;
use taskdeck::ui::forms::{FieldError, FormField, TaskForm};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
}

fn type_text(form: &mut TaskForm, text: &str) {
    for c in text.chars() {
        form.insert_char(c);
    }
}

#[test]
fn test_blank_form() {
    let form = TaskForm::from_task(None);
    assert!(form.is_create());
    assert!(!form.is_dirty());
    assert_eq!(form.focus(), FormField::Title);
    assert_eq!(form.priority(), None);
    assert!(!form.completed());
}

#[test]
fn test_form_populated_from_task() {
    let task = &seed_tasks()[0];
    let form = TaskForm::from_task(Some(task));

    assert!(!form.is_create());
    assert_eq!(form.text(FormField::Title).unwrap().value(), "Design Homepage");
    assert_eq!(form.text(FormField::DueDate).unwrap().value(), "2024-07-10");
    assert_eq!(form.priority(), Some(Priority::High));
    assert!(form.text(FormField::Priority).is_none());
}

#[test]
fn test_whitespace_title_is_required() {
    let mut form = TaskForm::from_task(None);
    form.set_focus(FormField::Description);
    form.set_text(FormField::Title, "   ");

    let errors = form.build_task(now(), "user1").unwrap_err();
    assert_eq!(errors, vec![(FormField::Title, FieldError::TitleRequired)]);
    assert_eq!(form.focus(), FormField::Title);
    assert_eq!(
        form.error_for(FormField::Title).map(ToString::to_string).as_deref(),
        Some("Title is required")
    );
}

#[test]
fn test_invalid_due_date() {
    let mut form = TaskForm::from_task(None);
    type_text(&mut form, "Buy milk");
    form.set_text(FormField::DueDate, "tomorrow");

    let errors = form.build_task(now(), "user1").unwrap_err();
    assert_eq!(
        errors,
        vec![(FormField::DueDate, FieldError::InvalidDate("tomorrow".to_string()))]
    );
    assert_eq!(form.focus(), FormField::DueDate);
}

#[test]
fn test_errors_clear_once_fixed() {
    let mut form = TaskForm::from_task(None);
    assert!(form.validate().is_err());
    assert_eq!(form.errors().len(), 1);

    type_text(&mut form, "B");
    assert!(form.errors().is_empty());
}

#[test]
fn test_errors_wait_for_first_submit() {
    let mut form = TaskForm::from_task(None);
    form.set_text(FormField::DueDate, "nope");
    assert!(form.errors().is_empty());
}

#[test]
fn test_create_builds_a_fresh_task() {
    let mut form = TaskForm::from_task(None);
    type_text(&mut form, "Buy milk");
    form.set_text(FormField::DueDate, "2024-07-12");
    form.set_priority(Some(Priority::Medium));

    let task = form.build_task(now(), "user7").unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 7, 12));
    assert_eq!(task.priority, Some(Priority::Medium));
    assert_eq!(task.description, None);
    assert_eq!(task.created_by, "user7");
    assert_eq!(task.created_at, now());
    assert_eq!(task.updated_at, None);
    assert!(uuid::Uuid::parse_str(&task.id).is_ok());
}

#[test]
fn test_edit_keeps_identity() {
    let original = seed_tasks().remove(0);
    let mut form = TaskForm::from_task(Some(&original));
    form.set_text(FormField::Title, "Design Landing Page");
    form.set_priority(None);
    form.toggle_completed();

    let task = form.build_task(now(), "someone-else").unwrap();
    assert_eq!(task.id, original.id);
    assert_eq!(task.created_at, original.created_at);
    assert_eq!(task.created_by, original.created_by);
    assert_eq!(task.assigned_to, original.assigned_to);
    assert_eq!(task.updated_at, Some(now()));
    assert_eq!(task.priority, None);
    assert!(task.completed);
}

#[test]
fn test_dirty_tracking() {
    let original = seed_tasks().remove(0);
    let mut form = TaskForm::from_task(Some(&original));

    form.insert_char('!');
    assert!(form.is_dirty());
    form.backspace();
    assert!(!form.is_dirty());
}

#[test]
fn test_cursor_editing() {
    let mut form = TaskForm::from_task(None);
    type_text(&mut form, "ac");
    form.move_cursor_left();
    form.insert_char('b');
    form.move_cursor_home();
    form.delete();
    form.move_cursor_end();
    form.insert_char('d');

    assert_eq!(form.text(FormField::Title).unwrap().value(), "bcd");
}

#[test]
fn test_focus_wraps() {
    let mut form = TaskForm::from_task(None);
    form.focus_previous();
    assert_eq!(form.focus(), FormField::Completed);
    form.focus_next();
    assert_eq!(form.focus(), FormField::Title);
}

#[test]
fn test_preview_json() {
    let mut form = TaskForm::from_task(None);
    type_text(&mut form, "Buy milk");
    form.set_priority(Some(Priority::Low));

    let json = form.preview_json().unwrap();
    assert!(json.contains("\"title\": \"Buy milk\""));
    assert!(json.contains("\"dueDate\": \"\""));
    assert!(json.contains("\"priority\": \"low\""));
}
