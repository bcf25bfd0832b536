use crossterm::event::{KeyCode, KeyEvent};
use taskdeck::config::Config;
use taskdeck::entities::TaskCollection;
use taskdeck::fixtures::seed_tasks;
use taskdeck::ui::components::{DialogPhase, TaskListComponent};
use taskdeck::ui::core::{Action, Component, DialogType, Mode, ShortcutDispatcher};
use taskdeck::ui::forms::FormField;

use super::helpers::{buffer_text, ctrl, key, test_terminal};

fn list() -> TaskListComponent {
    TaskListComponent::new(TaskCollection::from_tasks(seed_tasks()).unwrap(), &Config::default())
}

fn press(list: &mut TaskListComponent, event: KeyEvent) -> Action {
    let action = list.handle_key_events(event);
    list.update(action)
}

fn type_text(list: &mut TaskListComponent, text: &str) {
    for c in text.chars() {
        press(list, key(KeyCode::Char(c)));
    }
}

fn render(list: &mut TaskListComponent) -> String {
    let mut terminal = test_terminal(90, 30);
    terminal.draw(|f| list.render(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_rows_show_title_description_and_meta() {
    let mut list = list();
    let screen = render(&mut list);

    assert!(screen.contains("Tasks (2)"));
    assert!(screen.contains("Design Homepage"));
    assert!(screen.contains("Create wireframes and mockups for the new homepage."));
    assert!(screen.contains("Due: Wed Jul 10 2024 | Priority: high"));
    assert!(screen.contains("Implement Authentication"));
    assert!(screen.contains("Due: N/A | Priority: N/A"));
}

#[test]
fn test_empty_list_hint() {
    let mut list = TaskListComponent::new(TaskCollection::new(), &Config::default());
    let screen = render(&mut list);
    assert!(screen.contains("No tasks yet. Press 'a' to add one."));
    assert_eq!(press(&mut list, key(KeyCode::Char('e'))), Action::None);
}

#[test]
fn test_focus_moves_and_wraps() {
    let mut list = list();
    assert_eq!(list.focused_task().unwrap().id, "1");

    press(&mut list, key(KeyCode::Char('j')));
    assert_eq!(list.focused_task().unwrap().id, "2");

    press(&mut list, key(KeyCode::Down));
    assert_eq!(list.focused_task().unwrap().id, "1");

    press(&mut list, key(KeyCode::Up));
    assert_eq!(list.focused_task().unwrap().id, "2");
}

#[test]
fn test_create_flow() {
    let mut list = list();
    press(&mut list, key(KeyCode::Char('a')));
    assert_eq!(list.controller().mode(), Mode::Create);
    assert!(list.dialog().is_open());
    assert!(list.is_capturing_input());

    let screen = render(&mut list);
    assert!(screen.contains("Create new task"));
    assert!(screen.contains("[ Create new ]"));

    type_text(&mut list, "Buy milk");
    press(&mut list, key(KeyCode::Enter));

    assert_eq!(list.controller().mode(), Mode::Normal);
    assert!(!list.dialog().is_open());
    assert_eq!(list.controller().tasks().len(), 3);
    assert_eq!(list.focused_task().unwrap().title, "Buy milk");
    assert_eq!(list.focused_task().unwrap().created_by, "user1");
}

#[test]
fn test_submit_with_empty_title_keeps_dialog_open() {
    let mut list = list();
    press(&mut list, key(KeyCode::Char('a')));
    type_text(&mut list, "  ");
    press(&mut list, key(KeyCode::Enter));

    assert!(list.dialog().is_open());
    assert_eq!(list.controller().tasks().len(), 2);
    let screen = render(&mut list);
    assert!(screen.contains("Title is required"));
}

#[test]
fn test_unchanged_edit_closes_without_prompt() {
    let mut list = list();
    press(&mut list, key(KeyCode::Char('e')));
    assert_eq!(list.controller().mode(), Mode::Edit);
    assert!(list.controller().state().is_selected("1"));
    assert!(render(&mut list).contains("Edit: Design Homepage"));

    press(&mut list, key(KeyCode::Esc));
    assert!(!list.dialog().is_open());
    assert_eq!(list.controller().mode(), Mode::Normal);
}

#[test]
fn test_changed_edit_asks_before_discarding() {
    let mut list = list();
    press(&mut list, key(KeyCode::Enter));
    type_text(&mut list, " v2");
    press(&mut list, key(KeyCode::Esc));
    assert_eq!(list.dialog().phase(), DialogPhase::ConfirmingDiscard);
    assert!(render(&mut list).contains("Discard changes?"));

    // Keep editing
    press(&mut list, key(KeyCode::Char('n')));
    assert_eq!(list.dialog().phase(), DialogPhase::Editing);
    let form = list.dialog().form().unwrap();
    assert_eq!(form.text(FormField::Title).unwrap().value(), "Design Homepage v2");

    // Discard for real
    press(&mut list, key(KeyCode::Esc));
    press(&mut list, key(KeyCode::Char('y')));
    assert!(!list.dialog().is_open());
    assert_eq!(list.controller().tasks().get("1").unwrap().title, "Design Homepage");
}

#[test]
fn test_edit_submit_updates_in_place() {
    let mut list = list();
    press(&mut list, key(KeyCode::Char('e')));

    // Title -> Due date -> Description -> Priority
    press(&mut list, key(KeyCode::Tab));
    press(&mut list, key(KeyCode::Tab));
    press(&mut list, key(KeyCode::Tab));
    press(&mut list, key(KeyCode::Char(' ')));
    press(&mut list, key(KeyCode::Enter));

    let task = list.controller().tasks().at(0).unwrap();
    assert_eq!(task.id, "1");
    assert_eq!(task.priority, None);
    assert!(task.updated_at.is_some());
    assert_eq!(list.controller().mode(), Mode::Normal);
}

#[test]
fn test_delete_prompt() {
    let mut list = list();
    press(&mut list, key(KeyCode::Char('d')));
    assert_eq!(list.controller().mode(), Mode::Delete);
    assert!(render(&mut list).contains("Confirm Delete"));

    press(&mut list, key(KeyCode::Char('n')));
    assert_eq!(list.controller().mode(), Mode::Normal);
    assert_eq!(list.controller().tasks().len(), 2);

    press(&mut list, key(KeyCode::Char('d')));
    press(&mut list, key(KeyCode::Char('y')));
    assert_eq!(list.controller().tasks().len(), 1);
    assert_eq!(list.focused_task().unwrap().id, "2");
}

#[test]
fn test_space_toggles_completion() {
    let mut list = list();
    press(&mut list, key(KeyCode::Char(' ')));
    assert!(list.controller().tasks().get("1").unwrap().completed);
}

#[test]
fn test_unknown_task_request_reports_error() {
    let mut list = list();
    let action = list.update(Action::RequestEdit("42".to_string()));
    assert!(matches!(action, Action::ShowDialog(DialogType::Error(_))));
    assert_eq!(list.controller().mode(), Mode::Normal);
}

#[test]
fn test_shortcuts_follow_focus() {
    let mut list = list();
    let mut dispatcher = ShortcutDispatcher::default();

    list.sync_shortcuts(&mut dispatcher);
    assert_eq!(dispatcher.registration_count(), 2);
    assert_eq!(dispatcher.dispatch(&ctrl('e')), Some(Action::RequestEdit("1".to_string())));

    press(&mut list, key(KeyCode::Char('j')));
    list.sync_shortcuts(&mut dispatcher);
    assert_eq!(dispatcher.registration_count(), 2);
    assert_eq!(dispatcher.dispatch(&ctrl('d')), Some(Action::RequestDelete("2".to_string())));

    // Nothing bound while the editor is open
    press(&mut list, key(KeyCode::Char('a')));
    list.sync_shortcuts(&mut dispatcher);
    assert_eq!(dispatcher.registration_count(), 0);
    assert_eq!(dispatcher.dispatch(&ctrl('e')), None);

    list.update(Action::ResetInteraction);
    list.sync_shortcuts(&mut dispatcher);
    list.unbind_shortcuts(&mut dispatcher);
    assert_eq!(dispatcher.registration_count(), 0);
}

#[test]
fn test_disabled_shortcuts_bind_nothing() {
    let mut config = Config::default();
    config.shortcuts.enabled = false;
    let mut list = TaskListComponent::new(TaskCollection::from_tasks(seed_tasks()).unwrap(), &config);
    let mut dispatcher = ShortcutDispatcher::default();

    list.sync_shortcuts(&mut dispatcher);
    assert_eq!(dispatcher.registration_count(), 0);
}
