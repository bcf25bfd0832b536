//! Task list with its interaction state, editor dialog and delete prompt.
//!
//! Keys move the focused row and request create, edit, delete or a completion
//! toggle. Requests become [`Action`]s that come back through `update`, which
//! drives the [`TaskListController`]; the editor dialog then follows the
//! controller's state. While the list is idle the focused row also answers to
//! the edit and delete keyboard shortcuts.

use crate::config::{Config, DisplayConfig};
use crate::constants::{ADD_TASK_LABEL, EMPTY_TASK_LIST};
use crate::entities::{Task, TaskCollection, TaskError};
use crate::icons::IconService;
use crate::ui::components::dialogs::task_dialogs;
use crate::ui::components::task_dialog_component::{DialogOutcome, TaskDialogComponent};
use crate::ui::components::task_list_item_component::TaskItem;
use crate::ui::core::{
    actions::{Action, DialogType},
    BindingId, Component, Mode, ShortcutDispatcher, ShortcutOptions, TaskListController,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Key labels bound for the focused row
const EDIT_SHORTCUT: &str = "e";
const DELETE_SHORTCUT: &str = "d";

pub struct TaskListComponent {
    controller: TaskListController,
    dialog: TaskDialogComponent,
    selected_index: usize,
    list_state: ListState,
    icons: IconService,
    display: DisplayConfig,
    shortcuts_enabled: bool,
    bindings: Vec<BindingId>,
    /// Task the current bindings act on; `Some(None)` once synced with nothing to bind
    bound_for: Option<Option<String>>,
}

impl TaskListComponent {
    pub fn new(tasks: TaskCollection, config: &Config) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let mut list_state = ListState::default();
        if !tasks.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            controller: TaskListController::new(tasks),
            dialog: TaskDialogComponent::new(icons.clone(), config.user.id.clone(), config.display.show_form_preview),
            selected_index: 0,
            list_state,
            icons,
            display: config.display.clone(),
            shortcuts_enabled: config.shortcuts.enabled,
            bindings: Vec::new(),
            bound_for: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &TaskListController {
        &self.controller
    }

    #[must_use]
    pub fn dialog(&self) -> &TaskDialogComponent {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut TaskDialogComponent {
        &mut self.dialog
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn focused_task(&self) -> Option<&Task> {
        self.controller.tasks().at(self.selected_index)
    }

    /// Task the edit and delete shortcuts currently target
    #[must_use]
    pub fn shortcut_target(&self) -> Option<&str> {
        if self.bindings.is_empty() {
            return None;
        }
        self.bound_for.as_ref().and_then(|target| target.as_deref())
    }

    /// Whether the list is waiting on the editor or the delete prompt
    #[must_use]
    pub fn is_capturing_input(&self) -> bool {
        self.dialog.is_open() || self.controller.mode() == Mode::Delete
    }

    fn focused_id(&self) -> Option<String> {
        self.focused_task().map(|t| t.id.clone())
    }

    fn select(&mut self, index: usize) {
        let len = self.controller.tasks().len();
        self.selected_index = if len == 0 { 0 } else { index.min(len - 1) };
        self.list_state
            .select(if len == 0 { None } else { Some(self.selected_index) });
    }

    fn sync_dialog(&mut self) {
        self.dialog.sync(self.controller.state(), self.controller.tasks());
    }

    fn error_action(error: TaskError) -> Action {
        log::error!("Tasks: {}", error);
        Action::ShowDialog(DialogType::Error(error.to_string()))
    }

    fn apply_outcome(&mut self, outcome: DialogOutcome) -> Action {
        let action = match outcome {
            DialogOutcome::Pending => Action::None,
            DialogOutcome::Closed => {
                self.controller.reset();
                Action::None
            }
            DialogOutcome::Submitted(task) => {
                let task_id = task.id.clone();
                match self.controller.apply_submit(task) {
                    Ok(()) => {
                        if let Some(index) = self.controller.tasks().position(&task_id) {
                            self.select(index);
                        }
                        Action::None
                    }
                    Err(e) => Self::error_action(e),
                }
            }
        };
        self.sync_dialog();
        action
    }

    fn handle_delete_prompt(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => match self.controller.confirm_delete() {
                Ok(_) => {
                    self.select(self.selected_index);
                    Action::None
                }
                Err(e) => {
                    self.controller.reset();
                    Self::error_action(e)
                }
            },
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.controller.reset();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Keep the edit and delete shortcuts bound to the focused row
    ///
    /// Nothing is bound while the editor or delete prompt is up.
    pub fn sync_shortcuts(&mut self, dispatcher: &mut ShortcutDispatcher) {
        let target = if self.controller.mode() == Mode::Normal {
            self.focused_id()
        } else {
            None
        };
        if self.bound_for.as_ref() == Some(&target) {
            return;
        }

        self.unbind_shortcuts(dispatcher);
        if let Some(task_id) = &target {
            let options = ShortcutOptions {
                disabled: !self.shortcuts_enabled,
                modifier: None,
            };
            let edit_id = task_id.clone();
            let delete_id = task_id.clone();
            let bound = [
                dispatcher.bind(EDIT_SHORTCUT, move || Action::RequestEdit(edit_id.clone()), options),
                dispatcher.bind(DELETE_SHORTCUT, move || Action::RequestDelete(delete_id.clone()), options),
            ];
            for result in bound {
                match result {
                    Ok(Some(id)) => self.bindings.push(id),
                    Ok(None) => {}
                    Err(e) => log::warn!("Tasks: shortcut not bound: {}", e),
                }
            }
            log::debug!("Tasks: shortcuts target task {}", task_id);
        }
        self.bound_for = Some(target);
    }

    pub fn unbind_shortcuts(&mut self, dispatcher: &mut ShortcutDispatcher) {
        for id in self.bindings.drain(..) {
            dispatcher.unbind(id);
        }
        self.bound_for = None;
    }

    /// Draw the rows only
    pub fn render_list(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Tasks ({}) ", self.controller.tasks().len()))
            .title_style(Style::default().fg(Color::White))
            .title_bottom(Line::from(vec![
                Span::styled(" a ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(format!("{} ", ADD_TASK_LABEL), Style::default().fg(Color::Gray)),
            ]))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.controller.tasks().is_empty() {
            f.render_widget(
                Paragraph::new(EMPTY_TASK_LIST)
                    .style(Style::default().fg(Color::Gray))
                    .block(block),
                rect,
            );
            return;
        }

        let state = self.controller.state();
        let items: Vec<ListItem> = self
            .controller
            .tasks()
            .iter()
            .enumerate()
            .map(|(index, task)| {
                TaskItem::new(task, &self.icons, state.is_selected(&task.id))
                    .render(index == self.selected_index, &self.display)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_open() {
            let outcome = self.dialog.handle_key(key, datetime::now_utc());
            return self.apply_outcome(outcome);
        }
        if self.controller.mode() == Mode::Delete {
            return self.handle_delete_prompt(key);
        }
        // Modified keys belong to the shortcut dispatcher and the shell
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) {
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Char('a') => Action::RequestCreate,
            KeyCode::Char('e') | KeyCode::Enter => self.focused_id().map_or(Action::None, Action::RequestEdit),
            KeyCode::Char('d') => self.focused_id().map_or(Action::None, Action::RequestDelete),
            KeyCode::Char(' ') => self.focused_id().map_or(Action::None, Action::ToggleTaskCompleted),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let result = match action {
            Action::NextTask => {
                let len = self.controller.tasks().len();
                if len > 0 {
                    self.select((self.selected_index + 1) % len);
                }
                Ok(())
            }
            Action::PreviousTask => {
                let len = self.controller.tasks().len();
                if len > 0 {
                    self.select(if self.selected_index == 0 { len - 1 } else { self.selected_index - 1 });
                }
                Ok(())
            }
            Action::RequestCreate => {
                self.controller.request_create();
                Ok(())
            }
            Action::RequestEdit(task_id) => self.controller.request_edit(&task_id),
            Action::RequestDelete(task_id) => self.controller.request_delete(&task_id),
            Action::ToggleTaskCompleted(task_id) => self
                .controller
                .toggle_completed(&task_id, datetime::now_utc())
                .map(|_| ()),
            Action::ResetInteraction => {
                self.controller.reset();
                Ok(())
            }
            other => return other,
        };

        self.sync_dialog();
        match result {
            Ok(()) => Action::None,
            Err(e) => Self::error_action(e),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_list(f, rect);
        self.render_overlays(f, rect);
    }
}

impl TaskListComponent {
    /// Draw the delete prompt or the editor, centered on `rect`
    pub fn render_overlays(&mut self, f: &mut Frame, rect: Rect) {
        if let (Mode::Delete, Some(task)) = (self.controller.mode(), self.controller.active_task()) {
            task_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, task);
        }
        self.dialog.render(f, rect);
    }
}
