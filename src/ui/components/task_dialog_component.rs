//! Task editor dialog.
//!
//! One instance lives on each task page. It never opens or closes itself:
//! [`TaskDialogComponent::sync`] mirrors the page's interaction state, so a
//! Create state shows a blank form, an Edit state a form bound to the selected
//! task, and anything else no form at all. Key handling reports an outcome the
//! page acts on.

use crate::entities::{Priority, Task, TaskCollection};
use crate::icons::IconService;
use crate::ui::components::dialogs::task_dialogs;
use crate::ui::core::{InteractionState, Mode};
use crate::ui::forms::{FormField, TaskForm};
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Editing,
    ConfirmingDiscard,
}

/// What the page should do after a key reached the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// Still open, nothing to apply
    Pending,
    /// Closed without saving; the page resets its interaction state
    Closed,
    /// A valid task to store; the page applies it and resets
    Submitted(Task),
}

pub struct TaskDialogComponent {
    form: Option<TaskForm>,
    phase: DialogPhase,
    show_preview: bool,
    user_id: String,
    pub icons: IconService,
}

impl TaskDialogComponent {
    pub fn new(icons: IconService, user_id: impl Into<String>, show_preview: bool) -> Self {
        Self {
            form: None,
            phase: DialogPhase::Editing,
            show_preview,
            user_id: user_id.into(),
            icons,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    #[must_use]
    pub fn form(&self) -> Option<&TaskForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        self.form.as_mut()
    }

    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.show_preview
    }

    /// Open, rebind or close the form so it matches `state`
    pub fn sync(&mut self, state: &InteractionState, tasks: &TaskCollection) {
        match state.mode() {
            Mode::Create => {
                if !self.form.as_ref().is_some_and(TaskForm::is_create) {
                    log::debug!("TaskDialog: opening blank form");
                    self.open(TaskForm::from_task(None));
                }
            }
            Mode::Edit => {
                let target = state.target().and_then(|id| tasks.get(id));
                let bound_id = self.form.as_ref().and_then(|f| f.bound_task()).map(|t| t.id.as_str());
                match target {
                    Some(task) if bound_id != Some(task.id.as_str()) => {
                        log::debug!("TaskDialog: opening form for task {}", task.id);
                        self.open(TaskForm::from_task(Some(task)));
                    }
                    Some(_) => {}
                    None => self.close(),
                }
            }
            Mode::Normal | Mode::Delete => self.close(),
        }
    }

    fn open(&mut self, form: TaskForm) {
        self.form = Some(form);
        self.phase = DialogPhase::Editing;
    }

    fn close(&mut self) {
        if self.form.take().is_some() {
            log::debug!("TaskDialog: closed");
        }
        self.phase = DialogPhase::Editing;
    }

    /// Close straight away when nothing changed, otherwise ask first
    pub fn request_close(&mut self) -> DialogOutcome {
        match &self.form {
            None => DialogOutcome::Pending,
            Some(form) if form.is_dirty() => {
                self.phase = DialogPhase::ConfirmingDiscard;
                DialogOutcome::Pending
            }
            Some(_) => {
                self.close();
                DialogOutcome::Closed
            }
        }
    }

    /// Validate the form; errors stay on the form and keep it open
    pub fn submit(&mut self, now: DateTime<Utc>) -> DialogOutcome {
        let Some(form) = self.form.as_mut() else {
            return DialogOutcome::Pending;
        };
        match form.build_task(now, &self.user_id) {
            Ok(task) => DialogOutcome::Submitted(task),
            Err(errors) => {
                log::debug!("TaskDialog: {} invalid field(s)", errors.len());
                DialogOutcome::Pending
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: DateTime<Utc>) -> DialogOutcome {
        if self.form.is_none() {
            return DialogOutcome::Pending;
        }

        match self.phase {
            DialogPhase::ConfirmingDiscard => self.handle_discard_key(key),
            DialogPhase::Editing => self.handle_editing_key(key, now),
        }
    }

    fn handle_discard_key(&mut self, key: KeyEvent) -> DialogOutcome {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.close();
                DialogOutcome::Closed
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Back to the form, edits kept
                self.phase = DialogPhase::Editing;
                DialogOutcome::Pending
            }
            _ => DialogOutcome::Pending,
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent, now: DateTime<Utc>) -> DialogOutcome {
        match key.code {
            KeyCode::Esc => return self.request_close(),
            KeyCode::Enter => return self.submit(now),
            KeyCode::F(2) => {
                self.show_preview = !self.show_preview;
                return DialogOutcome::Pending;
            }
            _ => {}
        }

        let Some(form) = self.form.as_mut() else {
            return DialogOutcome::Pending;
        };

        match (form.focus(), key.code) {
            (_, KeyCode::Tab) | (_, KeyCode::Down) => form.focus_next(),
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => form.focus_previous(),
            (FormField::Priority, KeyCode::Char(' ') | KeyCode::Right) => {
                form.set_priority(Priority::cycle(form.priority()));
            }
            (FormField::Priority, KeyCode::Left) => form.set_priority(Priority::cycle_back(form.priority())),
            (FormField::Priority, KeyCode::Backspace | KeyCode::Delete) => form.set_priority(None),
            (FormField::Completed, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) => form.toggle_completed(),
            (field, code) if field.is_text() => match code {
                KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    form.insert_char(c);
                }
                KeyCode::Backspace => form.backspace(),
                KeyCode::Delete => form.delete(),
                KeyCode::Left => form.move_cursor_left(),
                KeyCode::Right => form.move_cursor_right(),
                KeyCode::Home => form.move_cursor_home(),
                KeyCode::End => form.move_cursor_end(),
                _ => {}
            },
            _ => {}
        }
        DialogOutcome::Pending
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(form) = &self.form else {
            return;
        };
        task_dialogs::render_task_editor_dialog(f, rect, &self.icons, form, self.show_preview);
        if self.phase == DialogPhase::ConfirmingDiscard {
            task_dialogs::render_discard_confirmation_dialog(f, rect, &self.icons);
        }
    }
}
