//! Form model for the task editor.
//!
//! Field values are plain text until submit; validation turns them into a
//! [`Task`] or a list of field-scoped errors. After the first submit attempt
//! the form revalidates on every change so inline errors clear as soon as
//! the field is fixed.

use super::text_input::TextInput;
use crate::constants::ERROR_TITLE_REQUIRED;
use crate::entities::{Priority, Task};
use crate::utils::datetime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Editable fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    DueDate,
    Description,
    Priority,
    Completed,
}

impl FormField {
    pub const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::DueDate,
        FormField::Description,
        FormField::Priority,
        FormField::Completed,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::DueDate => "Due date",
            Self::Description => "Description",
            Self::Priority => "Priority",
            Self::Completed => "Completed",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Title | Self::DueDate | Self::Description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", ERROR_TITLE_REQUIRED)]
    TitleRequired,
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Comparable snapshot of every editable field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFormValues {
    pub title: String,
    pub due_date: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub completed: bool,
}

impl TaskFormValues {
    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            due_date: task.due_date.map(datetime::format_ymd).unwrap_or_default(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            completed: task.completed,
        }
    }
}

/// Values that passed validation
#[derive(Debug, Clone, PartialEq)]
struct ValidValues {
    title: String,
    due_date: Option<NaiveDate>,
    description: Option<String>,
    priority: Option<Priority>,
    completed: bool,
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    bound: Option<Task>,
    initial: TaskFormValues,
    title: TextInput,
    due_date: TextInput,
    description: TextInput,
    priority: Option<Priority>,
    completed: bool,
    focus: FormField,
    errors: Vec<(FormField, FieldError)>,
    submit_attempted: bool,
}

impl TaskForm {
    /// Build a form populated from `task`, or a blank one for creation
    pub fn from_task(task: Option<&Task>) -> Self {
        let initial = task.map(TaskFormValues::from_task).unwrap_or_default();
        Self {
            bound: task.cloned(),
            title: TextInput::new(initial.title.clone()),
            due_date: TextInput::new(initial.due_date.clone()),
            description: TextInput::new(initial.description.clone()),
            priority: initial.priority,
            completed: initial.completed,
            initial,
            focus: FormField::Title,
            errors: Vec::new(),
            submit_attempted: false,
        }
    }

    #[must_use]
    pub fn is_create(&self) -> bool {
        self.bound.is_none()
    }

    #[must_use]
    pub fn bound_task(&self) -> Option<&Task> {
        self.bound.as_ref()
    }

    #[must_use]
    pub fn values(&self) -> TaskFormValues {
        TaskFormValues {
            title: self.title.value().to_string(),
            due_date: self.due_date.value().to_string(),
            description: self.description.value().to_string(),
            priority: self.priority,
            completed: self.completed,
        }
    }

    /// Current values differ from the values the form opened with
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values() != self.initial
    }

    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    #[must_use]
    pub fn text(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::Title => Some(&self.title),
            FormField::DueDate => Some(&self.due_date),
            FormField::Description => Some(&self.description),
            FormField::Priority | FormField::Completed => None,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Description => Some(&mut self.description),
            FormField::Priority | FormField::Completed => None,
        }
    }

    /// Replace a text field's content
    pub fn set_text(&mut self, field: FormField, value: &str) {
        if let Some(input) = self.text_mut(field) {
            input.set(value);
            self.after_change();
        }
    }

    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
        self.after_change();
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
        self.after_change();
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        if let Some(input) = self.text_mut(focus) {
            input.insert(c);
            self.after_change();
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        if self.text_mut(focus).is_some_and(TextInput::backspace) {
            self.after_change();
        }
    }

    pub fn delete(&mut self) {
        let focus = self.focus;
        if self.text_mut(focus).is_some_and(TextInput::delete) {
            self.after_change();
        }
    }

    pub fn move_cursor_left(&mut self) {
        let focus = self.focus;
        if let Some(input) = self.text_mut(focus) {
            input.move_left();
        }
    }

    pub fn move_cursor_right(&mut self) {
        let focus = self.focus;
        if let Some(input) = self.text_mut(focus) {
            input.move_right();
        }
    }

    pub fn move_cursor_home(&mut self) {
        let focus = self.focus;
        if let Some(input) = self.text_mut(focus) {
            input.move_home();
        }
    }

    pub fn move_cursor_end(&mut self) {
        let focus = self.focus;
        if let Some(input) = self.text_mut(focus) {
            input.move_end();
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[(FormField, FieldError)] {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }

    fn after_change(&mut self) {
        if self.submit_attempted {
            self.errors = self.check().err().unwrap_or_default();
        }
    }

    fn check(&self) -> Result<ValidValues, Vec<(FormField, FieldError)>> {
        let mut errors = Vec::new();

        let title = self.title.value();
        if title.trim().is_empty() {
            errors.push((FormField::Title, FieldError::TitleRequired));
        }

        let due_text = self.due_date.value().trim();
        let due_date = if due_text.is_empty() {
            None
        } else {
            match datetime::parse_date(due_text) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push((FormField::DueDate, FieldError::InvalidDate(due_text.to_string())));
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let description = self.description.value();
        Ok(ValidValues {
            title: title.to_string(),
            due_date,
            description: (!description.trim().is_empty()).then(|| description.to_string()),
            priority: self.priority,
            completed: self.completed,
        })
    }

    /// Validate without building a task; errors are recorded on the form
    pub fn validate(&mut self) -> Result<(), Vec<(FormField, FieldError)>> {
        self.submit_attempted = true;
        match self.check() {
            Ok(_) => {
                self.errors.clear();
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.clone();
                if let Some((field, _)) = errors.first() {
                    self.focus = *field;
                }
                Err(errors)
            }
        }
    }

    /// Validate and produce the task to store
    ///
    /// Creation mints a fresh id stamped with `now` and `user`; editing keeps
    /// the bound task's identity and stamps `updated_at`.
    pub fn build_task(&mut self, now: DateTime<Utc>, user: &str) -> Result<Task, Vec<(FormField, FieldError)>> {
        self.validate()?;
        let values = self.check()?;

        let task = match &self.bound {
            Some(bound) => Task {
                id: bound.id.clone(),
                title: values.title,
                description: values.description,
                completed: values.completed,
                due_date: values.due_date,
                priority: values.priority,
                created_at: bound.created_at,
                updated_at: Some(now),
                created_by: bound.created_by.clone(),
                assigned_to: bound.assigned_to.clone(),
            },
            None => Task {
                id: Uuid::new_v4().to_string(),
                title: values.title,
                description: values.description,
                completed: values.completed,
                due_date: values.due_date,
                priority: values.priority,
                created_at: now,
                updated_at: None,
                created_by: user.to_string(),
                assigned_to: None,
            },
        };

        Ok(task)
    }

    /// Pretty JSON of the current form value
    pub fn preview_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values())
    }
}
