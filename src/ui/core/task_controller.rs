//! Task list interaction state.
//!
//! The controller owns the page's task collection together with the
//! selection set and the interaction mode. Every transition is synchronous
//! and happens on the UI event loop.

use crate::entities::{Task, TaskCollection, TaskError};
use chrono::{DateTime, Utc};
use std::fmt;

/// Current interaction intent of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Create,
    Edit,
    Delete,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Selection set plus mode.
///
/// Normal and Create carry an empty selection; Edit and Delete carry exactly
/// the one task acted upon. Fields are private so only the constructors below
/// can build a state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    selection: Vec<String>,
    mode: Mode,
}

impl InteractionState {
    #[must_use]
    pub fn normal() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn create() -> Self {
        Self {
            selection: Vec::new(),
            mode: Mode::Create,
        }
    }

    #[must_use]
    pub fn edit(task_id: impl Into<String>) -> Self {
        Self {
            selection: vec![task_id.into()],
            mode: Mode::Edit,
        }
    }

    #[must_use]
    pub fn delete(task_id: impl Into<String>) -> Self {
        Self {
            selection: vec![task_id.into()],
            mode: Mode::Delete,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, task_id: &str) -> bool {
        self.selection.iter().any(|id| id == task_id)
    }

    /// The single task acted upon in Edit or Delete mode
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self.mode {
            Mode::Edit | Mode::Delete => self.selection.first().map(String::as_str),
            Mode::Normal | Mode::Create => None,
        }
    }
}

pub struct TaskListController {
    tasks: TaskCollection,
    state: InteractionState,
}

impl TaskListController {
    pub fn new(tasks: TaskCollection) -> Self {
        Self {
            tasks,
            state: InteractionState::normal(),
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn request_edit(&mut self, task_id: &str) -> Result<(), TaskError> {
        self.ensure_exists(task_id)?;
        log::info!("Tasks: edit requested for task {}", task_id);
        self.state = InteractionState::edit(task_id);
        Ok(())
    }

    pub fn request_delete(&mut self, task_id: &str) -> Result<(), TaskError> {
        self.ensure_exists(task_id)?;
        log::info!("Tasks: delete requested for task {}", task_id);
        self.state = InteractionState::delete(task_id);
        Ok(())
    }

    pub fn request_create(&mut self) {
        log::info!("Tasks: create requested");
        self.state = InteractionState::create();
    }

    pub fn reset(&mut self) {
        if self.state.mode() != Mode::Normal {
            log::debug!("Tasks: interaction reset from {} mode", self.state.mode());
        }
        self.state = InteractionState::normal();
    }

    /// Task currently under edit or delete
    #[must_use]
    pub fn active_task(&self) -> Option<&Task> {
        self.state.target().and_then(|id| self.tasks.get(id))
    }

    /// Apply a submitted form: insert in Create mode, replace in Edit mode
    ///
    /// The state is reset on success and left untouched on error.
    pub fn apply_submit(&mut self, task: Task) -> Result<(), TaskError> {
        match self.state.mode() {
            Mode::Create => {
                log::info!("Tasks: created task {} '{}'", task.id, task.title);
                self.tasks.insert(task)?;
            }
            Mode::Edit => {
                if self.state.target() != Some(task.id.as_str()) {
                    return Err(TaskError::NotFound(task.id));
                }
                log::info!("Tasks: updated task {} '{}'", task.id, task.title);
                self.tasks.replace(task)?;
            }
            Mode::Normal | Mode::Delete => {
                log::warn!("Tasks: submit ignored in {} mode", self.state.mode());
            }
        }
        self.reset();
        Ok(())
    }

    /// Remove the task selected for deletion and reset
    pub fn confirm_delete(&mut self) -> Result<Task, TaskError> {
        let task_id = match (self.state.mode(), self.state.target()) {
            (Mode::Delete, Some(id)) => id.to_string(),
            _ => return Err(TaskError::NotFound(String::new())),
        };
        let removed = self.tasks.remove(&task_id)?;
        log::info!("Tasks: deleted task {} '{}'", removed.id, removed.title);
        self.reset();
        Ok(removed)
    }

    pub fn toggle_completed(&mut self, task_id: &str, now: DateTime<Utc>) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| TaskError::NotFound(task_id.to_string()))?;
        task.completed = !task.completed;
        task.updated_at = Some(now);
        log::info!("Tasks: task {} marked {}", task_id, if task.completed { "done" } else { "open" });
        Ok(task.completed)
    }

    fn ensure_exists(&self, task_id: &str) -> Result<(), TaskError> {
        if self.tasks.contains(task_id) {
            Ok(())
        } else {
            log::warn!("Tasks: task {} not found", task_id);
            Err(TaskError::NotFound(task_id.to_string()))
        }
    }
}
