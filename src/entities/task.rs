use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Task priority, limited to three levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid priority '{0}', expected one of: low, medium, high")]
pub struct ParsePriorityError(pub String);

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Step a select field through `None -> Low -> Medium -> High -> None`
    #[must_use]
    pub fn cycle(current: Option<Priority>) -> Option<Priority> {
        match current {
            None => Some(Self::Low),
            Some(Self::Low) => Some(Self::Medium),
            Some(Self::Medium) => Some(Self::High),
            Some(Self::High) => None,
        }
    }

    /// Reverse of [`Priority::cycle`]
    #[must_use]
    pub fn cycle_back(current: Option<Priority>) -> Option<Priority> {
        match current {
            None => Some(Self::High),
            Some(Self::High) => Some(Self::Medium),
            Some(Self::Medium) => Some(Self::Low),
            Some(Self::Low) => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task '{0}' not found")]
    NotFound(String),
    #[error("a task with id '{0}' already exists")]
    DuplicateId(String),
    #[error("task title cannot be empty")]
    EmptyTitle,
}

/// Ordered task collection owned by a mounted page.
///
/// Identifiers are unique and titles non-empty; insertion order is render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, rejecting duplicate ids and empty titles
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskError> {
        let mut collection = Self::new();
        for task in tasks {
            collection.insert(task)?;
        }
        Ok(collection)
    }

    pub fn insert(&mut self, task: Task) -> Result<(), TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.contains(&task.id) {
            return Err(TaskError::DuplicateId(task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Replace the task with the same id, keeping its position
    pub fn replace(&mut self, task: Task) -> Result<(), TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| TaskError::NotFound(task.id.clone()))?;
        *slot = task;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Task, TaskError> {
        let index = self.position(id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        Ok(self.tasks.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
