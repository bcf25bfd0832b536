//! Domain entities shared by the task pages and the editor form.

pub mod task;

pub use task::{ParsePriorityError, Priority, Task, TaskCollection, TaskError};
