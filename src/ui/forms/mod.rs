//! Form state for the task editor

pub mod task_form;
pub mod text_input;

pub use task_form::{FieldError, FormField, TaskForm, TaskFormValues};
pub use text_input::TextInput;
