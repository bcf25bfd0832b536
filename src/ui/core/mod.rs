//! Core UI functionality for the taskdeck application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions exchanged between components and the shell
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`shortcuts`] - Process-wide keyboard shortcut dispatcher
//! - [`task_controller`] - Task list selection and interaction mode

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod shortcuts;
pub mod task_controller;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use shortcuts::{BindingId, KeyBinding, ShortcutDispatcher, ShortcutError, ShortcutOptions};
pub use task_controller::{InteractionState, Mode, TaskListController};
