//! Reusable UI components

pub mod dialogs;
pub mod form_fields;
pub mod status_bar;
pub mod typography;

// Component architecture
pub mod dialog_component;
pub mod sidebar_component;
pub mod task_dialog_component;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use task_dialog_component::{DialogOutcome, DialogPhase, TaskDialogComponent};
pub use task_list_component::TaskListComponent;
