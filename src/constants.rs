//! Constants used throughout the application
//!
//! This module centralizes UI text, file names and layout bounds.

// Application identity
pub const APP_NAME: &str = "taskdeck";
pub const CONFIG_FILE_NAME: &str = "taskdeck.toml";
pub const LOG_FILE_NAME: &str = "taskdeck.log";

// Task page text
pub const ADD_TASK_LABEL: &str = "Add Task";
pub const DIALOG_TITLE_CREATE: &str = "Create new task";
pub const DIALOG_TITLE_EDIT: &str = "Edit";
pub const SUBMIT_LABEL_CREATE: &str = "Create new";
pub const SUBMIT_LABEL_EDIT: &str = "Submit";
pub const DISCARD_LABEL: &str = "Discard";
pub const DISCARD_PROMPT: &str = "Discard changes?";
pub const NOT_AVAILABLE: &str = "N/A";
pub const EMPTY_TASK_LIST: &str = "No tasks yet. Press 'a' to add one.";
pub const PRIORITY_PLACEHOLDER: &str = "Select priority";

// Validation messages
pub const ERROR_TITLE_REQUIRED: &str = "Title is required";

// Widget placeholders on the Work page
pub const WIDGET_PLACEHOLDER: &str = "Calendar view / Widget View";

// Sidebar footer placeholder for the signed-in user
pub const SIDEBAR_USER_PLACEHOLDER: &str = "{{USER_NAME}} and avatar";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Width of the sidebar when collapsed to icons
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;
/// Work page split bounds, in percent of the width given to the task list
pub const WORK_SPLIT_MIN: u16 = 20;
pub const WORK_SPLIT_MAX: u16 = 80;
pub const WORK_SPLIT_DEFAULT: u16 = 50;
pub const WORK_SPLIT_STEP: u16 = 5;
