/// Actions produced by components and consumed by the shell or the page
/// that owns the relevant state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(String),
    ToggleSidebar,
    NextMenuItem,
    PreviousMenuItem,
    NextTask,
    PreviousTask,

    // Task interaction state
    RequestCreate,
    RequestEdit(String),
    RequestDelete(String),
    ToggleTaskCompleted(String),
    ResetInteraction,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

impl Action {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

/// Shell-level dialogs (the task editor belongs to the task pages)
#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    GoToPath,
    Error(String),
    Info(String),
    Help,
    Logs,
}
