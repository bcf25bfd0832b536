//! Modal dialogs owned by the navigation shell.
//!
//! Help, logs, info and error popups plus the go-to-path prompt. The task
//! editor is not one of them: it belongs to the task pages and opens from
//! their interaction state.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{common::ScrollView, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::forms::TextInput;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

const PAGE_LINES: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    input: TextInput,
    scroll: ScrollView,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            input: TextInput::default(),
            scroll: ScrollView::default(),
            logger: None,
        }
    }

    /// Source of the entries shown in the logs dialog
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Text typed into the go-to-path prompt
    pub fn input(&self) -> &str {
        self.input.value()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input = TextInput::default();
        self.scroll.reset();
    }

    /// Shared scrolling keys; returns false when the key is not a scroll key
    fn handle_scroll(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(1),
            KeyCode::PageUp => self.scroll.scroll_up(PAGE_LINES),
            KeyCode::PageDown => self.scroll.scroll_down(PAGE_LINES),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => return false,
        }
        true
    }

    fn handle_go_to_path(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                let path = self.input.value().trim().to_string();
                self.clear_dialog();
                if path.is_empty() {
                    Action::None
                } else {
                    Action::Navigate(path)
                }
            }
            KeyCode::Char(c) => {
                self.input.insert(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.input.backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.input.delete();
                Action::None
            }
            KeyCode::Left => {
                self.input.move_left();
                Action::None
            }
            KeyCode::Right => {
                self.input.move_right();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match dialog_type {
            DialogType::GoToPath => self.handle_go_to_path(key),
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.handle_scroll(&key) {
                    Action::None
                } else {
                    // Any other key dismisses the popup
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll(&key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll(&key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                log::debug!("Dialog: showing {:?}", dialog_type);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::GoToPath => system_dialogs::render_go_to_path_dialog(f, rect, &self.input),
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }
}
