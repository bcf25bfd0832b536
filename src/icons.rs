//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::entities::Priority;
use crate::router::Route;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Task status icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub menu: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// Sidebar page icons
#[derive(Debug, Clone)]
pub struct PageIcons {
    pub home: &'static str,
    pub task: &'static str,
    pub work: &'static str,
    pub svg_editor: &'static str,
    pub relax: &'static str,
    pub setting: &'static str,
    pub not_found: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub priority: PriorityIcons,
    pub pages: PageIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                warning: "⚠️",
                menu: "☰",
            },
            priority: PriorityIcons {
                high: "🔴",
                medium: "🟡",
                low: "🔵",
            },
            pages: PageIcons {
                home: "🏠",
                task: "📝",
                work: "💼",
                svg_editor: "🎨",
                relax: "🕹️",
                setting: "⚙️",
                not_found: "❓",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "✓",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                menu: "≡",
            },
            priority: PriorityIcons {
                high: "●",
                medium: "◉",
                low: "○",
            },
            pages: PageIcons {
                home: "⌂",
                task: "☰",
                work: "▦",
                svg_editor: "✎",
                relax: "♫",
                setting: "⚙",
                not_found: "?",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                warning: "!",
                menu: "=",
            },
            priority: PriorityIcons {
                high: "!!!",
                medium: "!!",
                low: "!",
            },
            pages: PageIcons {
                home: "H",
                task: "T",
                work: "W",
                svg_editor: "S",
                relax: "R",
                setting: "*",
                not_found: "?",
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn menu(&self) -> &'static str {
        self.icons().ui.menu
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::High => icons.high,
            Priority::Medium => icons.medium,
            Priority::Low => icons.low,
        }
    }

    /// Sidebar icon for a route
    #[must_use]
    pub fn page(&self, route: Route) -> &'static str {
        let pages = self.icons().pages;
        match route {
            Route::Home => pages.home,
            Route::Task => pages.task,
            Route::Work => pages.work,
            Route::SvgEditor => pages.svg_editor,
            Route::Relax => pages.relax,
            Route::Setting => pages.setting,
            Route::NotFound => pages.not_found,
        }
    }
}
