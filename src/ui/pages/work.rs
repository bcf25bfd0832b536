use super::Page;
use crate::config::Config;
use crate::constants::{WIDGET_PLACEHOLDER, WORK_SPLIT_DEFAULT, WORK_SPLIT_MAX, WORK_SPLIT_MIN, WORK_SPLIT_STEP};
use crate::entities::{TaskCollection, TaskError};
use crate::fixtures;
use crate::router::Route;
use crate::ui::components::TaskListComponent;
use crate::ui::core::{Action, Component, ShortcutDispatcher};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Task list on the left, widget placeholders stacked on the right
pub struct WorkPage {
    list: TaskListComponent,
    split: u16,
}

impl WorkPage {
    pub fn new(config: &Config) -> Result<Self, TaskError> {
        let tasks = TaskCollection::from_tasks(fixtures::seed_tasks())?;
        Ok(Self {
            list: TaskListComponent::new(tasks, config),
            split: WORK_SPLIT_DEFAULT,
        })
    }

    /// Percentage of the width given to the task list
    #[must_use]
    pub fn split(&self) -> u16 {
        self.split
    }

    #[must_use]
    pub fn list(&self) -> &TaskListComponent {
        &self.list
    }

    fn resize(&mut self, grow: bool) {
        self.split = if grow {
            (self.split + WORK_SPLIT_STEP).min(WORK_SPLIT_MAX)
        } else {
            self.split.saturating_sub(WORK_SPLIT_STEP).max(WORK_SPLIT_MIN)
        };
        log::debug!("Work: split at {}%", self.split);
    }

    fn render_widget_panel(f: &mut Frame, rect: Rect, index: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Widget {} ", index))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [_, middle, _] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        f.render_widget(
            Paragraph::new(WIDGET_PLACEHOLDER)
                .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center),
            middle,
        );
    }
}

impl Component for WorkPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.list.is_capturing_input() {
            match key.code {
                KeyCode::Char('<') => {
                    self.resize(false);
                    return Action::None;
                }
                KeyCode::Char('>') => {
                    self.resize(true);
                    return Action::None;
                }
                _ => {}
            }
        }
        let action = self.list.handle_key_events(key);
        self.list.update(action)
    }

    fn update(&mut self, action: Action) -> Action {
        self.list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (list_area, widgets_area) = LayoutManager::work_layout(rect, self.split);
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(widgets_area);

        self.list.render_list(f, list_area);
        Self::render_widget_panel(f, top, 1);
        Self::render_widget_panel(f, bottom, 2);
        self.list.render_overlays(f, rect);
    }
}

impl Page for WorkPage {
    fn route(&self) -> Route {
        Route::Work
    }

    fn mount(&mut self, shortcuts: &mut ShortcutDispatcher) {
        self.list.sync_shortcuts(shortcuts);
    }

    fn unmount(&mut self, shortcuts: &mut ShortcutDispatcher) {
        self.list.unbind_shortcuts(shortcuts);
    }

    fn sync_shortcuts(&mut self, shortcuts: &mut ShortcutDispatcher) {
        self.list.sync_shortcuts(shortcuts);
    }

    fn captures_input(&self) -> bool {
        self.list.is_capturing_input()
    }
}
