use super::Page;
use crate::config::Config;
use crate::entities::{TaskCollection, TaskError};
use crate::fixtures;
use crate::router::Route;
use crate::ui::components::TaskListComponent;
use crate::ui::core::{Action, Component, ShortcutDispatcher};
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Full-width task list seeded with the sample tasks
pub struct TaskPage {
    list: TaskListComponent,
}

impl TaskPage {
    pub fn new(config: &Config) -> Result<Self, TaskError> {
        let tasks = TaskCollection::from_tasks(fixtures::seed_tasks())?;
        Ok(Self {
            list: TaskListComponent::new(tasks, config),
        })
    }

    #[must_use]
    pub fn list(&self) -> &TaskListComponent {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TaskListComponent {
        &mut self.list
    }
}

impl Component for TaskPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.list.handle_key_events(key);
        self.list.update(action)
    }

    fn update(&mut self, action: Action) -> Action {
        self.list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.list.render(f, rect);
    }
}

impl Page for TaskPage {
    fn route(&self) -> Route {
        Route::Task
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
