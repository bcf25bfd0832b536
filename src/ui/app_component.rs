//! Navigation shell: sidebar, routed page, status bar and shell dialogs.

use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::router::{self, Route};
use crate::ui::components::{DialogComponent, SidebarComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component, ShortcutDispatcher,
};
use crate::ui::layout::LayoutManager;
use crate::ui::pages::{self, NotFoundPage, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    page: Box<dyn Page>,
    dialog: DialogComponent,

    // Services
    shortcuts: ShortcutDispatcher,
    config: Config,

    // Simple UI state
    current_path: String,
    page_error: Option<String>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let mut dialog = DialogComponent::new();
        dialog.icons = icons.clone();
        dialog.set_logger(logger);

        let mut app = Self {
            sidebar: SidebarComponent::new(icons, config.ui.sidebar_collapsed),
            page: Box::new(NotFoundPage::new(router::CATCH_ALL)),
            dialog,
            shortcuts: ShortcutDispatcher::new(config.shortcuts.modifier, config.ui.touch_mode),
            current_path: String::new(),
            page_error: None,
            should_quit: false,
            config,
        };
        let start_path = app.config.ui.start_path.clone();
        app.navigate(&start_path);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Normalized path of the mounted page
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_route(&self) -> Route {
        self.page.route()
    }

    pub fn page(&self) -> &dyn Page {
        self.page.as_ref()
    }

    pub fn shortcuts(&self) -> &ShortcutDispatcher {
        &self.shortcuts
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    /// Message shown in place of the page after a build or render failure
    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    /// Unmount the current page and mount the one `path` resolves to
    pub fn navigate(&mut self, path: &str) {
        let normalized = router::normalize(path);
        let route = router::resolve(&normalized);

        match pages::build(route, &normalized, &self.config) {
            Ok(page) => self.mount_page(&normalized, page),
            Err(e) => {
                log::error!("Shell: cannot build {} page: {:#}", route, e);
                self.mount_page(&normalized, Box::new(NotFoundPage::new(normalized.clone())));
                self.page_error = Some(format!("{:#}", e));
            }
        }
    }

    /// Replace the current page with `page`, shown at `path`
    pub fn mount_page(&mut self, path: &str, page: Box<dyn Page>) {
        let normalized = router::normalize(path);

        self.page.unmount(&mut self.shortcuts);
        self.page_error = None;
        self.page = page;
        self.page.mount(&mut self.shortcuts);
        self.sidebar.set_active_path(&normalized);

        log::info!("Shell: navigated to {} ({})", normalized, self.page.route());
        self.current_path = normalized;
    }

    /// Keys every page shares; None when the key is not one of them
    fn handle_global_key(&self, key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('b') => Some(Action::ToggleSidebar),
                _ => None,
            };
        }

        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char(':') => Action::ShowDialog(DialogType::GoToPath),
            _ => return None,
        };
        Some(action)
    }

    /// Pick the component that gets the key
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.page.captures_input() {
            return self.page.handle_key_events(key);
        }

        if let Some(action) = self.handle_global_key(&key) {
            return action;
        }

        if let Some(action) = self.shortcuts.dispatch(&key) {
            return self.page.update(action);
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !sidebar_action.is_none() {
            return sidebar_action;
        }

        self.page.handle_key_events(key)
    }

    /// Run an action through the dialog, the sidebar, then the page
    fn process_action(&mut self, action: Action) {
        let mut action = action;
        while !action.is_none() {
            action = self.dialog.update(action);
            action = self.sidebar.update(action);
            action = match action {
                Action::Navigate(path) => {
                    self.navigate(&path);
                    Action::None
                }
                Action::Quit => {
                    log::info!("Shell: quitting");
                    self.should_quit = true;
                    Action::None
                }
                Action::None => Action::None,
                other => {
                    let next = self.page.update(other.clone());
                    // Nobody handled it
                    if next == other {
                        Action::None
                    } else {
                        next
                    }
                }
            };
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = self.route_key(key);
        self.process_action(action);
        self.page.sync_shortcuts(&mut self.shortcuts);
    }

    pub fn on_tick(&mut self) {
        self.page.on_tick();
    }

    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Tick => self.on_tick(),
            EventType::Resize(width, height) => log::debug!("Shell: resized to {}x{}", width, height),
            EventType::Other => {}
        }
    }

    fn render_page(&mut self, f: &mut Frame, rect: Rect) {
        if let Some(error) = &self.page_error {
            pages::render_error_view(f, rect, self.page.route().title(), error);
            return;
        }

        if let Err(e) = self.page.try_render(f, rect) {
            log::error!("Shell: {} page failed to render: {:#}", self.page.route(), e);
            let message = format!("{:#}", e);
            pages::render_error_view(f, rect, self.page.route().title(), &message);
            self.page_error = Some(message);
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.process_action(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (body, status) = LayoutManager::main_layout(rect);
        let (sidebar_area, page_area) =
            LayoutManager::shell_layout(body, self.config.ui.sidebar_width, self.sidebar.is_collapsed());

        self.sidebar.render(f, sidebar_area);
        self.render_page(f, page_area);

        let hints = StatusBar::hints(
            self.page.route(),
            self.shortcuts.preferred_modifier(),
            self.shortcuts.is_touch_mode(),
        );
        StatusBar::render(f, status, &self.current_path, &hints);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
