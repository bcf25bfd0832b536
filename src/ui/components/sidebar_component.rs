//! Sidebar navigation for the shell.
//!
//! Lists the menu pages with the settings entry pinned to the footer, and
//! highlights the entry matching the current path. Collapsed, it shows icons
//! only.

use crate::constants::SIDEBAR_USER_PLACEHOLDER;
use crate::icons::IconService;
use crate::router::{self, Route, SIDEBAR_FOOTER, SIDEBAR_MENU};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct SidebarComponent {
    pub icons: IconService,
    active: Route,
    collapsed: bool,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(IconService::default(), false)
    }
}

impl SidebarComponent {
    pub fn new(icons: IconService, collapsed: bool) -> Self {
        Self {
            icons,
            active: Route::Home,
            collapsed,
            list_state: ListState::default(),
        }
    }

    /// Menu entries followed by footer entries
    fn entries() -> impl Iterator<Item = Route> {
        SIDEBAR_MENU.into_iter().chain(SIDEBAR_FOOTER)
    }

    #[must_use]
    pub fn active(&self) -> Route {
        self.active
    }

    pub fn set_active_path(&mut self, path: &str) {
        self.active = router::resolve(path);
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        log::debug!("Sidebar: collapsed = {}", self.collapsed);
    }

    /// Entry next to the active one, wrapping around
    fn step(&self, forward: bool) -> Route {
        let entries: Vec<Route> = Self::entries().collect();
        let count = entries.len();
        let next = match entries.iter().position(|r| *r == self.active) {
            Some(index) if forward => (index + 1) % count,
            Some(index) => (index + count - 1) % count,
            // Not-found pages sit outside the menu
            None if forward => 0,
            None => count - 1,
        };
        entries[next]
    }

    fn entry_line(&self, route: Route) -> Line<'static> {
        let is_active = route == self.active;
        let style = if is_active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if is_active { "▌" } else { " " };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{} ", self.icons.page(route)), style),
        ];
        if !self.collapsed {
            spans.push(Span::styled(route.title(), style));
        }
        Line::from(spans)
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => Action::NextMenuItem,
            KeyCode::Char('K') => Action::PreviousMenuItem,
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => Action::NextMenuItem,
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => Action::PreviousMenuItem,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextMenuItem => Action::Navigate(self.step(true).path().to_string()),
            Action::PreviousMenuItem => Action::Navigate(self.step(false).path().to_string()),
            Action::Navigate(path) => {
                self.set_active_path(&path);
                Action::Navigate(path)
            }
            Action::ToggleSidebar => {
                self.toggle_collapsed();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = if self.collapsed {
            format!(" {} ", self.icons.menu())
        } else {
            " Navigation ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let footer_height = if self.collapsed { 1 } else { 3 };
        let [menu_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(inner);

        let menu: Vec<ListItem> = SIDEBAR_MENU
            .iter()
            .map(|route| ListItem::new(self.entry_line(*route)))
            .collect();
        self.list_state
            .select(SIDEBAR_MENU.iter().position(|route| *route == self.active));
        f.render_stateful_widget(List::new(menu), menu_area, &mut self.list_state);

        let mut footer: Vec<Line> = SIDEBAR_FOOTER.iter().map(|route| self.entry_line(*route)).collect();
        if !self.collapsed {
            let rule = "─".repeat(inner.width as usize);
            footer.insert(0, Line::from(Span::styled(rule, Style::default().fg(Color::DarkGray))));
            footer.push(Line::from(Span::styled(
                SIDEBAR_USER_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }
        f.render_widget(Paragraph::new(footer), footer_area);
    }
}
