use super::Page;
use crate::config::Config;
use crate::router::Route;
use crate::ui::components::dialogs::common::ScrollView;
use crate::ui::components::typography::{self, Level};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Read-only view of the configuration in effect
pub struct SettingsPage {
    config: Config,
    scroll: ScrollView,
}

impl SettingsPage {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scroll: ScrollView::default(),
        }
    }

    fn config_location() -> String {
        Config::get_default_config_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|e| format!("unavailable ({})", e))
    }
}

impl Component for SettingsPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_up(1),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let Err(e) = self.try_render(f, rect) {
            log::error!("Settings: {:#}", e);
        }
    }
}

impl Page for SettingsPage {
    fn route(&self) -> Route {
        Route::Setting
    }

    fn try_render(&mut self, f: &mut Frame, rect: Rect) -> anyhow::Result<()> {
        let toml = self.config.to_toml().context("Cannot display the active configuration")?;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Setting ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = LayoutManager::inner(rect);
        f.render_widget(block, rect);

        let [header, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
        let status = match self.config.validate() {
            Ok(()) => typography::line(Level::Caption, "Configuration is valid"),
            Err(e) => typography::line(Level::H6, format!("Configuration problem: {}", e)),
        };
        f.render_widget(
            Paragraph::new(vec![
                typography::line(Level::H2, "Active configuration"),
                typography::caption(format!("Config file: {}", Self::config_location())),
                status,
            ]),
            header,
        );

        self.scroll.render_text(f, body, &toml, Style::default().fg(Color::White));
        Ok(())
    }
}
