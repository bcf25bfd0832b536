//! Routed pages shown beside the sidebar.
//!
//! # Module Components
//!
//! - [`home`] - Welcome page
//! - [`task_page`] - Task list with the editor dialog
//! - [`work`] - Task list beside widget placeholders
//! - [`settings`] - Active configuration
//! - [`svg_editor`] - Canvas with movable shapes
//! - [`relax`] - Rotating break suggestions
//! - [`not_found`] - Catch-all for unknown paths

pub mod home;
pub mod not_found;
pub mod relax;
pub mod settings;
pub mod svg_editor;
pub mod task_page;
pub mod work;

use crate::config::Config;
use crate::router::Route;
use crate::ui::core::{Component, ShortcutDispatcher};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use relax::RelaxPage;
pub use settings::SettingsPage;
pub use svg_editor::SvgEditorPage;
pub use task_page::TaskPage;
pub use work::WorkPage;

/// A page mounted by the navigation shell
///
/// The shell mounts a page when it is navigated to and unmounts it when
/// navigating away; nothing a page holds survives that.
pub trait Page: Component {
    fn route(&self) -> Route;

    fn mount(&mut self, _shortcuts: &mut ShortcutDispatcher) {}

    /// Release everything bound in `mount` or `sync_shortcuts`
    fn unmount(&mut self, _shortcuts: &mut ShortcutDispatcher) {}

    /// Called after every event so bindings can follow page state
    fn sync_shortcuts(&mut self, _shortcuts: &mut ShortcutDispatcher) {}

    /// The page wants every key, global ones included
    fn captures_input(&self) -> bool {
        false
    }

    fn on_tick(&mut self) {}

    /// Render, reporting failures to the shell's error boundary
    fn try_render(&mut self, f: &mut Frame, rect: Rect) -> anyhow::Result<()> {
        self.render(f, rect);
        Ok(())
    }
}

/// Build the page for `route`; `path` is the normalized path that resolved to it
pub fn build(route: Route, path: &str, config: &Config) -> anyhow::Result<Box<dyn Page>> {
    let page: Box<dyn Page> = match route {
        Route::Home => Box::new(HomePage::new(config)),
        Route::Task => Box::new(TaskPage::new(config)?),
        Route::Work => Box::new(WorkPage::new(config)?),
        Route::Setting => Box::new(SettingsPage::new(config.clone())),
        Route::SvgEditor => Box::new(SvgEditorPage::new()),
        Route::Relax => Box::new(RelaxPage::new()),
        Route::NotFound => Box::new(NotFoundPage::new(path)),
    };
    Ok(page)
}

/// Shown in place of a page that failed to build or render
pub fn render_error_view(f: &mut Frame, rect: Rect, title: &str, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Red));

    let text = vec![
        Line::styled("Something went wrong while showing this page.", Style::default().fg(Color::Red)),
        Line::raw(""),
        Line::styled(error.to_string(), Style::default().fg(Color::White)),
        Line::raw(""),
        Line::styled("Navigate elsewhere with J/K or ':'.", Style::default().fg(Color::Gray)),
    ];

    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
