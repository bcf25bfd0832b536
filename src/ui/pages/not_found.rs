use super::Page;
use crate::router::Route;
use crate::ui::components::typography::{self, Level};
use crate::ui::core::{Action, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct NotFoundPage {
    path: String,
}

impl NotFoundPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Component for NotFoundPage {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Not found ")
            .border_style(Style::default().fg(Color::DarkGray));

        let text = vec![
            Line::raw(""),
            typography::line(Level::H1, "404"),
            typography::paragraph(format!("Nothing lives at {}", self.path)),
            Line::raw(""),
            typography::caption("Press ':' and type a path, or pick a page from the sidebar."),
        ];
        f.render_widget(Paragraph::new(text).block(block).alignment(Alignment::Center), rect);
    }
}

impl Page for NotFoundPage {
    fn route(&self) -> Route {
        Route::NotFound
    }
}
