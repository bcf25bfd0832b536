use super::Page;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::router::{Route, SIDEBAR_FOOTER, SIDEBAR_MENU};
use crate::ui::components::typography::{self, Level};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct HomePage {
    user_id: String,
    modifier: String,
}

impl HomePage {
    pub fn new(config: &Config) -> Self {
        Self {
            user_id: config.user.id.clone(),
            modifier: config.shortcuts.modifier.to_string(),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            typography::heading(format!("Welcome to {}", APP_NAME)),
            typography::caption(format!(
                "Signed in as {} • {}",
                self.user_id,
                datetime::format_with(datetime::today(), datetime::ROW_DATE_FORMAT)
            )),
            Line::raw(""),
            typography::line(Level::H3, "Pages"),
        ];

        for route in SIDEBAR_MENU.iter().chain(SIDEBAR_FOOTER.iter()) {
            lines.push(typography::paragraph(format!("  {:<12} {}", route.title(), route.path())));
        }

        lines.extend([
            Line::raw(""),
            typography::line(Level::H3, "Getting around"),
            typography::paragraph("  J / K        previous or next page"),
            typography::paragraph("  :            go to any path"),
            typography::paragraph("  Ctrl+B       collapse the sidebar"),
            typography::paragraph(format!(
                "  {m}+E / {m}+D  edit or delete the focused task",
                m = self.modifier
            )),
            typography::paragraph("  ?            all key bindings"),
            Line::raw(""),
            typography::line(Level::H5, "Heading levels"),
            typography::line(Level::H1, "H1"),
            typography::line(Level::H2, "H2"),
            typography::line(Level::H4, "H4"),
            typography::line(Level::H6, "H6"),
            typography::caption("Caption text"),
        ]);
        lines
    }
}

impl Component for HomePage {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Home ")
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(block, rect);
        f.render_widget(
            Paragraph::new(self.lines()).wrap(Wrap { trim: false }),
            LayoutManager::inner(rect),
        );
    }
}

impl Page for HomePage {
    fn route(&self) -> Route {
        Route::Home
    }
}
