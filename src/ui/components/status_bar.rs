//! Status bar component

use crate::config::ModifierKey;
use crate::router::Route;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Key hints for the current page
    #[must_use]
    pub fn hints(route: Route, modifier: ModifierKey, touch_mode: bool) -> String {
        let page_hints = match route {
            Route::Task | Route::Work if touch_mode => "a: add • e: edit • d: delete • Space: done".to_string(),
            Route::Task | Route::Work => format!(
                "a: add • e: edit • d: delete • Space: done • {m}+E/{m}+D: shortcuts",
                m = modifier
            ),
            Route::SvgEditor => "arrows: move • Tab: shape".to_string(),
            Route::Relax => "n: next suggestion".to_string(),
            _ => String::new(),
        };

        if page_hints.is_empty() {
            "J/K: pages • :: go to • ?: help • q: quit".to_string()
        } else {
            format!("{} • ?: help • q: quit", page_hints)
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, path: &str, hints: &str) {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", path), Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(hints.to_string(), Style::default().fg(Color::Gray)),
        ]);

        f.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }
}
