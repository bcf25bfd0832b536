use super::Page;
use crate::router::Route;
use crate::ui::components::typography::{self, Level};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const SUGGESTIONS: [&str; 6] = [
    "Stand up and stretch your arms above your head.",
    "Look at something twenty feet away for twenty seconds.",
    "Take five slow breaths: in for four, out for six.",
    "Refill your glass of water.",
    "Roll your shoulders back ten times.",
    "Step away from the screen for a minute.",
];

/// Ticks before the next suggestion shows up on its own
pub const TICKS_PER_SUGGESTION: u32 = 300;

pub struct RelaxPage {
    index: usize,
    ticks: u32,
}

impl Default for RelaxPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RelaxPage {
    pub fn new() -> Self {
        Self { index: 0, ticks: 0 }
    }

    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        SUGGESTIONS[self.index]
    }

    pub fn next_suggestion(&mut self) {
        self.index = (self.index + 1) % SUGGESTIONS.len();
        self.ticks = 0;
    }

    fn progress_percent(&self) -> u16 {
        (self.ticks * 100 / TICKS_PER_SUGGESTION).min(100) as u16
    }
}

impl Component for RelaxPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('n') {
            self.next_suggestion();
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Relax ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [_, text_area, gauge_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let text = vec![
            typography::line(Level::H2, "Take a break"),
            Line::raw(""),
            typography::paragraph(self.suggestion()),
        ];
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            text_area,
        );

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).title(" Next "))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(self.progress_percent())
            .label(format!("{}/{}", self.index + 1, SUGGESTIONS.len()));
        f.render_widget(gauge, gauge_area);
    }
}

impl Page for RelaxPage {
    fn route(&self) -> Route {
        Route::Relax
    }

    fn on_tick(&mut self) {
        self.ticks += 1;
        if self.ticks >= TICKS_PER_SUGGESTION {
            self.next_suggestion();
        }
    }
}
