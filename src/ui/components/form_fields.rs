//! Labelled form field widgets.
//!
//! Every field draws inside a rounded block titled with its label. The focused
//! field gets a highlighted border, and a validation error is shown on the
//! block's bottom edge.

use crate::icons::IconService;
use crate::ui::forms::{FieldError, TextInput};
use crate::utils::datetime;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Label, focus and error shared by every field widget
#[derive(Debug, Clone, Copy)]
pub struct FieldFrame<'a> {
    pub label: &'a str,
    pub focused: bool,
    pub error: Option<&'a FieldError>,
}

impl<'a> FieldFrame<'a> {
    pub fn new(label: &'a str, focused: bool, error: Option<&'a FieldError>) -> Self {
        Self { label, focused, error }
    }

    fn block(&self) -> Block<'a> {
        let border_color = match (self.error.is_some(), self.focused) {
            (true, _) => Color::Red,
            (false, true) => Color::Yellow,
            (false, false) => Color::DarkGray,
        };
        let title_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(format!(" {} ", self.label), title_style))
            .border_style(Style::default().fg(border_color));

        if let Some(error) = self.error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", error),
                Style::default().fg(Color::Red),
            )));
        }
        block
    }
}

/// Text with a block cursor drawn at the input's cursor position
fn text_with_cursor(input: &TextInput, focused: bool) -> Line<'static> {
    let value = input.value();
    if !focused {
        return Line::from(Span::styled(value.to_string(), Style::default().fg(Color::White)));
    }

    let before: String = value.chars().take(input.cursor()).collect();
    let mut rest = value.chars().skip(input.cursor());
    let under = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = rest.collect();

    Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(under, Style::default().fg(Color::Black).bg(Color::White)),
        Span::styled(after, Style::default().fg(Color::White)),
    ])
}

fn placeholder(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ))
}

/// Single-line text input
pub fn render_input(f: &mut Frame, area: Rect, frame: FieldFrame, input: &TextInput) {
    let paragraph = Paragraph::new(text_with_cursor(input, frame.focused)).block(frame.block());
    f.render_widget(paragraph, area);
}

/// Multi-line text area; the content wraps inside the block
pub fn render_textarea(f: &mut Frame, area: Rect, frame: FieldFrame, input: &TextInput) {
    let paragraph = Paragraph::new(text_with_cursor(input, frame.focused))
        .block(frame.block())
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Date input in `YYYY-MM-DD`, with a relative hint once the text parses
pub fn render_date_picker(f: &mut Frame, area: Rect, frame: FieldFrame, input: &TextInput) {
    let mut block = frame.block();
    if let Ok(date) = datetime::parse_date(input.value()) {
        let hint = datetime::relative_hint(date, datetime::today())
            .unwrap_or_else(|| datetime::format_with(date, datetime::ROW_DATE_FORMAT));
        block = block.title(
            Line::from(Span::styled(format!(" {} ", hint), Style::default().fg(Color::Cyan))).right_aligned(),
        );
    }

    let content = if input.value().is_empty() && !frame.focused {
        placeholder("YYYY-MM-DD")
    } else {
        text_with_cursor(input, frame.focused)
    };
    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Select over a fixed set of options; `None` shows the placeholder
pub fn render_select(f: &mut Frame, area: Rect, frame: FieldFrame, value: Option<&str>, placeholder_text: &str) {
    let content = match value {
        Some(value) if frame.focused => Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::Yellow)),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
            Span::styled(" ›", Style::default().fg(Color::Yellow)),
        ]),
        Some(value) => Line::from(Span::styled(value.to_string(), Style::default().fg(Color::White))),
        None => placeholder(placeholder_text),
    };
    f.render_widget(Paragraph::new(content).block(frame.block()), area);
}

/// Boolean toggle drawn with the task status icons
pub fn render_checkbox(f: &mut Frame, area: Rect, frame: FieldFrame, checked: bool, icons: &IconService) {
    let icon = if checked { icons.task_completed() } else { icons.task_pending() };
    let style = if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };
    let content = Line::from(vec![
        Span::styled(icon.to_string(), style),
        Span::raw(" "),
        Span::styled(if checked { "Done" } else { "Open" }, style),
    ]);
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Left).block(frame.block()),
        area,
    );
}
