//! Heading and caption styles shared by the pages

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Text level, from page heading down to caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Caption,
    #[default]
    Paragraph,
}

impl Level {
    #[must_use]
    pub fn style(&self) -> Style {
        let base = Style::default();
        match self {
            Self::H1 => base.fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            Self::H2 => base.fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Self::H3 => base.fg(Color::White).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            Self::H4 => base.fg(Color::White).add_modifier(Modifier::BOLD),
            Self::H5 => base.fg(Color::Gray).add_modifier(Modifier::BOLD),
            Self::H6 => base.fg(Color::Gray).add_modifier(Modifier::UNDERLINED),
            Self::Caption => base.fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            Self::Paragraph => base.fg(Color::White),
        }
    }
}

/// A single styled line at the given level
pub fn line<'a>(level: Level, text: impl Into<String>) -> Line<'a> {
    Line::from(Span::styled(text.into(), level.style()))
}

pub fn heading<'a>(text: impl Into<String>) -> Line<'a> {
    line(Level::H1, text)
}

pub fn caption<'a>(text: impl Into<String>) -> Line<'a> {
    line(Level::Caption, text)
}

pub fn paragraph<'a>(text: impl Into<String>) -> Line<'a> {
    line(Level::Paragraph, text)
}
