use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Rounded dialog frame in the dialog's accent color
pub fn create_dialog_block<'a>(title: impl Into<Line<'a>>, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Single centered line of color-coded key hints
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let spans: Vec<Span> = instructions
        .iter()
        .flat_map(|(key, color, desc)| {
            [
                Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::styled(*desc, Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Key hints shared by the dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Confirm");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_GO: InstructionShortcut = ("Enter", Color::Green, " Go");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const SPACE_CHANGE: InstructionShortcut = ("Space", Color::Cyan, " Change");
    pub const F2_PREVIEW: InstructionShortcut = ("F2", Color::Magenta, " Preview");
    pub const Y_DISCARD: InstructionShortcut = ("y", Color::Red, " Discard");
    pub const N_KEEP: InstructionShortcut = ("n", Color::Green, " Keep editing");
    pub const JK_SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}

/// Scroll offset plus the scrollbar state that mirrors it
#[derive(Debug, Default, Clone)]
pub struct ScrollView {
    offset: usize,
    state: ScrollbarState,
}

impl ScrollView {
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.state = self.state.position(self.offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.state = self.state.position(self.offset);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
        self.state = self.state.position(0);
    }

    /// Clamped at render time against the content length
    pub fn to_bottom(&mut self) {
        self.offset = usize::MAX;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Draw `text` inside `area`, showing a scrollbar when it overflows
    pub fn render_text(&mut self, f: &mut Frame, area: Rect, text: &str, style: Style) {
        let lines: Vec<&str> = text.lines().collect();
        let visible = area.height as usize;
        let overflow = lines.len() > visible;

        let shown = if overflow {
            self.offset = self.offset.min(lines.len() - visible);
            self.state = self
                .state
                .content_length(lines.len())
                .viewport_content_length(visible)
                .position(self.offset);
            lines[self.offset..self.offset + visible].join("\n")
        } else {
            self.offset = 0;
            text.to_string()
        };

        f.render_widget(Paragraph::new(shown).style(style).wrap(Wrap { trim: false }), area);

        if overflow {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray))
                .thumb_style(Style::default().fg(Color::White));
            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
