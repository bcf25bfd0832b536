use super::common::{self, shortcuts, ScrollView};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::ui::forms::TextInput;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const HELP_TEXT: &str = r"
TASKDECK - keyboard reference
=============================

NAVIGATION
----------
J/K         Previous/next sidebar entry
Ctrl+B      Collapse or expand the sidebar
:           Go to a path (e.g. /task, /work)

TASKS
-----
j/k ↑/↓     Move between tasks
a           Add task
e / Enter   Edit focused task
d           Delete focused task
Space       Toggle completion
Ctrl+E      Edit focused task (shortcut)
Ctrl+D      Delete focused task (shortcut)

TASK EDITOR
-----------
Tab         Next field (Shift+Tab: previous)
Space ←/→   Change priority or completion
Enter       Submit
Esc         Close (asks before discarding edits)
F2          Toggle JSON preview

PAGES
-----
</>         Work page: resize the task list
arrows      SVG editor: move the shape
n           Relax page: next suggestion

GENERAL
-------
?           Toggle this help
G           Show logs
q / Ctrl+C  Quit
";

/// Scrollable message dialog shared by info and error popups
fn render_message(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll: &mut ScrollView,
    size: (u16, u16),
) {
    let dialog_area = LayoutManager::centered_rect_lines(size.0, size.1, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(title, color), dialog_area);

    let inner = LayoutManager::inner(dialog_area);
    let [content_area, instructions_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    scroll.render_text(f, content_area, message, Style::default().fg(Color::White));
    f.render_widget(
        common::create_instructions_paragraph(&[shortcuts::ESC_CLOSE, shortcuts::SEPARATOR, shortcuts::JK_SCROLL]),
        instructions_area,
    );
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut ScrollView) {
    let title = format!(" {} Info ", icons.info());
    render_message(f, area, title, Color::Blue, message, scroll, (60, 10));
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, icons: &IconService, message: &str, scroll: &mut ScrollView) {
    let title = format!(" {} Error ", icons.error());
    render_message(f, area, title, Color::Red, message, scroll, (70, 12));
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollView) {
    let dialog_area = LayoutManager::centered_rect(70, 80, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(" Help ", Color::Cyan), dialog_area);
    scroll.render_text(
        f,
        LayoutManager::inner(dialog_area),
        HELP_TEXT.trim_start_matches('\n'),
        Style::default().fg(Color::White),
    );
}

/// In-memory log entries, newest first
pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollView) {
    let dialog_area = LayoutManager::centered_rect(90, 80, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(DIALOG_TITLE_LOGS, Color::Yellow), dialog_area);

    let text = if logs.is_empty() {
        "No log entries yet.".to_string()
    } else {
        logs.join("\n")
    };
    scroll.render_text(f, LayoutManager::inner(dialog_area), &text, Style::default().fg(Color::Gray));
}

/// Prompt for a path to navigate to
pub fn render_go_to_path_dialog(f: &mut Frame, area: Rect, input: &TextInput) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 5, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(common::create_dialog_block(" Go to path ", Color::Cyan), dialog_area);

    let inner = LayoutManager::inner(dialog_area);
    let [input_area, _, instructions_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let prompt = Line::from(vec![
        Span::styled(":", Style::default().fg(Color::Cyan)),
        Span::styled(input.value().to_string(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(prompt), input_area);
    f.render_widget(
        common::create_instructions_paragraph(&[shortcuts::ENTER_GO, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        instructions_area,
    );
}
