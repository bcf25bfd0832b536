use crate::config::DisplayConfig;
use crate::constants::NOT_AVAILABLE;
use crate::entities::Task;
use crate::icons::IconService;
use crate::utils::datetime;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One task row: status and title, optional description, then due date and priority
#[derive(Debug, Clone)]
pub struct TaskItem<'a> {
    pub task: &'a Task,
    pub icons: &'a IconService,
    /// Task is the target of an edit or delete in progress
    pub active: bool,
}

impl<'a> TaskItem<'a> {
    pub fn new(task: &'a Task, icons: &'a IconService, active: bool) -> Self {
        Self { task, icons, active }
    }

    /// `Due: <date | N/A> | Priority: <priority | N/A>`
    #[must_use]
    pub fn meta_text(&self, date_format: &str) -> String {
        let due = self
            .task
            .due_date
            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| datetime::format_with(d, date_format));
        let priority = self.task.priority.map_or(NOT_AVAILABLE, |p| p.as_str());
        format!("Due: {} | Priority: {}", due, priority)
    }

    pub fn render(&self, focused: bool, display: &DisplayConfig) -> ListItem<'static> {
        let status_icon = if self.task.completed {
            self.icons.task_completed()
        } else {
            self.icons.task_pending()
        };
        let status_style = if self.task.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let mut title_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if self.task.completed {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let mut title_spans = vec![
            Span::styled(format!("{} ", status_icon), status_style),
            Span::styled(self.task.title.clone(), title_style),
        ];
        if self.active {
            title_spans.push(Span::styled(" ◆", Style::default().fg(Color::Magenta)));
        }

        let mut lines = vec![Line::from(title_spans)];

        if display.show_descriptions {
            if let Some(description) = &self.task.description {
                lines.push(Line::from(Span::styled(
                    format!("    {}", description),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        let mut meta_spans = vec![Span::styled(
            format!("    {}", self.meta_text(&display.date_format)),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(priority) = self.task.priority {
            meta_spans.push(Span::styled(
                format!(" {}", self.icons.priority(priority)),
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(meta_spans));

        ListItem::new(lines)
    }
}
