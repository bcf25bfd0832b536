use super::common::{self, shortcuts};
use crate::constants::{
    DIALOG_TITLE_CREATE, DIALOG_TITLE_EDIT, DISCARD_LABEL, DISCARD_PROMPT, PRIORITY_PLACEHOLDER, SUBMIT_LABEL_CREATE,
    SUBMIT_LABEL_EDIT,
};
use crate::entities::Task;
use crate::icons::IconService;
use crate::ui::components::form_fields::{self, FieldFrame};
use crate::ui::forms::{FormField, TaskForm};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const EDITOR_HEIGHT: u16 = 20;

fn frame_for<'a>(form: &'a TaskForm, field: FormField) -> FieldFrame<'a> {
    FieldFrame::new(field.label(), form.focus() == field, form.error_for(field))
}

/// Task editor: one labelled widget per form field, plus an optional JSON preview
pub fn render_task_editor_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &TaskForm, preview: bool) {
    let width = if preview { 90 } else { 60 };
    let dialog_area = LayoutManager::centered_rect_lines(width, EDITOR_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let title = if form.is_create() {
        format!(" {} ", DIALOG_TITLE_CREATE)
    } else {
        format!(" {}: {} ", DIALOG_TITLE_EDIT, form.bound_task().map_or("", |t| t.title.as_str()))
    };
    let submit_label = if form.is_create() { SUBMIT_LABEL_CREATE } else { SUBMIT_LABEL_EDIT };
    let block = common::create_dialog_block(title, Color::Cyan)
        .title_bottom(Line::from(Span::styled(format!(" [ {} ] ", DISCARD_LABEL), Style::default().fg(Color::Red))))
        .title_bottom(
            Line::from(Span::styled(
                format!(" [ {} ] ", submit_label),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    f.render_widget(block, dialog_area);

    let inner = LayoutManager::inner(dialog_area);
    let [body, instructions_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let fields_area = if preview {
        let [fields, json] = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
        render_preview(f, json, form);
        fields
    } else {
        body
    };

    let [title_area, due_area, description_area, priority_area, completed_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(fields_area);

    if let Some(input) = form.text(FormField::Title) {
        form_fields::render_input(f, title_area, frame_for(form, FormField::Title), input);
    }
    if let Some(input) = form.text(FormField::DueDate) {
        form_fields::render_date_picker(f, due_area, frame_for(form, FormField::DueDate), input);
    }
    if let Some(input) = form.text(FormField::Description) {
        form_fields::render_textarea(f, description_area, frame_for(form, FormField::Description), input);
    }
    form_fields::render_select(
        f,
        priority_area,
        frame_for(form, FormField::Priority),
        form.priority().map(|p| p.as_str()),
        PRIORITY_PLACEHOLDER,
    );
    form_fields::render_checkbox(
        f,
        completed_area,
        frame_for(form, FormField::Completed),
        form.completed(),
        icons,
    );

    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::SPACE_CHANGE,
            shortcuts::SEPARATOR,
            shortcuts::F2_PREVIEW,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        instructions_area,
    );
}

fn render_preview(f: &mut Frame, area: Rect, form: &TaskForm) {
    let json = form
        .preview_json()
        .unwrap_or_else(|e| format!("preview unavailable: {}", e));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Form value ")
        .border_style(Style::default().fg(Color::Magenta));
    f.render_widget(
        Paragraph::new(json)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Asked when closing an editor with unsaved edits
pub fn render_discard_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService) {
    let dialog_area = LayoutManager::centered_rect_lines(40, 5, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(
        common::create_dialog_block(format!(" {} {} ", icons.warning(), DISCARD_PROMPT), Color::Yellow),
        dialog_area,
    );

    let inner = LayoutManager::inner(dialog_area);
    let [message_area, instructions_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(inner);

    f.render_widget(
        Paragraph::new("Your edits will be lost.")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        message_area,
    );
    f.render_widget(
        common::create_instructions_paragraph(&[shortcuts::Y_DISCARD, shortcuts::SEPARATOR, shortcuts::N_KEEP]),
        instructions_area,
    );
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, task: &Task) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(
        common::create_dialog_block(format!(" {} Confirm Delete ", icons.warning()), Color::Red),
        dialog_area,
    );

    let inner = LayoutManager::inner(dialog_area);
    let [message_area, instructions_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(inner);

    let message = Line::from(vec![
        Span::raw("Delete task "),
        Span::styled(task.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("?"),
    ]);
    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        message_area,
    );
    f.render_widget(
        common::create_instructions_paragraph(&[
            shortcuts::ENTER_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        instructions_area,
    );
}
