use super::Page;
use crate::router::Route;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

/// Canvas coordinates run from 0 to this bound on both axes
const CANVAS_SIZE: f64 = 100.0;
const MOVE_STEP: f64 = 2.0;
const RESIZE_STEP: f64 = 1.0;
const MIN_SIZE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
}

/// A shape anchored at its bottom-left corner (rectangles) or center (circles)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl Shape {
    /// Extent beyond the anchor as (left, bottom, right, top)
    fn extent(&self) -> (f64, f64, f64, f64) {
        match self.kind {
            ShapeKind::Rect { width, height } => (0.0, 0.0, width, height),
            ShapeKind::Circle { radius } => (radius, radius, radius, radius),
        }
    }

    /// Move by (dx, dy) without leaving the canvas
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let (left, bottom, right, top) = self.extent();
        self.x = (self.x + dx).clamp(left, (CANVAS_SIZE - right).max(left));
        self.y = (self.y + dy).clamp(bottom, (CANVAS_SIZE - top).max(bottom));
    }

    pub fn resize(&mut self, delta: f64) {
        self.kind = match self.kind {
            ShapeKind::Rect { width, height } => ShapeKind::Rect {
                width: (width + delta).clamp(MIN_SIZE, CANVAS_SIZE),
                height: (height + delta).clamp(MIN_SIZE, CANVAS_SIZE),
            },
            ShapeKind::Circle { radius } => ShapeKind::Circle {
                radius: (radius + delta).clamp(MIN_SIZE, CANVAS_SIZE / 2.0),
            },
        };
        self.translate(0.0, 0.0);
    }

    /// SVG element describing the shape
    #[must_use]
    pub fn to_svg(&self) -> String {
        match self.kind {
            ShapeKind::Rect { width, height } => format!(
                "<rect x=\"{:.0}\" y=\"{:.0}\" width=\"{:.0}\" height=\"{:.0}\" />",
                self.x, self.y, width, height
            ),
            ShapeKind::Circle { radius } => {
                format!("<circle cx=\"{:.0}\" cy=\"{:.0}\" r=\"{:.0}\" />", self.x, self.y, radius)
            }
        }
    }
}

pub struct SvgEditorPage {
    shapes: Vec<Shape>,
    selected: usize,
}

impl Default for SvgEditorPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgEditorPage {
    pub fn new() -> Self {
        Self {
            shapes: vec![
                Shape {
                    kind: ShapeKind::Rect {
                        width: 30.0,
                        height: 20.0,
                    },
                    x: 10.0,
                    y: 10.0,
                    color: Color::Cyan,
                },
                Shape {
                    kind: ShapeKind::Circle { radius: 12.0 },
                    x: 70.0,
                    y: 60.0,
                    color: Color::Magenta,
                },
            ],
            selected: 0,
        }
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.get_mut(self.selected)
    }

    fn render_canvas(&self, f: &mut Frame, rect: Rect) {
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" SVG editor ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, CANVAS_SIZE])
            .y_bounds([0.0, CANVAS_SIZE])
            .paint(|ctx| {
                for (index, shape) in self.shapes.iter().enumerate() {
                    let color = if index == self.selected { Color::Yellow } else { shape.color };
                    match shape.kind {
                        ShapeKind::Rect { width, height } => ctx.draw(&Rectangle {
                            x: shape.x,
                            y: shape.y,
                            width,
                            height,
                            color,
                        }),
                        ShapeKind::Circle { radius } => ctx.draw(&Circle {
                            x: shape.x,
                            y: shape.y,
                            radius,
                            color,
                        }),
                    }
                }
            });
        f.render_widget(canvas, rect);
    }

    fn render_markup(&self, f: &mut Frame, rect: Rect) {
        let mut lines = vec![Line::styled(
            format!("<svg viewBox=\"0 0 {0} {0}\">", CANVAS_SIZE),
            Style::default().fg(Color::Gray),
        )];
        for (index, shape) in self.shapes.iter().enumerate() {
            let style = if index == self.selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::styled(format!("  {}", shape.to_svg()), style));
        }
        lines.push(Line::styled("</svg>", Style::default().fg(Color::Gray)));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Markup ")
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

impl Component for SvgEditorPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                if !self.shapes.is_empty() {
                    self.selected = (self.selected + 1) % self.shapes.len();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(shape) = self.selected_mut() {
                    shape.translate(-MOVE_STEP, 0.0);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(shape) = self.selected_mut() {
                    shape.translate(MOVE_STEP, 0.0);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(shape) = self.selected_mut() {
                    shape.translate(0.0, MOVE_STEP);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(shape) = self.selected_mut() {
                    shape.translate(0.0, -MOVE_STEP);
                }
            }
            KeyCode::Char('+') => {
                if let Some(shape) = self.selected_mut() {
                    shape.resize(RESIZE_STEP);
                }
            }
            KeyCode::Char('-') => {
                if let Some(shape) = self.selected_mut() {
                    shape.resize(-RESIZE_STEP);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [canvas_area, markup_area] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(rect);
        self.render_canvas(f, canvas_area);
        self.render_markup(f, markup_area);
    }
}

impl Page for SvgEditorPage {
    fn route(&self) -> Route {
        Route::SvgEditor
    }
}
