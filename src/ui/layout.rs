//! Layout management and calculations

use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, WORK_SPLIT_MAX, WORK_SPLIT_MIN};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into body and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        (body, status)
    }

    /// Sidebar beside the page; the sidebar never takes more than half the width
    #[must_use]
    pub fn shell_layout(area: Rect, sidebar_width: u16, collapsed: bool) -> (Rect, Rect) {
        let width = if collapsed { SIDEBAR_COLLAPSED_WIDTH } else { sidebar_width };
        let width = width.min(area.width / 2);
        let [sidebar, page] = Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        (sidebar, page)
    }

    /// Task list on the left, widgets on the right, split at `percent`
    #[must_use]
    pub fn work_layout(area: Rect, percent: u16) -> (Rect, Rect) {
        let percent = percent.clamp(WORK_SPLIT_MIN, WORK_SPLIT_MAX);
        let [list, widgets] = Layout::horizontal([
            Constraint::Percentage(percent),
            Constraint::Percentage(100 - percent),
        ])
        .areas(area);
        (list, widgets)
    }

    /// Area inside a one-cell border
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        })
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Self::centered_columns(percent_x, popup_layout[1])
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines.min(r.height)),
                Constraint::Min(0),
            ])
            .split(r);

        Self::centered_columns(percent_x, popup_layout[1])
    }

    fn centered_columns(percent_x: u16, row: Rect) -> Rect {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(row)[1]
    }
}
