use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A drawable unit that turns key presses into [`Action`]s
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume the actions this component owns; anything else is returned untouched
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
