use super::actions::Action;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// A pane of the dashboard: turns input into actions and draws itself
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Panes without mouse support ignore it
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// Consume the actions this component owns and pass the rest through
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
