//! One-line key hints for the focused pane, or the last operation result

use crate::ui::core::actions::FocusPane;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub struct StatusBar;

impl StatusBar {
    pub fn hints(focus: FocusPane, searching: bool) -> &'static str {
        match (focus, searching) {
            (FocusPane::Patients, true) => "type to search • Enter/Esc: done",
            (FocusPane::Patients, false) => "/: search • Enter: open • t: tasks • Tab: to-do • ?: help • q: quit",
            (FocusPane::Todo, _) => {
                "Enter: expand • Space: toggle • p: priority • a: add • d: delete • Tab: patients • ?: help • q: quit"
            }
        }
    }

    pub fn render(f: &mut Frame, area: Rect, focus: FocusPane, searching: bool, message: Option<&str>) {
        let (text, color) = match message {
            Some(message) => (message.to_string(), Color::Green),
            None => (Self::hints(focus, searching).to_string(), Color::Gray),
        };
        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        f.render_widget(status_bar, area);
    }
}
