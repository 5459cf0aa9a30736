//! Shared scrollbar handling for bordered, scrollable lists.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the layout rule for where it goes.
///
/// The bar only appears when the content is taller than the area inside the
/// borders, and then takes the rightmost column of that inner area.
#[derive(Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);
        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Content area and, when needed, the one-column scrollbar area
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let inner_height = rect.height.saturating_sub(2);
        if !Self::needs_scrollbar(total_items, inner_height as usize) {
            return (rect, None);
        }

        let content = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let bar = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: inner_height,
        };
        (content, Some(bar))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        let Some(area) = scrollbar_area else {
            return;
        };
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(Color::DarkGray))
            .thumb_style(Style::default().fg(Color::DarkGray));
        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
