use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Scroll position of a read-only dialog body.
///
/// The offset may run past the end while keys are handled; `visible_window`
/// clamps it against the real content height at render time.
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.offset = self.offset.saturating_add(PAGE_SIZE);
    }

    pub fn top(&mut self) {
        self.offset = 0;
    }

    pub fn bottom(&mut self) {
        self.offset = usize::MAX;
    }

    /// Clamp the offset for `total` lines shown `visible` at a time and
    /// return the first line to draw
    pub fn visible_window(&mut self, total: usize, visible: usize) -> usize {
        let max_scroll = total.saturating_sub(visible);
        self.offset = self.offset.min(max_scroll);
        self.state = self
            .state
            .content_length(total)
            .viewport_content_length(visible)
            .position(self.offset);
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_clamped_at_render() {
        let mut scroll = DialogScroll::new();
        scroll.bottom();
        assert_eq!(scroll.visible_window(30, 10), 20);
        scroll.page_up();
        scroll.page_up();
        scroll.page_up();
        assert_eq!(scroll.visible_window(30, 10), 0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut scroll = DialogScroll::new();
        scroll.down();
        scroll.down();
        assert_eq!(scroll.visible_window(3, 10), 0);
    }
}
