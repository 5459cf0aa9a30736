//! Sidebar rows built from navigator entries.

use crate::icons::IconService;
use crate::store::{EntryKind, NavEntry, Section};
use crate::ui::components::badge::create_color_swatch;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One rendered sidebar row
#[derive(Clone, Debug)]
pub struct SidebarItem {
    pub entry: NavEntry,
}

impl SidebarItem {
    pub fn new(entry: NavEntry) -> Self {
        Self { entry }
    }

    pub fn section(&self) -> &Section {
        &self.entry.section
    }

    pub fn is_selected(&self, current: &Section) -> bool {
        &self.entry.section == current
    }

    /// Icon, indented title and a right-aligned count within `width` columns
    pub fn render(&self, icons: &IconService, current: &Section, width: usize) -> ListItem<'static> {
        let selected = self.is_selected(current);
        let style = match (&self.entry.kind, selected) {
            (_, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (EntryKind::Group, false) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::White),
        };

        let mut spans = Vec::new();
        let indent = if self.entry.depth() > 0 { "  " } else { "" };
        spans.push(Span::raw(indent));

        match &self.entry.kind {
            EntryKind::Project { color } => {
                spans.push(create_color_swatch(color));
                spans.push(Span::styled(format!("{} ", icons.section_icon(self.entry.icon)), style));
            }
            EntryKind::Label { color } => spans.push(create_color_swatch(color)),
            EntryKind::View | EntryKind::Group => {
                spans.push(Span::styled(format!("{} ", icons.section_icon(self.entry.icon)), style));
            }
        }

        let count = self.entry.count.to_string();
        let used: usize = spans.iter().map(|s| s.width()).sum();
        let room = width.saturating_sub(used + count.len() + 1);
        let title: String = if self.entry.title.chars().count() > room {
            let mut t: String = self.entry.title.chars().take(room.saturating_sub(1)).collect();
            t.push('…');
            t
        } else {
            self.entry.title.clone()
        };
        let padding = room.saturating_sub(title.chars().count()) + 1;

        spans.push(Span::styled(title, style));
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(count, Style::default().fg(Color::DarkGray)));

        ListItem::new(Line::from(spans))
    }
}
