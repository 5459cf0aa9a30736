use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::entities::{Label, Priority};
use crate::utils::color::convert_hex_color;

/// Create badges with parentheses, used for subtask progress
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(
        format!("({text})"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Create a label badge with custom color
#[must_use]
pub fn create_label_badge(name: &str, color: &str) -> Span<'static> {
    let bg_color = convert_hex_color(color);
    let style = Style::default().bg(bg_color).fg(Color::White).add_modifier(Modifier::BOLD);
    Span::styled(format!(" {name} "), style)
}

/// Label badges for a task's label ids; ids without a known label show raw, uncoloured
#[must_use]
pub fn create_label_badges(label_ids: &[String], labels: &[Label]) -> Vec<Span<'static>> {
    label_ids
        .iter()
        .map(|id| match labels.iter().find(|l| &l.id == id) {
            Some(label) => create_label_badge(&label.name, &label.color),
            None => Span::styled(format!(" {id} "), Style::default().fg(Color::Gray)),
        })
        .collect()
}

/// Priority flag; normal priority shows no badge
#[must_use]
pub fn create_priority_badge(priority: Priority) -> Option<Span<'static>> {
    match priority {
        Priority::High => Some(Span::styled(
            "⚑",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Priority::Low => Some(Span::styled("⚐", Style::default().fg(Color::Blue))),
        Priority::Normal => None,
    }
}

/// Colour used for priority text and icons
#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Normal => Color::White,
        Priority::Low => Color::Blue,
    }
}

/// Two-cell colour swatch for projects in the sidebar
#[must_use]
pub fn create_color_swatch(color: &str) -> Span<'static> {
    Span::styled("■ ", Style::default().fg(convert_hex_color(color)))
}
