use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Rounded dialog frame in the dialog's theme color
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Text input with a block cursor drawn at `cursor_position` (in chars)
pub fn create_input_paragraph(input_buffer: &str, cursor_position: usize, field_title: &str) -> Paragraph<'static> {
    let before: String = input_buffer.chars().take(cursor_position).collect();
    let mut rest = input_buffer.chars().skip(cursor_position);
    let under = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    let after: String = rest.collect();

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(under, Style::default().fg(Color::Black).bg(Color::White)),
        Span::styled(after, Style::default().fg(Color::White)),
    ]))
    .block(input_block)
}

/// Read-only field with a title
pub fn create_selection_paragraph(value: String, field_title: &str) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(value).block(block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

pub fn create_instructions_paragraph(instructions: &[InstructionShortcut]) -> Paragraph<'static> {
    let spans: Vec<Span<'static>> = instructions
        .iter()
        .flat_map(|(key, color, desc)| {
            [
                Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::styled(*desc, Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Vertical scrollbar drawn over the right edge of `area`
pub fn render_dialog_scrollbar(f: &mut Frame, area: Rect, state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));
    f.render_stateful_widget(scrollbar, area, state);
}

pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
}
