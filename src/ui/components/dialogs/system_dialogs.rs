use super::common::{create_dialog_block, render_dialog_scrollbar};
use super::scroll_behavior::DialogScroll;
use crate::constants::{APP_TITLE, DIALOG_TITLE_DEBUG_LOGS};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
NAVIGATION
----------
Tab         Switch focus between patients and to-do
j/k ↑↓      Move through the focused list
J/K         Previous/next to-do section
Shift+↑↓    Previous/next to-do section
Esc         Collapse task, close dialog, or quit

PATIENTS
--------
/           Search by name or MRN
Enter       Open patient summary
Esc         Back to all patients
t           Show the patient's tasks

TASKS
-----
Enter       Expand or collapse the task
Space       Toggle completion
p           Cycle priority
1-9         Toggle subtask of the expanded task
a           New task
e           Edit title
d           Delete (with confirmation)

GENERAL
-------
?  h        Toggle this help
G           Show logs
i           Change icon theme
q  Ctrl+C   Quit

NOTES
-----
Completed tasks are listed after open ones.
The inbox lists open tasks only.
";

/// Info or error popup
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    is_error: bool,
    scroll: &mut DialogScroll,
) {
    let (width, height, title, color) = if is_error {
        (70, 12, format!("{} Error", icons.error()), Color::Red)
    } else {
        (60, 10, format!("{} Info", icons.info()), Color::Blue)
    };
    let dialog_area = LayoutManager::centered_rect_lines(width, height, area);
    f.render_widget(Clear, dialog_area);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let first = scroll.visible_window(lines.len(), visible_height);
    let text = lines.iter().skip(first).take(visible_height).copied().collect::<Vec<_>>().join("\n");

    f.render_widget(create_dialog_block(title, color), dialog_area);
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true }),
        content_area,
    );
    f.render_widget(
        Paragraph::new("Press any key to continue • j/k to scroll if needed")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        instructions_area,
    );

    if lines.len() > visible_height {
        render_dialog_scrollbar(f, content_area, &mut scroll.state);
    }
}

/// Large scrollable overlay shared by the help and logs dialogs
fn render_scrollable_overlay(f: &mut Frame, area: Rect, title: &str, lines: &[String], scroll: &mut DialogScroll) {
    let overlay_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, overlay_area);

    let content_area = Rect::new(
        overlay_area.x + 2,
        overlay_area.y + 1,
        overlay_area.width.saturating_sub(4),
        overlay_area.height.saturating_sub(2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let first = scroll.visible_window(lines.len(), visible_height);
    let text = lines
        .iter()
        .skip(first)
        .take(visible_height)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        render_dialog_scrollbar(f, content_area, &mut scroll.state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let mut lines = vec![format!("{APP_TITLE} - Clinical Dashboard"), "=".repeat(30)];
    lines.extend(HELP_TEXT.lines().map(str::to_string));
    render_scrollable_overlay(f, area, "Help - Press 'Esc', '?' or 'h' to close", &lines, scroll);
}

/// Newest log line first
pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut DialogScroll) {
    let lines = if logs.is_empty() {
        vec!["No logs yet".to_string()]
    } else {
        logs.to_vec()
    };
    render_scrollable_overlay(f, area, DIALOG_TITLE_DEBUG_LOGS, &lines, scroll);
}
