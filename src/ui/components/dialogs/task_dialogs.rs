use super::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph, shortcuts,
};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_task_creation_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    input_buffer: &str,
    cursor_position: usize,
    project_name: Option<&str>,
) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 12, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(format!("{} New Task", icons.tasks_title()), Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    let [title_area, project_area, _, instructions_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(inner_area);

    let project = project_name.map_or_else(|| "None (Inbox)".to_string(), |name| format!("{} {name}", icons.patient()));

    let instructions = [
        ("Enter", Color::Green, " Create Task"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];

    f.render_widget(main_block, dialog_area);
    f.render_widget(create_input_paragraph(input_buffer, cursor_position, "Title"), title_area);
    f.render_widget(create_selection_paragraph(project, "Patient"), project_area);
    f.render_widget(create_instructions_paragraph(&instructions), instructions_area);
}

pub fn render_task_edit_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    input_buffer: &str,
    cursor_position: usize,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(format!("{} Edit Task", icons.info()), Color::Yellow);
    let inner_area = main_block.inner(dialog_area);
    let [input_area, _, instructions_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1), Constraint::Length(1)])
            .margin(1)
            .areas(inner_area);

    let instructions = [shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL];

    f.render_widget(main_block, dialog_area);
    f.render_widget(create_input_paragraph(input_buffer, cursor_position, "Title"), input_area);
    f.render_widget(create_instructions_paragraph(&instructions), instructions_area);
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, task_title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(format!("{} Delete Task", icons.error()), Color::Red);
    let inner_area = main_block.inner(dialog_area);
    let [message_area, instructions_area] =
        Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).margin(1).areas(inner_area);

    let message = Paragraph::new(vec![
        Line::from(Span::styled("Delete this task?", Style::default().fg(Color::White))),
        Line::from(Span::styled(
            task_title.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    let instructions = [("Enter", Color::Red, " Delete"), shortcuts::SEPARATOR, shortcuts::ESC_CANCEL];

    f.render_widget(main_block, dialog_area);
    f.render_widget(message, message_area);
    f.render_widget(create_instructions_paragraph(&instructions), instructions_area);
}
