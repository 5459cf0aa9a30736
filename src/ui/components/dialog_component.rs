//! Modal dialog component.
//!
//! Hosts the task input dialogs (create, edit), the delete confirmation and
//! the system popups (info, error, help, logs). While a dialog is visible it
//! receives every key event.

use crate::entities::Project;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{scroll_behavior::DialogScroll, system_dialogs, task_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Cursor position in chars, not bytes
    pub cursor_position: usize,
    pub projects: Vec<Project>,
    pub icons: IconService,
    pub scroll: DialogScroll,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            projects: Vec::new(),
            icons: IconService::default(),
            scroll: DialogScroll::new(),
            logger: None,
        }
    }

    pub fn update_data(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.input_buffer.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        let pos = self.byte_pos(self.cursor_position);
        self.input_buffer.insert(pos, c);
        self.cursor_position += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let pos = self.byte_pos(self.cursor_position - 1);
            self.input_buffer.remove(pos);
            self.cursor_position -= 1;
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            let pos = self.byte_pos(self.cursor_position);
            self.input_buffer.remove(pos);
        }
    }

    fn set_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.cursor_position = text.chars().count();
    }

    fn handle_submit(&mut self) -> Action {
        let title = self.input_buffer.trim().to_string();
        let action = match &self.dialog_type {
            Some(DialogType::TaskCreation { default_project_id }) if !title.is_empty() => {
                match default_project_id {
                    Some(id) => log::info!("Creating task in project {}", id),
                    None => log::info!("Creating task in inbox"),
                }
                Action::CreateTask {
                    title,
                    project_id: default_project_id.clone(),
                }
            }
            Some(DialogType::TaskEdit { task_id, .. }) if !title.is_empty() => Action::EditTask {
                id: task_id.clone(),
                title,
            },
            Some(DialogType::DeleteConfirmation { task_id, .. }) => Action::DeleteTask(task_id.clone()),
            _ => return Action::None,
        };
        self.clear_dialog();
        action
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    /// Shared j/k, PageUp/PageDown, Home/End handling; true when the key scrolled
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_forward();
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.input_buffer.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the popup
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => Action::None,
            },
            Some(DialogType::TaskCreation { .. }) | Some(DialogType::TaskEdit { .. }) => self.handle_input_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                match &dialog_type {
                    DialogType::TaskEdit { title, .. } => self.set_input(title),
                    _ => self.set_input(""),
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::TaskCreation { default_project_id } => {
                let project_name = default_project_id
                    .as_deref()
                    .map(|id| self.projects.iter().find(|p| p.id == id).map_or(id, |p| p.name.as_str()));
                task_dialogs::render_task_creation_dialog(
                    f,
                    rect,
                    &self.icons,
                    &self.input_buffer,
                    self.cursor_position,
                    project_name,
                );
            }
            DialogType::TaskEdit { .. } => {
                task_dialogs::render_task_edit_dialog(f, rect, &self.icons, &self.input_buffer, self.cursor_position);
            }
            DialogType::DeleteConfirmation { title, .. } => {
                task_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &title);
            }
            DialogType::Info(message) => {
                system_dialogs::render_message_dialog(f, rect, &self.icons, &message, false, &mut self.scroll);
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(f, rect, &self.icons, &message, true, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, &mut self.scroll);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(dialog: &mut DialogComponent, text: &str) {
        for c in text.chars() {
            dialog.handle_key_events(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_creation_submits_title_and_project() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TaskCreation {
            default_project_id: Some("john-doe".to_string()),
        }));
        type_str(&mut dialog, "Call pharmacy");

        let action = dialog.handle_key_events(key(KeyCode::Enter));
        assert_eq!(
            action,
            Action::CreateTask {
                title: "Call pharmacy".to_string(),
                project_id: Some("john-doe".to_string()),
            }
        );
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_empty_title_is_not_submitted() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TaskCreation {
            default_project_id: None,
        }));
        type_str(&mut dialog, "   ");
        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_edit_is_prefilled_and_cursor_editing_is_char_based() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TaskEdit {
            task_id: "t1".to_string(),
            title: "Révision".to_string(),
        }));
        assert_eq!(dialog.cursor_position, 8);

        for _ in 0..7 {
            dialog.handle_key_events(key(KeyCode::Left));
        }
        dialog.handle_key_events(key(KeyCode::Delete));
        assert_eq!(dialog.input_buffer, "Rvision");
        dialog.handle_key_events(key(KeyCode::Char('e')));
        assert_eq!(dialog.input_buffer, "Revision");

        assert_eq!(
            dialog.handle_key_events(key(KeyCode::Enter)),
            Action::EditTask {
                id: "t1".to_string(),
                title: "Revision".to_string(),
            }
        );
    }

    #[test]
    fn test_delete_confirmation() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation {
            task_id: "t1".to_string(),
            title: "Review labs".to_string(),
        }));
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::None);
        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::DeleteTask("t1".to_string()));
    }

    #[test]
    fn test_info_closes_on_any_key_but_scroll_keys() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Info("done".to_string())));
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None);
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::HideDialog);
    }

    #[test]
    fn test_logs_close_keys() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Logs));
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog);
    }
}
