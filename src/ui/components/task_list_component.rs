use crate::config::DisplayConfig;
use crate::constants::EMPTY_TASKS_HEADER;
use crate::entities::{Label, Project, Task};
use crate::icons::IconService;
use crate::store::Section;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::task_list_item_component::{
    detail_items, ListItem as TaskListItem, TaskItem, TaskListItemType,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Everything the task list needs from the session for one frame
#[derive(Debug, Clone)]
pub struct TaskListView {
    pub tasks: Vec<Task>,
    pub section: Section,
    pub title: String,
    pub empty_message: String,
    pub expanded_task_id: Option<String>,
    pub projects: Vec<Project>,
    pub labels: Vec<Label>,
    pub today: NaiveDate,
}

/// "1 task" / "3 tasks"
pub fn task_count_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub section: Section,
    pub title: String,
    pub empty_message: String,
    pub expanded_task_id: Option<String>,
    pub projects: Vec<Project>,
    pub labels: Vec<Label>,
    pub icons: IconService,
    pub display_config: DisplayConfig,
    pub focused: bool,
    today: NaiveDate,
    items: Vec<TaskListItemType>,
    scrollbar_helper: ScrollbarHelper,
    last_area: Rect,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            section: Section::default(),
            title: String::new(),
            empty_message: String::new(),
            expanded_task_id: None,
            projects: Vec::new(),
            labels: Vec::new(),
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
            focused: true,
            today: NaiveDate::default(),
            items: Vec::new(),
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: Rect::default(),
        }
    }

    /// Replace the displayed data, keeping the cursor on the same task when it is still listed
    pub fn update_data(&mut self, view: TaskListView) {
        let selected_id = self.get_selected_task().map(|t| t.id.clone());
        let section_changed = view.section != self.section;

        self.tasks = view.tasks;
        self.section = view.section;
        self.title = view.title;
        self.empty_message = view.empty_message;
        self.expanded_task_id = view.expanded_task_id;
        self.projects = view.projects;
        self.labels = view.labels;
        self.today = view.today;

        if section_changed {
            self.selected_index = 0;
        } else if let Some(index) = selected_id.and_then(|id| self.tasks.iter().position(|t| t.id == id)) {
            self.selected_index = index;
        }
        self.rebuild_items();
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn expanded_task(&self) -> Option<&Task> {
        let id = self.expanded_task_id.as_deref()?;
        self.tasks.iter().find(|t| t.id == id)
    }

    fn rebuild_items(&mut self) {
        let width = self.last_area.width.saturating_sub(3) as usize;
        let mut items = Vec::with_capacity(self.tasks.len());
        for task in &self.tasks {
            let expanded = self.expanded_task_id.as_deref() == Some(task.id.as_str());
            items.push(TaskListItemType::Task(Box::new(TaskItem::new(
                task.clone(),
                expanded,
                self.icons.clone(),
                &self.projects,
                &self.labels,
                self.today,
            ))));
            if expanded {
                items.extend(
                    detail_items(
                        task,
                        &self.projects,
                        &self.labels,
                        &self.icons,
                        &self.display_config,
                        self.today,
                        width,
                    )
                    .into_iter()
                    .map(TaskListItemType::Detail),
                );
            }
        }
        self.items = items;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
            return;
        }
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
        let rendered_index = self.calculate_rendered_index();
        self.list_state.select(Some(rendered_index));
    }

    /// Index of the selected task among rendered rows, detail lines included
    fn calculate_rendered_index(&self) -> usize {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selectable())
            .nth(self.selected_index)
            .map_or(0, |(index, _)| index)
    }

    fn selected_id(&self) -> Option<String> {
        self.get_selected_task().map(|t| t.id.clone())
    }

    fn render_empty(&mut self, f: &mut Frame, rect: Rect, block: Block) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_TASKS_HEADER,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.empty_message.clone(), Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }
}

impl Component for TaskListComponent {
    /// A click on a task row toggles its expansion
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.last_area;
        if !LayoutManager::contains(area, mouse.column, mouse.row) || self.tasks.is_empty() {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row <= area.y || mouse.row >= area.y + area.height - 1 {
                    return Action::None;
                }
                let clicked = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
                let Some(task_id) = self.items.get(clicked).and_then(|item| item.task_id()) else {
                    return Action::None;
                };
                let task_id = task_id.to_string();
                if let Some(index) = self.tasks.iter().position(|t| t.id == task_id) {
                    self.selected_index = index;
                    self.update_list_state();
                }
                Action::ToggleExpand(task_id)
            }
            MouseEventKind::ScrollUp => Action::PreviousTask,
            MouseEventKind::ScrollDown => Action::NextTask,
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter => self.selected_id().map_or(Action::None, Action::ToggleExpand),
            KeyCode::Char(' ') => self.selected_id().map_or(Action::None, Action::CompleteTask),
            KeyCode::Char('p') => self.selected_id().map_or(Action::None, Action::CyclePriority),
            KeyCode::Char('d') => match self.get_selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.get_selected_task() {
                Some(task) => Action::ShowDialog(DialogType::TaskEdit {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation {
                // New tasks land in the project being viewed, otherwise the inbox
                default_project_id: self.section.project_id().map(str::to_string),
            }),
            KeyCode::Char(c @ '1'..='9') => match self.expanded_task() {
                Some(task) => {
                    let index = (c as usize) - ('1' as usize);
                    if index < task.subtasks.len() {
                        Action::ToggleSubtask {
                            task_id: task.id.clone(),
                            index,
                        }
                    } else {
                        Action::None
                    }
                }
                None => Action::None,
            },
            KeyCode::Esc if self.expanded_task_id.is_some() => Action::CollapseTask,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if rect.width != self.last_area.width {
            // Notes wrap to the list width
            self.last_area = rect;
            self.rebuild_items();
        }
        self.last_area = rect;

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(vec![
                Span::styled(
                    format!("{} {}", self.icons.tasks_title(), self.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" · {} ", task_count_label(self.tasks.len())),
                    Style::default().fg(Color::Gray),
                ),
            ]))
            .border_style(Style::default().fg(border_color));

        if self.tasks.is_empty() {
            self.render_empty(f, rect, block);
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| item.render(&self.display_config))
            .collect();
        let total_items = rows.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);
        let position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(total_items, position, Some(rect.height.saturating_sub(2) as usize));

        let list = List::new(rows).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
