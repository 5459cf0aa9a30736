use crate::config::DisplayConfig;
use crate::entities::{Label, Project, Task};
use crate::icons::IconService;
use crate::ui::components::badge::{create_label_badges, create_paren_badge, create_priority_badge, priority_color};
use crate::utils::datetime::format_human_date_from;
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// Trait for items that can be displayed in a task list
pub trait ListItem {
    fn render(&self, display_config: &DisplayConfig) -> RatatuiListItem<'static>;

    /// Whether this item can carry the list cursor
    fn is_selectable(&self) -> bool;
}

/// Rows of the task list: one per task, plus detail lines under the expanded task
#[derive(Debug, Clone)]
pub enum TaskListItemType {
    Task(Box<TaskItem>),
    Detail(DetailItem),
}

impl TaskListItemType {
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Self::Task(item) => Some(item.task.id.as_str()),
            Self::Detail(_) => None,
        }
    }
}

impl ListItem for TaskListItemType {
    fn render(&self, display_config: &DisplayConfig) -> RatatuiListItem<'static> {
        match self {
            Self::Task(item) => item.render(display_config),
            Self::Detail(item) => item.render(display_config),
        }
    }

    fn is_selectable(&self) -> bool {
        matches!(self, Self::Task(_))
    }
}

/// A single task row
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: Task,
    pub expanded: bool,
    pub icons: IconService,
    pub project_name: Option<String>,
    pub labels: Vec<Label>,
    pub today: NaiveDate,
}

impl TaskItem {
    pub fn new(
        task: Task,
        expanded: bool,
        icons: IconService,
        projects: &[Project],
        labels: &[Label],
        today: NaiveDate,
    ) -> Self {
        let project_name = task
            .project_id
            .as_deref()
            .map(|id| projects.iter().find(|p| p.id == id).map_or_else(|| id.to_string(), |p| p.name.clone()));
        Self {
            task,
            expanded,
            icons,
            project_name,
            labels: labels.to_vec(),
            today,
        }
    }

    fn render(&self, display_config: &DisplayConfig) -> RatatuiListItem<'static> {
        let mut spans = Vec::new();

        spans.push(Span::styled(
            format!("{} ", self.icons.disclosure(self.expanded)),
            Style::default().fg(Color::DarkGray),
        ));

        let status_style = if self.task.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("{} ", self.icons.task_status(self.task.completed)),
            status_style,
        ));

        if let Some(badge) = create_priority_badge(self.task.priority) {
            spans.push(badge);
            spans.push(Span::raw(" "));
        }

        let title_style = if self.task.completed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if self.expanded {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(self.task.title.clone(), title_style));

        if let Some(name) = &self.project_name {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("#{name}"), Style::default().fg(Color::Cyan)));
        }

        if let Some(due) = self.task.due_date {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format_human_date_from(due, self.today),
                Style::default().fg(Color::Rgb(255, 165, 0)),
            ));
        }

        let (done, total) = self.task.subtask_progress();
        if display_config.show_subtask_progress && total > 0 {
            spans.push(Span::raw(" "));
            spans.push(create_paren_badge(&format!("{done}/{total}")));
        }

        if display_config.show_labels {
            for badge in create_label_badges(&self.task.labels, &self.labels) {
                spans.push(Span::raw(" "));
                spans.push(badge);
            }
        }

        RatatuiListItem::new(Line::from(spans))
    }
}

/// A non-selectable line of the expanded detail view
#[derive(Debug, Clone)]
pub struct DetailItem {
    pub line: Line<'static>,
}

impl DetailItem {
    fn render(&self, _display_config: &DisplayConfig) -> RatatuiListItem<'static> {
        RatatuiListItem::new(self.line.clone())
    }
}

const DETAIL_INDENT: &str = "    ";

fn field(name: &str, value: String, value_style: Style) -> DetailItem {
    DetailItem {
        line: Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled(format!("{name}: "), Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
            Span::styled(value, value_style),
        ]),
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Detail lines for the expanded task: notes, due date, priority, patient,
/// labels (resolved names, unknown ids raw) and numbered subtasks
pub fn detail_items(
    task: &Task,
    projects: &[Project],
    labels: &[Label],
    icons: &IconService,
    display_config: &DisplayConfig,
    today: NaiveDate,
    width: usize,
) -> Vec<DetailItem> {
    let mut items = Vec::new();
    let plain = Style::default().fg(Color::White);
    let text_width = width.saturating_sub(DETAIL_INDENT.len() + 2);

    if display_config.show_notes && !task.notes.is_empty() {
        for line in wrap_text(&task.notes, text_width) {
            items.push(DetailItem {
                line: Line::from(vec![
                    Span::raw(DETAIL_INDENT),
                    Span::styled(line, Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)),
                ]),
            });
        }
    }

    let due = match task.due_date {
        Some(date) => format!(
            "{} ({})",
            date.format(&display_config.date_format),
            format_human_date_from(date, today)
        ),
        None => "none".to_string(),
    };
    items.push(field("Due", due, plain));

    items.push(field(
        "Priority",
        format!("{} {}", icons.priority(task.priority), task.priority.as_str()),
        Style::default().fg(priority_color(task.priority)),
    ));

    if let Some(project_id) = &task.project_id {
        let name = projects
            .iter()
            .find(|p| &p.id == project_id)
            .map_or_else(|| project_id.clone(), |p| p.name.clone());
        items.push(field("Patient", format!("{} {}", icons.patient(), name), plain));
    }

    if !task.labels.is_empty() {
        let names: Vec<String> = task
            .labels
            .iter()
            .map(|id| labels.iter().find(|l| &l.id == id).map_or_else(|| id.clone(), |l| l.name.clone()))
            .collect();
        items.push(field("Labels", names.join(", "), plain));
    }

    if !task.subtasks.is_empty() {
        let (done, total) = task.subtask_progress();
        items.push(field("Subtasks", format!("{done}/{total} complete"), plain));
        for (index, subtask) in task.subtasks.iter().enumerate() {
            let style = if subtask.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                plain
            };
            items.push(DetailItem {
                line: Line::from(vec![
                    Span::raw(format!("{DETAIL_INDENT}  {}. ", index + 1)),
                    Span::raw(format!("{} ", icons.task_status(subtask.completed))),
                    Span::styled(subtask.title.clone(), style),
                ]),
            });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("", 10), Vec::<String>::new());
        assert_eq!(wrap_text("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
    }
}
