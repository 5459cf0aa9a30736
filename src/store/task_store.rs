use chrono::{Duration, NaiveDateTime};

use super::section::Section;
use super::StoreError;
use crate::constants::DEFAULT_UPCOMING_WINDOW_DAYS;
use crate::entities::Task;

/// Authoritative in-memory task collection for one session.
///
/// Writes on unknown ids are silent no-ops; the returned `bool` tells whether
/// anything changed and may be ignored.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    upcoming_window: Duration,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            upcoming_window: Duration::days(DEFAULT_UPCOMING_WINDOW_DAYS),
        }
    }
}

impl TaskStore {
    /// Build a store from seed tasks, rejecting duplicate ids
    pub fn new(tasks: Vec<Task>) -> Result<Self, StoreError> {
        let mut store = Self::default();
        for task in tasks {
            store.add(task)?;
        }
        Ok(store)
    }

    #[must_use]
    pub fn with_upcoming_window(mut self, window: Duration) -> Self {
        self.upcoming_window = window;
        self
    }

    pub fn upcoming_window(&self) -> Duration {
        self.upcoming_window
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Tasks in `section` at `now`, incomplete first, completed last.
    ///
    /// The partition is stable: within each group tasks keep collection order.
    pub fn filter_by_section(&self, section: &Section, now: NaiveDateTime) -> Vec<Task> {
        let (open, done): (Vec<Task>, Vec<Task>) = self
            .tasks
            .iter()
            .filter(|task| section.matches(task, now, self.upcoming_window))
            .cloned()
            .partition(|task| !task.completed);

        let mut result = open;
        result.extend(done);
        result
    }

    pub fn count_in_section(&self, section: &Section, now: NaiveDateTime) -> usize {
        self.tasks
            .iter()
            .filter(|task| section.matches(task, now, self.upcoming_window))
            .count()
    }

    /// Replace the task with the same id in place
    pub fn update(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                log::debug!("TaskStore: updated task {} '{}'", task.id, task.title);
                *slot = task;
                true
            }
            None => {
                log::debug!("TaskStore: update ignored, no task {}", task.id);
                false
            }
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            log::debug!("TaskStore: deleted task {}", id);
        } else {
            log::debug!("TaskStore: delete ignored, no task {}", id);
        }
        removed
    }

    /// Append a new task
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        if self.contains(&task.id) {
            return Err(StoreError::DuplicateId(task.id));
        }
        log::debug!("TaskStore: added task {} '{}'", task.id, task.title);
        self.tasks.push(task);
        Ok(())
    }

    pub fn toggle_completed(&mut self, id: &str) -> bool {
        self.modify(id, |task| task.completed = !task.completed)
    }

    pub fn cycle_priority(&mut self, id: &str) -> bool {
        self.modify(id, |task| task.priority = task.priority.next())
    }

    /// Flip the subtask at `index`; out-of-range indexes are ignored
    pub fn toggle_subtask(&mut self, id: &str, index: usize) -> bool {
        let Some(task) = self.get(id) else {
            return false;
        };
        if index >= task.subtasks.len() {
            return false;
        }
        self.modify(id, |task| {
            let subtask = &mut task.subtasks[index];
            subtask.completed = !subtask.completed;
        })
    }

    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        self.modify(id, |task| task.title = title.to_string())
    }

    /// Live number of tasks referencing `project_id`
    pub fn project_task_count(&self, project_id: &str) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.project_id.as_deref() == Some(project_id))
            .count()
    }

    /// Live number of open tasks referencing `project_id`
    pub fn open_project_task_count(&self, project_id: &str) -> usize {
        self.tasks
            .iter()
            .filter(|t| !t.completed && t.project_id.as_deref() == Some(project_id))
            .count()
    }

    /// Live number of tasks carrying `label_id`
    pub fn label_task_count(&self, label_id: &str) -> usize {
        self.tasks.iter().filter(|t| t.has_label(label_id)).count()
    }

    // Mutations go through `update` so every write is a full-record replacement.
    fn modify<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut Task),
    {
        let Some(mut task) = self.get(id).cloned() else {
            log::debug!("TaskStore: modify ignored, no task {}", id);
            return false;
        };
        f(&mut task);
        self.update(task)
    }
}
