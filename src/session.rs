//! Session-scoped to-do controller.
//!
//! Owns the task store together with the two pieces of UI state that must
//! stay consistent with it: the selected section and the single expanded
//! task. Every mutation happens through `&mut self`, so there is exactly one
//! writer per session.

use chrono::NaiveDateTime;

use crate::entities::{Label, Project, Task};
use crate::store::{empty_message, NavEntry, Navigator, Section, StoreError, TaskStore};

#[derive(Debug, Clone)]
pub struct TodoSession {
    store: TaskStore,
    projects: Vec<Project>,
    labels: Vec<Label>,
    selected_section: Section,
    expanded_task_id: Option<String>,
}

impl TodoSession {
    pub fn new(store: TaskStore, projects: Vec<Project>, labels: Vec<Label>) -> Self {
        Self {
            store,
            projects,
            labels,
            selected_section: Section::default(),
            expanded_task_id: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn selected_section(&self) -> &Section {
        &self.selected_section
    }

    pub fn expanded_task_id(&self) -> Option<&str> {
        self.expanded_task_id.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_task_id.as_deref() == Some(id)
    }

    pub fn select_section(&mut self, section: Section) {
        log::info!("Session: section changed to {}", section.id());
        self.selected_section = section;
    }

    /// Toggle expansion of `id`; expanding one task collapses any other
    pub fn click_task(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded_task_id = None;
        } else {
            self.expanded_task_id = Some(id.to_string());
        }
    }

    pub fn collapse(&mut self) {
        self.expanded_task_id = None;
    }

    /// Full-record replacement; leaves the expansion state alone
    pub fn update_task(&mut self, task: Task) -> bool {
        self.store.update(task)
    }

    /// Remove a task and drop the expansion pointer if it pointed at it
    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = self.store.delete(id);
        if self.is_expanded(id) {
            self.expanded_task_id = None;
        }
        removed
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), StoreError> {
        self.store.add(task)
    }

    pub fn toggle_completed(&mut self, id: &str) -> bool {
        self.store.toggle_completed(id)
    }

    pub fn cycle_priority(&mut self, id: &str) -> bool {
        self.store.cycle_priority(id)
    }

    pub fn toggle_subtask(&mut self, id: &str, index: usize) -> bool {
        self.store.toggle_subtask(id, index)
    }

    pub fn rename_task(&mut self, id: &str, title: &str) -> bool {
        self.store.rename(id, title)
    }

    /// Tasks for the selected section
    pub fn visible_tasks(&self, now: NaiveDateTime) -> Vec<Task> {
        self.store.filter_by_section(&self.selected_section, now)
    }

    /// The expanded task, if it is still in the store
    pub fn expanded_task(&self) -> Option<&Task> {
        self.expanded_task_id.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn section_title(&self) -> String {
        self.selected_section.title(&self.projects, &self.labels)
    }

    pub fn empty_message(&self) -> String {
        empty_message(&self.selected_section, &self.section_title())
    }

    pub fn nav_entries(&self, now: NaiveDateTime) -> Vec<NavEntry> {
        Navigator::entries(&self.store, &self.projects, &self.labels, now)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn label(&self, id: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    /// Project linked to a directory patient
    pub fn project_for_patient(&self, patient_id: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.patient_id.as_deref() == Some(patient_id))
    }
}
