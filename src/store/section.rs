//! Section identifiers and the predicates they select.
//!
//! A section is the sidebar's notion of "which tasks am I looking at". The
//! wire form is a plain string (`today`, `project-john-doe`, ...) so it can be
//! stored in config and passed on the command line; [`Section::parse`] turns
//! it into a typed value and never fails.

use chrono::{Duration, NaiveDateTime};

use crate::constants::{
    EMPTY_INBOX_MESSAGE, LABEL_SECTION_PREFIX, PROJECT_SECTION_PREFIX, SECTION_ID_INBOX, SECTION_ID_LABELS,
    SECTION_ID_PROJECTS, SECTION_ID_TODAY, SECTION_ID_UPCOMING, TITLE_ALL_PATIENTS, TITLE_FALLBACK, TITLE_INBOX,
    TITLE_LABELS, TITLE_TODAY, TITLE_UPCOMING,
};
use crate::entities::{Label, Project, Task};
use crate::utils::datetime::{is_same_day, is_within_window};

/// A named filter view over tasks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Open tasks with no project
    Inbox,
    /// Due on the current calendar day
    #[default]
    Today,
    /// Due after now and within the upcoming window
    Upcoming,
    /// Any task with a project reference
    Projects,
    /// Tasks of one project
    Project(String),
    /// Any task carrying at least one label
    Labels,
    /// Tasks carrying one label
    Label(String),
    /// Unrecognized identifier: the unfiltered list
    Other(String),
}

impl Section {
    pub fn parse(id: &str) -> Self {
        match id {
            SECTION_ID_INBOX => Section::Inbox,
            SECTION_ID_TODAY => Section::Today,
            SECTION_ID_UPCOMING => Section::Upcoming,
            SECTION_ID_PROJECTS => Section::Projects,
            SECTION_ID_LABELS => Section::Labels,
            _ => {
                if let Some(project_id) = id.strip_prefix(PROJECT_SECTION_PREFIX).filter(|s| !s.is_empty()) {
                    Section::Project(project_id.to_string())
                } else if let Some(label_id) = id.strip_prefix(LABEL_SECTION_PREFIX).filter(|s| !s.is_empty()) {
                    Section::Label(label_id.to_string())
                } else {
                    Section::Other(id.to_string())
                }
            }
        }
    }

    pub fn id(&self) -> String {
        match self {
            Section::Inbox => SECTION_ID_INBOX.to_string(),
            Section::Today => SECTION_ID_TODAY.to_string(),
            Section::Upcoming => SECTION_ID_UPCOMING.to_string(),
            Section::Projects => SECTION_ID_PROJECTS.to_string(),
            Section::Project(id) => format!("{}{}", PROJECT_SECTION_PREFIX, id),
            Section::Labels => SECTION_ID_LABELS.to_string(),
            Section::Label(id) => format!("{}{}", LABEL_SECTION_PREFIX, id),
            Section::Other(id) => id.clone(),
        }
    }

    /// Whether `task` belongs in this section at instant `now`
    pub fn matches(&self, task: &Task, now: NaiveDateTime, upcoming_window: Duration) -> bool {
        match self {
            Section::Inbox => task.project_id.is_none() && !task.completed,
            Section::Today => task.due_date.is_some_and(|due| is_same_day(due, now)),
            Section::Upcoming => task
                .due_date
                .is_some_and(|due| is_within_window(due, now, upcoming_window)),
            Section::Projects => task.project_id.is_some(),
            Section::Project(id) => task.project_id.as_deref() == Some(id.as_str()),
            Section::Labels => !task.labels.is_empty(),
            Section::Label(id) => task.has_label(id),
            Section::Other(_) => true,
        }
    }

    /// Header title. Unknown projects, labels and identifiers all read "Tasks".
    pub fn title(&self, projects: &[Project], labels: &[Label]) -> String {
        match self {
            Section::Inbox => TITLE_INBOX.to_string(),
            Section::Today => TITLE_TODAY.to_string(),
            Section::Upcoming => TITLE_UPCOMING.to_string(),
            Section::Projects => TITLE_ALL_PATIENTS.to_string(),
            Section::Project(id) => projects
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| TITLE_FALLBACK.to_string()),
            Section::Labels => TITLE_LABELS.to_string(),
            Section::Label(id) => labels
                .iter()
                .find(|l| &l.id == id)
                .map(|l| l.name.clone())
                .unwrap_or_else(|| TITLE_FALLBACK.to_string()),
            Section::Other(_) => TITLE_FALLBACK.to_string(),
        }
    }

    /// Project id for task creation when this section is showing one project
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Section::Project(id) => Some(id),
            _ => None,
        }
    }
}

/// Body text shown when a section has no tasks
pub fn empty_message(section: &Section, title: &str) -> String {
    match section {
        Section::Inbox => EMPTY_INBOX_MESSAGE.to_string(),
        _ => format!("No tasks in {}.", title.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_known_ids() {
        for id in ["inbox", "today", "upcoming", "projects", "labels", "project-emily-chen", "label-labs"] {
            assert_eq!(Section::parse(id).id(), id);
        }
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(Section::parse("project-john-doe"), Section::Project("john-doe".into()));
        assert_eq!(Section::parse("label-labs"), Section::Label("labs".into()));
        assert_eq!(Section::parse("project-"), Section::Other("project-".into()));
        assert_eq!(Section::parse("nonsense"), Section::Other("nonsense".into()));
    }

    #[test]
    fn test_unknown_section_has_fallback_title() {
        assert_eq!(Section::parse("bogus").title(&[], &[]), "Tasks");
        assert_eq!(Section::parse("project-ghost").title(&[], &[]), "Tasks");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            empty_message(&Section::Inbox, "Inbox"),
            "All caught up! Your inbox is empty."
        );
        assert_eq!(empty_message(&Section::Today, "Due Today"), "No tasks in due today.");
    }
}
