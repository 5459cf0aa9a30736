//! Sidebar enumeration: sections, projects and labels with live counts.

use chrono::NaiveDateTime;

use super::section::Section;
use super::task_store::TaskStore;
use crate::constants::{TITLE_INBOX, TITLE_LABELS, TITLE_PATIENTS, TITLE_TODAY, TITLE_UPCOMING};
use crate::entities::{Label, Project};

/// What a sidebar row represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Date or inbox view
    View,
    /// Group header with children (Patients, Labels)
    Group,
    /// A single project under Patients
    Project { color: String },
    /// A single label under Labels
    Label { color: String },
}

/// One selectable sidebar row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub section: Section,
    pub title: String,
    pub kind: EntryKind,
    pub count: usize,
    /// Icon name understood by `IconService::section_icon`
    pub icon: &'static str,
}

impl NavEntry {
    pub fn depth(&self) -> usize {
        match self.kind {
            EntryKind::Project { .. } | EntryKind::Label { .. } => 1,
            _ => 0,
        }
    }
}

/// Stateless mapping from the task store to sidebar rows
pub struct Navigator;

impl Navigator {
    /// Inbox, Due Today, Due This Week, Patients (+ each project), Labels (+ each label)
    pub fn entries(store: &TaskStore, projects: &[Project], labels: &[Label], now: NaiveDateTime) -> Vec<NavEntry> {
        let mut entries = vec![
            Self::view(store, Section::Inbox, TITLE_INBOX, "inbox", now),
            Self::view(store, Section::Today, TITLE_TODAY, "calendar", now),
            Self::view(store, Section::Upcoming, TITLE_UPCOMING, "clock", now),
            NavEntry {
                section: Section::Projects,
                title: TITLE_PATIENTS.to_string(),
                kind: EntryKind::Group,
                count: projects.len(),
                icon: "folder",
            },
        ];

        entries.extend(projects.iter().map(|project| NavEntry {
            section: Section::Project(project.id.clone()),
            title: project.name.clone(),
            kind: EntryKind::Project {
                color: project.color.clone(),
            },
            count: store.project_task_count(&project.id),
            icon: "project",
        }));

        entries.push(NavEntry {
            section: Section::Labels,
            title: TITLE_LABELS.to_string(),
            kind: EntryKind::Group,
            count: labels.len(),
            icon: "tag",
        });

        entries.extend(labels.iter().map(|label| NavEntry {
            section: Section::Label(label.id.clone()),
            title: label.name.clone(),
            kind: EntryKind::Label {
                color: label.color.clone(),
            },
            count: store.label_task_count(&label.id),
            icon: "label",
        }));

        entries
    }

    fn view(store: &TaskStore, section: Section, title: &str, icon: &'static str, now: NaiveDateTime) -> NavEntry {
        let count = store.count_in_section(&section, now);
        NavEntry {
            section,
            title: title.to_string(),
            kind: EntryKind::View,
            count,
            icon,
        }
    }
}
