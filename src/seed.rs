//! Seed data for a session.
//!
//! The built-in set is a small clinical caseload whose due dates are
//! relative to "today". A JSON fixture with the same shape can replace it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::directory::PatientDirectory;
use crate::entities::{Label, Patient, Priority, Project, Subtask, Task};
use crate::session::TodoSession;
use crate::store::{StoreError, TaskStore};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Initial task, project, label and patient collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub labels: Vec<Label>,
    pub patients: Vec<Patient>,
}

impl SeedData {
    /// Load a JSON fixture
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data: SeedData = serde_json::from_str(&content).map_err(|source| SeedError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        data.validate()?;
        log::info!(
            "Seed: loaded fixture {} ({} tasks, {} projects, {} labels, {} patients)",
            path.display(),
            data.tasks.len(),
            data.projects.len(),
            data.labels.len(),
            data.patients.len()
        );
        Ok(data)
    }

    /// Every collection must have unique ids
    pub fn validate(&self) -> Result<(), SeedError> {
        check_unique("task", self.tasks.iter().map(|t| t.id.as_str()))?;
        check_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        check_unique("label", self.labels.iter().map(|l| l.id.as_str()))?;
        check_unique("patient", self.patients.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }

    /// Split into the to-do session and the patient directory
    pub fn into_session(self, upcoming_window: Duration) -> Result<(TodoSession, PatientDirectory), SeedError> {
        let store = TaskStore::new(self.tasks)?.with_upcoming_window(upcoming_window);
        let session = TodoSession::new(store, self.projects, self.labels);
        let directory = PatientDirectory::new(self.patients);
        Ok((session, directory))
    }

    /// The built-in caseload, with due dates offset from `today`
    pub fn builtin(today: NaiveDate) -> Self {
        let created_at = Utc::now();
        Self {
            tasks: builtin_tasks(today, created_at),
            projects: builtin_projects(created_at),
            labels: builtin_labels(),
            patients: builtin_patients(),
        }
    }
}

fn check_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn subtasks(items: &[(&str, &str)]) -> Vec<Subtask> {
    items.iter().map(|(id, title)| Subtask::new(*id, *title)).collect()
}

fn builtin_tasks(today: NaiveDate, created_at: DateTime<Utc>) -> Vec<Task> {
    let in_days = |days: i64| today + Duration::days(days);
    let fixed = NaiveDate::from_ymd_opt(2025, 10, 25).unwrap_or(today);

    let tasks = vec![
        // John Michael Doe
        Task::new("1", "Review renal function and repeat labs")
            .with_priority(Priority::High)
            .with_project("john-doe")
            .with_due_date(in_days(14))
            .with_labels(["labs", "monitoring"])
            .with_notes(
                "Review John Michael Doe's latest renal function (eGFR 68) and repeat labs in 2 weeks to \
                 monitor for medication-related kidney impact after starting Metoprolol and Clopidogrel.",
            )
            .with_subtasks(subtasks(&[
                ("s1", "Review current eGFR 68"),
                ("s2", "Order repeat BMP and renal function"),
                ("s3", "Assess medication dosing"),
            ])),
        Task::new("2", "Confirm cardiology follow-up appointment")
            .with_priority(Priority::High)
            .with_project("john-doe")
            .with_due_date(fixed)
            .with_labels(["follow-up", "cardiology"])
            .with_notes(
                "Confirm John Michael Doe's cardiology follow-up appointment scheduled for 2025-11-01 and \
                 ensure cardiac rehab referral is active.",
            )
            .with_subtasks(subtasks(&[
                ("s4", "Verify appointment on 2025-11-01"),
                ("s5", "Check cardiac rehab referral status"),
            ])),
        Task::new("3", "Review BP and symptom diary")
            .with_project("john-doe")
            .with_due_date(in_days(7))
            .with_labels(["monitoring", "cardiology"])
            .with_notes(
                "Review John Michael Doe's blood pressure and symptom diary for any new chest discomfort, \
                 fatigue, or weight gain suggestive of heart-failure progression.",
            )
            .with_subtasks(subtasks(&[
                ("s6", "Review home BP readings"),
                ("s7", "Assess for chest discomfort or fatigue"),
                ("s8", "Check for weight gain trends"),
            ])),
        // Robert Johnson
        Task::new("4", "Order annual diabetes monitoring labs")
            .with_priority(Priority::High)
            .with_project("robert-johnson")
            .with_due_date(in_days(7))
            .with_labels(["labs", "diabetes"])
            .with_notes(
                "Order updated HbA1c, lipid panel, and urine microalbumin for Robert Johnson as part of \
                 annual diabetes monitoring (last labs >1 year ago).",
            )
            .with_subtasks(subtasks(&[
                ("s9", "Order HbA1c"),
                ("s10", "Order lipid panel"),
                ("s11", "Order urine microalbumin"),
            ])),
        Task::new("5", "Schedule diabetic retinal and foot exams")
            .with_project("robert-johnson")
            .with_due_date(in_days(30))
            .with_labels(["screening", "diabetes"])
            .with_notes(
                "Verify Robert Johnson has completed annual diabetic retinal and foot exams or schedule them \
                 within the next month.",
            )
            .with_subtasks(subtasks(&[
                ("s12", "Check retinal exam completion"),
                ("s13", "Check foot exam completion"),
                ("s14", "Schedule any missing exams"),
            ])),
        Task::new("6", "Review home BP readings and adjust meds")
            .with_project("robert-johnson")
            .with_due_date(in_days(10))
            .with_labels(["monitoring", "hypertension"])
            .with_notes(
                "Review Robert Johnson's home blood pressure readings and adjust antihypertensive regimen if \
                 average >130/80 mmHg.",
            )
            .with_subtasks(subtasks(&[
                ("s15", "Review BP log"),
                ("s16", "Calculate average BP"),
                ("s17", "Adjust medications if needed"),
            ])),
        // Emily Chen
        Task::new("7", "Reassess peak flow after steroid taper")
            .with_priority(Priority::High)
            .with_project("emily-chen")
            .with_due_date(in_days(5))
            .with_labels(["monitoring", "asthma"])
            .with_notes(
                "Reassess Emily Chen's peak flow measurement after steroid taper (previous 380 L/min, goal \
                 >=450) to evaluate asthma control.",
            )
            .with_subtasks(subtasks(&[
                ("s18", "Measure peak flow"),
                ("s19", "Compare to goal of >=450 L/min"),
                ("s20", "Adjust treatment if suboptimal"),
            ])),
        Task::new("8", "Evaluate allergy management plan")
            .with_project("emily-chen")
            .with_due_date(in_days(14))
            .with_labels(["review", "allergy"])
            .with_notes(
                "Evaluate Emily Chen's allergy management plan. Consider adding montelukast or antihistamine \
                 for elevated IgE (250 IU/mL) and seasonal triggers.",
            )
            .with_subtasks(subtasks(&[
                ("s21", "Review IgE levels (250 IU/mL)"),
                ("s22", "Assess seasonal trigger patterns"),
                ("s23", "Consider montelukast or antihistamine"),
            ])),
    ];

    tasks
        .into_iter()
        .map(|mut task| {
            task.created_at = created_at;
            task
        })
        .collect()
}

fn builtin_projects(created_at: DateTime<Utc>) -> Vec<Project> {
    [
        ("john-doe", "John Michael Doe", "#EF4444", "p3"),
        ("robert-johnson", "Robert Johnson", "#F59E0B", "p1"),
        ("emily-chen", "Emily Chen", "#8B5CF6", "p2"),
    ]
    .into_iter()
    .map(|(id, name, color, patient_id)| {
        let mut project = Project::new(id, name, color).for_patient(patient_id);
        project.created_at = created_at;
        project
    })
    .collect()
}

fn builtin_labels() -> Vec<Label> {
    [
        ("labs", "Labs", "#06B6D4"),
        ("monitoring", "Monitoring", "#3B82F6"),
        ("follow-up", "Follow-up", "#10B981"),
        ("cardiology", "Cardiology", "#EF4444"),
        ("diabetes", "Diabetes", "#F59E0B"),
        ("screening", "Screening", "#8B5CF6"),
        ("hypertension", "Hypertension", "#EC4899"),
        ("asthma", "Asthma", "#14B8A6"),
        ("allergy", "Allergy", "#A855F7"),
        ("review", "Review", "#6366F1"),
    ]
    .into_iter()
    .map(|(id, name, color)| Label::new(id, name, color))
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    dob: (i32, u32, u32),
    mrn: &str,
    insurance_provider: &str,
    insurance_policy_number: &str,
    conditions: &[&str],
) -> Option<Patient> {
    Some(Patient {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2)?,
        mrn: mrn.to_string(),
        insurance_provider: insurance_provider.to_string(),
        insurance_policy_number: insurance_policy_number.to_string(),
        primary_conditions: conditions.iter().map(|c| c.to_string()).collect(),
    })
}

fn builtin_patients() -> Vec<Patient> {
    [
        patient(
            "p1",
            "Robert Johnson",
            58,
            "Male",
            (1966, 3, 15),
            "MRN-001458",
            "Blue Cross Blue Shield",
            "BCBS-9876543210",
            &["Type 2 Diabetes", "Hypertension"],
        ),
        patient(
            "p3",
            "John Michael Doe",
            56,
            "Male",
            (1968, 3, 15),
            "MRN-2024-789456",
            "Blue Cross Blue Shield",
            "BCBS-789456-2024",
            &["Coronary Artery Disease", "Hyperlipidemia"],
        ),
        patient(
            "p2",
            "Emily Chen",
            42,
            "Female",
            (1982, 7, 22),
            "MRN-002341",
            "Aetna",
            "AET-5432109876",
            &["Asthma", "Seasonal Allergies"],
        ),
        patient(
            "p4",
            "Sarah Williams",
            35,
            "Female",
            (1989, 5, 12),
            "MRN-004521",
            "UnitedHealthcare",
            "UHC-8765432109",
            &["Hypothyroidism"],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
