//! Patient directory: search and detail selection over a static patient list.

use crate::entities::Patient;

#[derive(Debug, Clone, Default)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
    query: String,
    selected_id: Option<String>,
}

impl PatientDirectory {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients,
            query: String::new(),
            selected_id: None,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    /// Patients whose name or MRN contains the query, ignoring case
    pub fn filtered(&self) -> Vec<&Patient> {
        let needle = self.query.to_lowercase();
        self.patients
            .iter()
            .filter(|patient| {
                patient.name.to_lowercase().contains(&needle) || patient.mrn.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Switch to the detail view; unknown ids are ignored
    pub fn select(&mut self, id: &str) {
        if self.patients.iter().any(|p| p.id == id) {
            self.selected_id = Some(id.to_string());
        }
    }

    pub fn back(&mut self) {
        self.selected_id = None;
    }

    pub fn selected(&self) -> Option<&Patient> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.patients.iter().find(|p| p.id == id))
    }
}

/// "1 patient" / "3 patients"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 patient".to_string()
    } else {
        format!("{} patients", count)
    }
}
