use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task grouping, one per patient.
///
/// Task counts are not stored here; ask the task store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Hex colour such as `#EF4444`
    pub color: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Directory patient this grouping belongs to, if any
    #[serde(default)]
    pub patient_id: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            created_at: Utc::now(),
            patient_id: None,
        }
    }

    #[must_use]
    pub fn for_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }
}
