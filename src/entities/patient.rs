use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only directory entry for a patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    /// Medical record number
    pub mrn: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    #[serde(default)]
    pub primary_conditions: Vec<String>,
}

impl Patient {
    /// First character of each word of the name, e.g. "EC" for "Emily Chen"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
