use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Modality, PatientId};

/// Patient model - the need profile consumed by matching and outreach.
///
/// Read-only input to the matcher; nothing in this crate mutates a patient
/// record. Diagnosis data arrives in two shapes from the records store: a
/// legacy single `diagnosis` string, or the newer `all_diagnoses` list.
/// Consumers should go through [`Patient::diagnoses`] which merges both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub phone: Option<String>,
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub all_diagnoses: Vec<String>,
    pub insurance: Option<String>,
    pub location: Option<String>,
    pub distance_miles: Option<f64>,
    pub preferred_modality: Option<Modality>,
    pub preferred_gender: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// All diagnoses on record, merging the legacy single field with the
    /// list form. Case-insensitive duplicates collapse to the first spelling.
    pub fn diagnoses(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        if let Some(single) = self.diagnosis.as_deref() {
            out.push(single);
        }
        for diagnosis in &self.all_diagnoses {
            if !out.iter().any(|seen| seen.eq_ignore_ascii_case(diagnosis)) {
                out.push(diagnosis);
            }
        }
        out
    }

    /// Whether this patient can receive SMS outreach.
    pub fn has_phone(&self) -> bool {
        self.phone
            .as_deref()
            .is_some_and(|phone| !phone.trim().is_empty())
    }
}
