use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Modality, ProviderId};

/// Provider model - the capability profile matched against patient needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,

    // Profile
    pub name: String,
    pub gender: Option<String>,

    // Capabilities
    pub specialties: Vec<String>,
    pub insurance_accepted: Vec<String>,

    // Location (free-text locality, no geocoding guarantee)
    pub location: Option<String>,

    // Service modes
    pub virtual_available: bool,
    pub in_person_available: bool,

    // Availability
    pub accepting_clients: bool,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Provider {
    /// A bookable provider offers at least one session modality.
    ///
    /// The records store does not enforce this, so loaders log a warning
    /// instead of rejecting the record.
    pub fn is_bookable(&self) -> bool {
        self.virtual_available || self.in_person_available
    }

    pub fn supports(&self, modality: Modality) -> bool {
        match modality {
            Modality::Virtual => self.virtual_available,
            Modality::InPerson => self.in_person_available,
        }
    }
}
