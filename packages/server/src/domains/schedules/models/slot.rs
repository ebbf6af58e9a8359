use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Modality, ProviderId, SlotId};

/// A bookable appointment slot on a provider's calendar.
///
/// `booked` flips when a waitlisted patient accepts the slot; slots stay on
/// the calendar either way so the records store keeps history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub id: SlotId,
    pub provider_id: ProviderId,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub modality: Modality,
    pub booked: bool,
}
