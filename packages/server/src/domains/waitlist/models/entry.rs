use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ProviderId, WaitlistEntryId};
use crate::domains::patients::Patient;

/// Urgency tier for a waitlist entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Rank for ascending sorts: more urgent sorts first.
    pub fn sort_rank(&self) -> u8 {
        match self {
            Urgency::High => 0,
            Urgency::Medium => 1,
            Urgency::Low => 2,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            _ => Err(anyhow::anyhow!("Invalid urgency: {}", s)),
        }
    }
}

/// Waitlist entry - a patient waiting for an appointment.
///
/// Created when a patient joins a waitlist. `excluded` is a soft-delete flag
/// that suppresses the entry from querying and notification targeting;
/// entries are never hard-deleted here. `provider_id` links the entry to the
/// provider whose waitlist the patient is on; entries without one are in the
/// general pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: WaitlistEntryId,
    pub patient: Patient,
    /// Patient self-flagged as urgently wanting an appointment.
    pub hand_raised: bool,
    pub urgency: Urgency,
    /// Opaque ranking hint computed upstream. Surfaced to callers, never
    /// recomputed or used for ordering here.
    pub match_score: Option<f64>,
    pub position: i32,
    pub excluded: bool,
    pub provider_id: Option<ProviderId>,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistEntry {
    pub fn is_on_waitlist_of(&self, provider_id: ProviderId) -> bool {
        self.provider_id == Some(provider_id)
    }
}
