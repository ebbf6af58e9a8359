use serde::{Deserialize, Serialize};

use crate::common::PatientId;
use crate::domains::patients::Patient;

/// Delivery strategy for a notification run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One recipient at a time, in list order, with a delay between sends.
    Waterfall,
    /// All recipients at once.
    Blast,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Waterfall => write!(f, "waterfall"),
            Strategy::Blast => write!(f, "blast"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "waterfall" => Ok(Strategy::Waterfall),
            "blast" => Ok(Strategy::Blast),
            _ => Err(anyhow::anyhow!("Invalid dispatch strategy: {}", s)),
        }
    }
}

/// Dispatch lifecycle.
///
/// Transitions are one-directional: `idle -> sending -> sent | error`.
/// A retry is a fresh run that re-enters `sending`; terminal states never
/// transition in place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Idle,
    Sending,
    Sent,
    Error,
}

impl DispatchStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchStatus::Sent | DispatchStatus::Error)
    }
}

/// A patient targeted by a notification run.
#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    pub id: PatientId,
    pub name: String,
    pub phone: Option<String>,
}

impl Recipient {
    pub fn has_phone(&self) -> bool {
        self.phone
            .as_deref()
            .is_some_and(|phone| !phone.trim().is_empty())
    }
}

impl From<&Patient> for Recipient {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name.clone(),
            phone: patient.phone.clone(),
        }
    }
}

/// Running delivery counter. `sent <= total` always holds, and `sent` only
/// ever increases over the life of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DispatchProgress {
    pub sent: usize,
    pub total: usize,
}

/// A recipient the run could not deliver to, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedSend {
    pub name: String,
    pub error: String,
}

/// Point-in-time view of a dispatch run.
///
/// Snapshots are immutable reads; the dispatcher is the only writer. The
/// final snapshot doubles as the completion report.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub status: DispatchStatus,
    pub progress: DispatchProgress,
    pub failed: Vec<FailedSend>,
}

impl DispatchReport {
    pub fn pending(total: usize) -> Self {
        Self {
            status: DispatchStatus::Idle,
            progress: DispatchProgress { sent: 0, total },
            failed: Vec::new(),
        }
    }
}

/// Errors surfaced before any message is sent.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Every recipient needs a usable phone number; nothing is sent
    /// otherwise.
    #[error("recipients missing phone numbers: {}", .names.join(", "))]
    MissingPhoneNumbers { names: Vec<String> },
}
