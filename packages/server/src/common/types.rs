// Shared domain vocabulary used by more than one domain

use serde::{Deserialize, Serialize};

/// Session modality a provider can offer and a patient can prefer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    Virtual,
    InPerson,
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modality::Virtual => write!(f, "virtual"),
            Modality::InPerson => write!(f, "in-person"),
        }
    }
}

impl std::str::FromStr for Modality {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "virtual" => Ok(Modality::Virtual),
            "in-person" | "in_person" => Ok(Modality::InPerson),
            _ => Err(anyhow::anyhow!("Invalid modality: {}", s)),
        }
    }
}
