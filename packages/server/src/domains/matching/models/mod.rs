use serde::Serialize;

/// Result of evaluating a provider against a patient.
///
/// `reasons` is human-readable and surfaced directly in care-team tooling,
/// so entries are full sentences rather than codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub matches: bool,
    pub reasons: Vec<String>,
}
