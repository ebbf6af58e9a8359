//! Waitlist query pipeline
//!
//! Pure filtering and ordering over waitlist entries. The filter stages run
//! in a fixed order so results are reproducible:
//!
//! ```text
//! excluded -> search term -> hand raised -> distance -> diagnosis
//!          -> insurance -> provider association
//! ```
//!
//! Ordering: with no provider selected, input order is preserved. With a
//! provider selected, entries already on that provider's waitlist come
//! first, then provider-matched entries from the general pool; within each
//! group more urgent entries sort first and input order breaks ties.

use crate::domains::matching::evaluate_match;
use crate::domains::providers::Provider;
use crate::domains::waitlist::models::WaitlistEntry;
use serde::Deserialize;

/// Filter criteria collected from the care-team UI.
///
/// All fields are optional; an empty filter set passes every non-excluded
/// entry through.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WaitlistFilters {
    /// Case-insensitive substring match on the patient name.
    pub search_term: Option<String>,
    /// When true, keep only hand-raised entries.
    pub hand_raised: bool,
    /// Exact (case-insensitive) diagnosis filter.
    pub diagnosis: Option<String>,
    /// Exact (case-insensitive) insurance filter.
    pub insurance: Option<String>,
    /// Entries with a known distance beyond this are dropped; entries with
    /// no recorded distance always pass.
    pub max_distance: Option<f64>,
}

/// Filter and order waitlist entries.
///
/// Returns a new list; the input is never mutated. Missing optional fields
/// never cause an error - an entry simply passes or fails the stage.
pub fn query_waitlist(
    entries: &[WaitlistEntry],
    filters: &WaitlistFilters,
    selected_provider: Option<&Provider>,
) -> Vec<WaitlistEntry> {
    let search_term = filters
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    let mut results: Vec<WaitlistEntry> = entries
        .iter()
        .filter(|entry| !entry.excluded)
        .filter(|entry| match &search_term {
            Some(term) => entry.patient.name.to_lowercase().contains(term),
            None => true,
        })
        .filter(|entry| !filters.hand_raised || entry.hand_raised)
        .filter(|entry| within_distance(entry, filters.max_distance))
        .filter(|entry| matches_exact(filters.diagnosis.as_deref(), &entry.patient.diagnoses()))
        .filter(|entry| {
            matches_exact(
                filters.insurance.as_deref(),
                &entry
                    .patient
                    .insurance
                    .as_deref()
                    .map(|i| vec![i])
                    .unwrap_or_default(),
            )
        })
        .filter(|entry| match selected_provider {
            Some(provider) => {
                entry.is_on_waitlist_of(provider.id)
                    || evaluate_match(provider, &entry.patient).matches
            }
            None => true,
        })
        .cloned()
        .collect();

    if let Some(provider) = selected_provider {
        // Stable sort: input order survives as the final tiebreak
        results.sort_by_key(|entry| {
            let own_list = if entry.is_on_waitlist_of(provider.id) {
                0u8
            } else {
                1
            };
            (own_list, entry.urgency.sort_rank())
        });
    }

    results
}

fn within_distance(entry: &WaitlistEntry, max_distance: Option<f64>) -> bool {
    match (entry.patient.distance_miles, max_distance) {
        (Some(distance), Some(max)) => distance <= max,
        _ => true,
    }
}

/// No filter passes everything; otherwise any candidate must equal the
/// filter, case-insensitively.
fn matches_exact(filter: Option<&str>, candidates: &[&str]) -> bool {
    match filter {
        Some(wanted) => candidates
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(wanted.trim())),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PatientId, ProviderId, WaitlistEntryId};
    use crate::domains::patients::Patient;
    use crate::domains::waitlist::models::Urgency;
    use chrono::Utc;

    fn entry(name: &str) -> WaitlistEntry {
        WaitlistEntry {
            id: WaitlistEntryId::new(),
            patient: Patient {
                id: PatientId::new(),
                name: name.to_string(),
                phone: Some("555-0100".to_string()),
                diagnosis: Some("anxiety".to_string()),
                all_diagnoses: Vec::new(),
                insurance: Some("HealthPartners".to_string()),
                location: None,
                distance_miles: None,
                preferred_modality: None,
                preferred_gender: None,
                created_at: Utc::now(),
            },
            hand_raised: false,
            urgency: Urgency::Medium,
            match_score: None,
            position: 0,
            excluded: false,
            provider_id: None,
            joined_at: Utc::now(),
        }
    }

    fn provider() -> Provider {
        Provider {
            id: ProviderId::new(),
            name: "Dr. Chen".to_string(),
            gender: None,
            specialties: vec!["Anxiety Disorders".to_string()],
            insurance_accepted: vec!["HealthPartners".to_string()],
            location: None,
            virtual_available: true,
            in_person_available: true,
            accepting_clients: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn excluded_entries_never_surface() {
        let mut excluded = entry("Ann");
        excluded.excluded = true;
        let entries = vec![excluded, entry("Bo")];

        let results = query_waitlist(&entries, &WaitlistFilters::default(), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].patient.name, "Bo");
    }

    #[test]
    fn search_term_is_case_insensitive_substring() {
        let entries = vec![entry("Annika"), entry("Bo")];
        let filters = WaitlistFilters {
            search_term: Some("ANN".to_string()),
            ..Default::default()
        };

        let results = query_waitlist(&entries, &filters, None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].patient.name, "Annika");
    }

    #[test]
    fn blank_search_term_is_ignored() {
        let entries = vec![entry("Ann"), entry("Bo")];
        let filters = WaitlistFilters {
            search_term: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(query_waitlist(&entries, &filters, None).len(), 2);
    }

    #[test]
    fn hand_raised_filter_preserves_input_order() {
        let mut a = entry("Ann");
        a.hand_raised = true;
        let b = entry("Bo");
        let mut c = entry("Cam");
        c.hand_raised = true;
        let d = entry("Dee");
        let entries = vec![a, b, c, d];

        let filters = WaitlistFilters {
            hand_raised: true,
            ..Default::default()
        };
        let results = query_waitlist(&entries, &filters, None);

        let names: Vec<_> = results.iter().map(|e| e.patient.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cam"]);
    }

    #[test]
    fn distance_cutoff_drops_far_entries_only() {
        let mut near = entry("Near");
        near.patient.distance_miles = Some(8.0);
        let mut far = entry("Far");
        far.patient.distance_miles = Some(10.5);
        let unknown = entry("Unknown");

        let filters = WaitlistFilters {
            max_distance: Some(10.0),
            ..Default::default()
        };
        let results = query_waitlist(&[near, far, unknown], &filters, None);

        let names: Vec<_> = results.iter().map(|e| e.patient.name.as_str()).collect();
        assert_eq!(names, vec!["Near", "Unknown"]);
    }

    #[test]
    fn diagnosis_filter_is_exact_case_insensitive() {
        let mut ptsd = entry("Pat");
        ptsd.patient.diagnosis = Some("PTSD".to_string());
        let anxious = entry("Ann");

        let filters = WaitlistFilters {
            diagnosis: Some("ptsd".to_string()),
            ..Default::default()
        };
        let results = query_waitlist(&[ptsd, anxious], &filters, None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].patient.name, "Pat");
    }

    #[test]
    fn insurance_filter_is_exact_case_insensitive() {
        let mut other = entry("Other");
        other.patient.insurance = Some("Blue Cross".to_string());
        let hp = entry("Ann");

        let filters = WaitlistFilters {
            insurance: Some("healthpartners".to_string()),
            ..Default::default()
        };
        let results = query_waitlist(&[other, hp], &filters, None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].patient.name, "Ann");
    }

    #[test]
    fn provider_keeps_own_waitlist_and_matches() {
        let provider = provider();

        let mut own = entry("OnList");
        own.provider_id = Some(provider.id);
        // On the provider's list despite not matching their specialties
        own.patient.diagnosis = Some("insomnia".to_string());

        let matched = entry("Matched");

        let mut unmatched = entry("Unmatched");
        unmatched.patient.diagnosis = Some("insomnia".to_string());

        let results = query_waitlist(
            &[unmatched, matched, own],
            &WaitlistFilters::default(),
            Some(&provider),
        );

        let names: Vec<_> = results.iter().map(|e| e.patient.name.as_str()).collect();
        assert_eq!(names, vec!["OnList", "Matched"]);
    }

    #[test]
    fn provider_sort_puts_own_list_first_then_urgency() {
        let provider = provider();

        let mut pool_low = entry("PoolLow");
        pool_low.urgency = Urgency::Low;
        let mut pool_high = entry("PoolHigh");
        pool_high.urgency = Urgency::High;
        let mut own_medium = entry("OwnMedium");
        own_medium.provider_id = Some(provider.id);
        own_medium.urgency = Urgency::Medium;
        let mut own_high = entry("OwnHigh");
        own_high.provider_id = Some(provider.id);
        own_high.urgency = Urgency::High;

        let results = query_waitlist(
            &[pool_low, own_medium, pool_high, own_high],
            &WaitlistFilters::default(),
            Some(&provider),
        );

        let names: Vec<_> = results.iter().map(|e| e.patient.name.as_str()).collect();
        assert_eq!(names, vec!["OwnHigh", "OwnMedium", "PoolHigh", "PoolLow"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let results = query_waitlist(&[], &WaitlistFilters::default(), None);
        assert!(results.is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let entries = vec![entry("Ann"), entry("Bo")];
        let before: Vec<_> = entries.iter().map(|e| e.id).collect();

        let _ = query_waitlist(&entries, &WaitlistFilters::default(), None);

        let after: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(before, after);
    }
}
