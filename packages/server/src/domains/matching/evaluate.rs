//! Pure match evaluation between a provider's capabilities and a patient's needs
//!
//! These functions contain NO side effects - they implement the business logic
//! for deciding whether a provider can take on a waitlisted patient.
//!
//! The hard gates are diagnosis and insurance; modality and gender preference
//! only contribute explanatory reasons. Diagnosis comparison is
//! case-insensitive equality or substring containment in either direction
//! ("anxiety" matches the specialty "Anxiety Disorders" and vice versa).

use crate::domains::matching::models::MatchOutcome;
use crate::domains::patients::Patient;
use crate::domains::providers::Provider;

/// Wildcard some provider profiles carry instead of listing every carrier.
pub const INSURANCE_WILDCARD: &str = "most major insurance";

/// Evaluate whether a provider can serve a patient, and why.
///
/// Pure and deterministic: `matches` is true exactly when both the diagnosis
/// gate and the insurance gate pass.
pub fn evaluate_match(provider: &Provider, patient: &Patient) -> MatchOutcome {
    let mut reasons = Vec::new();

    let specialty_hit = matched_specialty(provider, patient);
    if let Some((diagnosis, specialty)) = &specialty_hit {
        reasons.push(format!("Treats {} (specialty: {})", diagnosis, specialty));
    }

    let insurance_ok = insurance_matches(provider, patient);
    if insurance_ok {
        match patient.insurance.as_deref() {
            Some(insurance) if !accepts_wildcard(provider) => {
                reasons.push(format!("Accepts {}", insurance));
            }
            _ => reasons.push("Accepts most major insurance".to_string()),
        }
    }

    // Soft signals: recorded as reasons, never gate the match
    if let Some(modality) = patient.preferred_modality {
        if provider.supports(modality) {
            reasons.push(format!("Offers {} sessions", modality));
        } else {
            reasons.push(format!("Does not offer {} sessions", modality));
        }
    }

    if let (Some(preferred), Some(gender)) =
        (patient.preferred_gender.as_deref(), provider.gender.as_deref())
    {
        if preferred.eq_ignore_ascii_case(gender) {
            reasons.push("Matches gender preference".to_string());
        }
    }

    MatchOutcome {
        matches: specialty_hit.is_some() && insurance_ok,
        reasons,
    }
}

/// First (diagnosis, specialty) pair that matches, if any.
fn matched_specialty(provider: &Provider, patient: &Patient) -> Option<(String, String)> {
    for diagnosis in patient.diagnoses() {
        for specialty in &provider.specialties {
            if specialty_covers(specialty, diagnosis) {
                return Some((diagnosis.to_string(), specialty.clone()));
            }
        }
    }
    None
}

fn specialty_covers(specialty: &str, diagnosis: &str) -> bool {
    let specialty = specialty.trim().to_lowercase();
    let diagnosis = diagnosis.trim().to_lowercase();
    if specialty.is_empty() || diagnosis.is_empty() {
        return false;
    }
    specialty == diagnosis || specialty.contains(&diagnosis) || diagnosis.contains(&specialty)
}

fn insurance_matches(provider: &Provider, patient: &Patient) -> bool {
    if accepts_wildcard(provider) {
        return true;
    }
    match patient.insurance.as_deref() {
        Some(insurance) => provider
            .insurance_accepted
            .iter()
            .any(|accepted| accepted.trim().eq_ignore_ascii_case(insurance.trim())),
        None => false,
    }
}

fn accepts_wildcard(provider: &Provider) -> bool {
    provider
        .insurance_accepted
        .iter()
        .any(|accepted| accepted.trim().eq_ignore_ascii_case(INSURANCE_WILDCARD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Modality, PatientId, ProviderId};
    use chrono::Utc;

    fn provider(specialties: &[&str], insurance: &[&str]) -> Provider {
        Provider {
            id: ProviderId::new(),
            name: "Dr. Rivera".to_string(),
            gender: Some("female".to_string()),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            insurance_accepted: insurance.iter().map(|s| s.to_string()).collect(),
            location: Some("Saint Paul, MN".to_string()),
            virtual_available: true,
            in_person_available: false,
            accepting_clients: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn patient(diagnosis: Option<&str>, insurance: Option<&str>) -> Patient {
        Patient {
            id: PatientId::new(),
            name: "Jordan".to_string(),
            phone: Some("555-0100".to_string()),
            diagnosis: diagnosis.map(|d| d.to_string()),
            all_diagnoses: Vec::new(),
            insurance: insurance.map(|i| i.to_string()),
            location: Some("Minneapolis, MN".to_string()),
            distance_miles: Some(4.0),
            preferred_modality: None,
            preferred_gender: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn diagnosis_and_insurance_match() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let patient = patient(Some("anxiety"), Some("healthpartners"));

        let outcome = evaluate_match(&provider, &patient);
        assert!(outcome.matches);
        assert!(outcome.reasons.iter().any(|r| r.contains("anxiety")));
        assert!(outcome.reasons.iter().any(|r| r.contains("healthpartners")));
    }

    #[test]
    fn insurance_mismatch_blocks_match() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let patient = patient(Some("anxiety"), Some("Blue Cross"));

        assert!(!evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn wildcard_insurance_matches_any_carrier() {
        let provider = provider(&["Depression"], &["Most Major Insurance"]);
        let patient = patient(Some("depression"), Some("Obscure Carrier"));

        assert!(evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn wildcard_insurance_matches_patient_without_carrier() {
        let provider = provider(&["Depression"], &["most major insurance"]);
        let patient = patient(Some("depression"), None);

        assert!(evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn missing_insurance_without_wildcard_blocks_match() {
        let provider = provider(&["Depression"], &["HealthPartners"]);
        let patient = patient(Some("depression"), None);

        assert!(!evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn diagnosis_mismatch_blocks_match() {
        let provider = provider(&["Eating Disorders"], &["HealthPartners"]);
        let patient = patient(Some("anxiety"), Some("HealthPartners"));

        assert!(!evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn no_diagnosis_on_record_blocks_match() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let patient = patient(None, Some("HealthPartners"));

        assert!(!evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn diagnosis_list_form_is_accepted() {
        let provider = provider(&["Trauma and PTSD"], &["HealthPartners"]);
        let mut patient = patient(None, Some("HealthPartners"));
        patient.all_diagnoses = vec!["Insomnia".to_string(), "PTSD".to_string()];

        let outcome = evaluate_match(&provider, &patient);
        assert!(outcome.matches);
        assert!(outcome.reasons.iter().any(|r| r.contains("PTSD")));
    }

    #[test]
    fn containment_works_in_both_directions() {
        // diagnosis contains specialty
        {
            let provider = provider(&["anxiety"], &["HealthPartners"]);
            let patient = patient(Some("Generalized Anxiety Disorder"), Some("HealthPartners"));
            assert!(evaluate_match(&provider, &patient).matches);
        }

        // specialty contains diagnosis
        {
            let provider = provider(&["Generalized Anxiety Disorder"], &["HealthPartners"]);
            let patient = patient(Some("anxiety"), Some("HealthPartners"));
            assert!(evaluate_match(&provider, &patient).matches);
        }
    }

    #[test]
    fn unsupported_modality_is_a_reason_not_a_gate() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let mut patient = patient(Some("anxiety"), Some("HealthPartners"));
        patient.preferred_modality = Some(Modality::InPerson);

        let outcome = evaluate_match(&provider, &patient);
        assert!(outcome.matches);
        assert!(outcome
            .reasons
            .iter()
            .any(|r| r.contains("Does not offer in-person")));
    }

    #[test]
    fn supported_modality_adds_reason() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let mut patient = patient(Some("anxiety"), Some("HealthPartners"));
        patient.preferred_modality = Some(Modality::Virtual);

        let outcome = evaluate_match(&provider, &patient);
        assert!(outcome
            .reasons
            .iter()
            .any(|r| r.contains("Offers virtual sessions")));
    }

    #[test]
    fn gender_preference_adds_reason_when_met() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let mut patient = patient(Some("anxiety"), Some("HealthPartners"));
        patient.preferred_gender = Some("Female".to_string());

        let outcome = evaluate_match(&provider, &patient);
        assert!(outcome
            .reasons
            .iter()
            .any(|r| r.contains("gender preference")));
    }

    #[test]
    fn gender_preference_never_gates() {
        let provider = provider(&["Anxiety Disorders"], &["HealthPartners"]);
        let mut patient = patient(Some("anxiety"), Some("HealthPartners"));
        patient.preferred_gender = Some("male".to_string());

        assert!(evaluate_match(&provider, &patient).matches);
    }

    #[test]
    fn empty_specialty_strings_never_match() {
        let provider = provider(&[""], &["HealthPartners"]);
        let patient = patient(Some("anxiety"), Some("HealthPartners"));

        assert!(!evaluate_match(&provider, &patient).matches);
    }
}
