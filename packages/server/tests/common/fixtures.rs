// Builders for domain fixtures shared across integration tests.

use chrono::Utc;
use server_core::common::{PatientId, ProviderId, WaitlistEntryId};
use server_core::domains::notifications::Recipient;
use server_core::domains::patients::Patient;
use server_core::domains::providers::Provider;
use server_core::domains::waitlist::{Urgency, WaitlistEntry};

pub fn patient(name: &str, phone: Option<&str>) -> Patient {
    Patient {
        id: PatientId::new(),
        name: name.to_string(),
        phone: phone.map(|p| p.to_string()),
        diagnosis: Some("anxiety".to_string()),
        all_diagnoses: Vec::new(),
        insurance: Some("HealthPartners".to_string()),
        location: Some("Minneapolis, MN".to_string()),
        distance_miles: None,
        preferred_modality: None,
        preferred_gender: None,
        created_at: Utc::now(),
    }
}

pub fn provider(name: &str, specialties: &[&str], insurance: &[&str]) -> Provider {
    Provider {
        id: ProviderId::new(),
        name: name.to_string(),
        gender: None,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        insurance_accepted: insurance.iter().map(|s| s.to_string()).collect(),
        location: Some("Saint Paul, MN".to_string()),
        virtual_available: true,
        in_person_available: true,
        accepting_clients: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn waitlist_entry(name: &str) -> WaitlistEntry {
    WaitlistEntry {
        id: WaitlistEntryId::new(),
        patient: patient(name, Some("555-0100")),
        hand_raised: false,
        urgency: Urgency::Medium,
        match_score: None,
        position: 0,
        excluded: false,
        provider_id: None,
        joined_at: Utc::now(),
    }
}

pub fn recipient(name: &str, phone: Option<&str>) -> Recipient {
    Recipient::from(&patient(name, phone))
}
