//! Slot availability filtering
//!
//! Pure selection over a provider's calendar: which slots can still be
//! offered to a waitlisted patient right now.

use chrono::{DateTime, Utc};

use crate::common::Modality;
use crate::domains::schedules::models::AppointmentSlot;

/// Open slots: unbooked, strictly in the future relative to `after`, and
/// compatible with the requested modality (if any). Ordered soonest-first.
pub fn open_slots(
    slots: &[AppointmentSlot],
    modality: Option<Modality>,
    after: DateTime<Utc>,
) -> Vec<AppointmentSlot> {
    let mut open: Vec<AppointmentSlot> = slots
        .iter()
        .filter(|slot| !slot.booked)
        .filter(|slot| slot.starts_at > after)
        .filter(|slot| modality.map_or(true, |wanted| slot.modality == wanted))
        .cloned()
        .collect();

    open.sort_by_key(|slot| slot.starts_at);
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ProviderId, SlotId};
    use chrono::Duration;

    fn slot(provider_id: ProviderId, offset_hours: i64, modality: Modality) -> AppointmentSlot {
        AppointmentSlot {
            id: SlotId::new(),
            provider_id,
            starts_at: Utc::now() + Duration::hours(offset_hours),
            duration_minutes: 50,
            modality,
            booked: false,
        }
    }

    #[test]
    fn booked_and_past_slots_are_dropped() {
        let provider_id = ProviderId::new();
        let mut booked = slot(provider_id, 24, Modality::Virtual);
        booked.booked = true;
        let past = slot(provider_id, -2, Modality::Virtual);
        let open = slot(provider_id, 24, Modality::Virtual);
        let open_id = open.id;

        let results = open_slots(&[booked, past, open], None, Utc::now());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, open_id);
    }

    #[test]
    fn modality_filter_applies_when_requested() {
        let provider_id = ProviderId::new();
        let virtual_slot = slot(provider_id, 24, Modality::Virtual);
        let in_person = slot(provider_id, 48, Modality::InPerson);

        let results = open_slots(
            &[virtual_slot, in_person],
            Some(Modality::InPerson),
            Utc::now(),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].modality, Modality::InPerson);
    }

    #[test]
    fn results_are_ordered_soonest_first() {
        let provider_id = ProviderId::new();
        let later = slot(provider_id, 72, Modality::Virtual);
        let sooner = slot(provider_id, 24, Modality::Virtual);

        let results = open_slots(&[later, sooner], None, Utc::now());
        let offsets: Vec<_> = results.iter().map(|s| s.starts_at).collect();
        assert!(offsets[0] < offsets[1]);
    }
}
