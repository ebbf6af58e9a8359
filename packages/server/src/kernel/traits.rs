// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "who matches this provider") lives in domain
// functions that consume these traits.
//
// Naming convention: Base* for trait names (e.g., BaseSmsService)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{PatientId, ProviderId};
use crate::domains::patients::Patient;
use crate::domains::providers::Provider;
use crate::domains::schedules::AppointmentSlot;
use crate::domains::waitlist::WaitlistEntry;

// =============================================================================
// SMS Gateway Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseSmsService: Send + Sync {
    /// Send one SMS message to a phone number
    async fn send_sms(&self, to: &str, body: &str) -> Result<()>;
}

// =============================================================================
// Records Store Trait (Infrastructure - hosted patient/provider/waitlist data)
// =============================================================================

#[async_trait]
pub trait BaseRecordsStore: Send + Sync {
    /// Cheap reachability check for health reporting
    async fn ping(&self) -> Result<()>;

    /// All waitlist entries, including excluded ones (filtering is domain logic)
    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>>;

    async fn find_provider(&self, id: ProviderId) -> Result<Option<Provider>>;

    async fn find_patient(&self, id: PatientId) -> Result<Option<Patient>>;

    /// All calendar slots for a provider, booked or not
    async fn list_slots(&self, provider_id: ProviderId) -> Result<Vec<AppointmentSlot>>;
}
