// TestDependencies - fake implementations for testing
//
// Provides fake services that can be injected into ServerDeps and the
// Dispatcher for tests. No network access; everything is recorded in memory.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::common::{PatientId, ProviderId};
use crate::domains::patients::Patient;
use crate::domains::providers::Provider;
use crate::domains::schedules::AppointmentSlot;
use crate::domains::waitlist::WaitlistEntry;
use crate::kernel::{BaseRecordsStore, BaseSmsService};

// =============================================================================
// Recording SMS Service
// =============================================================================

/// One SMS attempt captured by [`RecordingSmsService`].
///
/// `at` is the tokio instant of the attempt, which makes waterfall timing
/// assertable under paused test time.
#[derive(Debug, Clone)]
pub struct SentSms {
    pub to: String,
    pub body: String,
    pub at: tokio::time::Instant,
}

/// SMS fake that records every attempt and can simulate gateway failures
/// for specific numbers.
#[derive(Default)]
pub struct RecordingSmsService {
    attempts: Arc<Mutex<Vec<SentSms>>>,
    failing_numbers: Arc<Mutex<HashSet<String>>>,
}

impl RecordingSmsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sends to this number fail with a gateway error.
    pub fn with_failure_for(self, number: &str) -> Self {
        self.failing_numbers
            .lock()
            .unwrap()
            .insert(number.to_string());
        self
    }

    /// All attempts, successful or not, in send order.
    pub fn attempts(&self) -> Vec<SentSms> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn was_sent_to(&self, number: &str) -> bool {
        self.attempts.lock().unwrap().iter().any(|s| s.to == number)
    }
}

#[async_trait]
impl BaseSmsService for RecordingSmsService {
    async fn send_sms(&self, to: &str, body: &str) -> Result<()> {
        self.attempts.lock().unwrap().push(SentSms {
            to: to.to_string(),
            body: body.to_string(),
            at: tokio::time::Instant::now(),
        });

        if self.failing_numbers.lock().unwrap().contains(to) {
            anyhow::bail!("gateway rejected message to {}", to);
        }
        Ok(())
    }
}

// =============================================================================
// In-memory Records Store
// =============================================================================

/// Records store fake backed by plain vectors.
#[derive(Default)]
pub struct InMemoryRecordsStore {
    waitlist: Vec<WaitlistEntry>,
    providers: Vec<Provider>,
    patients: Vec<Patient>,
    slots: Vec<AppointmentSlot>,
}

impl InMemoryRecordsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.waitlist = entries;
        self
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_patient(mut self, patient: Patient) -> Self {
        self.patients.push(patient);
        self
    }

    pub fn with_slots(mut self, slots: Vec<AppointmentSlot>) -> Self {
        self.slots.extend(slots);
        self
    }
}

#[async_trait]
impl BaseRecordsStore for InMemoryRecordsStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>> {
        Ok(self.waitlist.clone())
    }

    async fn find_provider(&self, id: ProviderId) -> Result<Option<Provider>> {
        Ok(self.providers.iter().find(|p| p.id == id).cloned())
    }

    async fn find_patient(&self, id: PatientId) -> Result<Option<Patient>> {
        Ok(self.patients.iter().find(|p| p.id == id).cloned())
    }

    async fn list_slots(&self, provider_id: ProviderId) -> Result<Vec<AppointmentSlot>> {
        Ok(self
            .slots
            .iter()
            .filter(|s| s.provider_id == provider_id)
            .cloned()
            .collect())
    }
}
