//! REST client for the hosted records store.
//!
//! Patient, provider, waitlist, and calendar data live in an external
//! REST-over-HTTP store authenticated with an API key header. This client
//! consumes already-shaped JSON collections; it owns no persistence.
//!
//! Configuration is injected at construction time - nothing in here reads
//! the process environment.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::common::{PatientId, ProviderId};
use crate::domains::patients::Patient;
use crate::domains::providers::Provider;
use crate::domains::schedules::AppointmentSlot;
use crate::domains::waitlist::WaitlistEntry;
use crate::kernel::traits::BaseRecordsStore;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Connection settings for the records store.
#[derive(Debug, Clone)]
pub struct RecordsConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Records store client
pub struct RecordsClient {
    config: RecordsConfig,
    client: reqwest::Client,
}

impl RecordsClient {
    /// Create a new records client
    pub fn new(config: RecordsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET a JSON resource. Returns `Ok(None)` on 404 so callers can decide
    /// whether a missing record is an error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .with_context(|| format!("Failed to reach records store at /{}", path))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Records store error {} on /{}: {}", status, path, body);
        }

        let value = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse records store response from /{}", path))?;
        Ok(Some(value))
    }
}

#[async_trait]
impl BaseRecordsStore for RecordsClient {
    async fn ping(&self) -> Result<()> {
        let response = self
            .client
            .get(self.url("health"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .context("Failed to reach records store")?;

        if !response.status().is_success() {
            anyhow::bail!("Records store unhealthy: {}", response.status());
        }
        Ok(())
    }

    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>> {
        Ok(self
            .get_json::<Vec<WaitlistEntry>>("waitlist")
            .await?
            .unwrap_or_default())
    }

    async fn find_provider(&self, id: ProviderId) -> Result<Option<Provider>> {
        let provider = self
            .get_json::<Provider>(&format!("providers/{}", id))
            .await?;

        if let Some(provider) = &provider {
            if !provider.is_bookable() {
                tracing::warn!(
                    provider_id = %provider.id,
                    "provider offers no session modality and is not bookable"
                );
            }
        }

        Ok(provider)
    }

    async fn find_patient(&self, id: PatientId) -> Result<Option<Patient>> {
        self.get_json::<Patient>(&format!("patients/{}", id)).await
    }

    async fn list_slots(&self, provider_id: ProviderId) -> Result<Vec<AppointmentSlot>> {
        Ok(self
            .get_json::<Vec<AppointmentSlot>>(&format!("providers/{}/slots", provider_id))
            .await?
            .unwrap_or_default())
    }
}
