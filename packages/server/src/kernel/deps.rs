//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to routes
//! and background work. All external services sit behind trait abstractions
//! so tests can inject fakes.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use twilio::TwilioService;

use crate::kernel::{BaseRecordsStore, BaseSmsService};

// =============================================================================
// TwilioService Adapter (implements BaseSmsService trait)
// =============================================================================

/// Wrapper around TwilioService that implements the BaseSmsService trait
pub struct TwilioAdapter(pub Arc<TwilioService>);

impl TwilioAdapter {
    pub fn new(service: Arc<TwilioService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseSmsService for TwilioAdapter {
    async fn send_sms(&self, to: &str, body: &str) -> Result<()> {
        self.0
            .send_message(to, body)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to routes and dispatch runs
#[derive(Clone)]
pub struct ServerDeps {
    pub records: Arc<dyn BaseRecordsStore>,
    pub sms: Arc<dyn BaseSmsService>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(records: Arc<dyn BaseRecordsStore>, sms: Arc<dyn BaseSmsService>) -> Self {
        Self { records, sms }
    }
}
