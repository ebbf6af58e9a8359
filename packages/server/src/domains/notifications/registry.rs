//! Registry of in-flight and completed dispatch runs.
//!
//! The HTTP layer looks runs up by id to report status and to relay
//! cancellation. Completed runs stay queryable until the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::dispatcher::DispatchHandle;
use super::models::dispatch::DispatchReport;
use crate::common::DispatchId;

#[derive(Clone, Default)]
pub struct DispatchRegistry {
    inner: Arc<RwLock<HashMap<DispatchId, DispatchHandle>>>,
}

impl DispatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, handle: DispatchHandle) -> DispatchId {
        let id = handle.id;
        self.inner.write().await.insert(id, handle);
        id
    }

    pub async fn report(&self, id: DispatchId) -> Option<DispatchReport> {
        self.inner
            .read()
            .await
            .get(&id)
            .map(|handle| handle.report())
    }

    /// Request cancellation and return the current snapshot, or `None` for
    /// an unknown id.
    pub async fn cancel(&self, id: DispatchId) -> Option<DispatchReport> {
        let guard = self.inner.read().await;
        let handle = guard.get(&id)?;
        handle.cancel();
        Some(handle.report())
    }

    /// Number of runs that have not reached a terminal status.
    pub async fn active_count(&self) -> usize {
        self.inner
            .read()
            .await
            .values()
            .filter(|handle| !handle.report().status.is_terminal())
            .count()
    }
}
