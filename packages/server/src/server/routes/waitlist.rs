use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::ProviderId;
use crate::domains::waitlist::{query_waitlist, WaitlistEntry, WaitlistFilters};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct WaitlistQueryRequest {
    #[serde(default)]
    pub filters: WaitlistFilters,
    pub provider_id: Option<ProviderId>,
}

#[derive(Serialize)]
pub struct WaitlistQueryResponse {
    pub total: usize,
    pub entries: Vec<WaitlistEntry>,
}

/// Filter and order the waitlist, optionally against a selected provider.
pub async fn query_waitlist_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<WaitlistQueryRequest>,
) -> Result<Json<WaitlistQueryResponse>, ApiError> {
    let entries = state.deps.records.list_waitlist().await?;

    let provider = match request.provider_id {
        Some(id) => Some(
            state
                .deps
                .records
                .find_provider(id)
                .await?
                .ok_or(ApiError::NotFound("provider"))?,
        ),
        None => None,
    };

    let results = query_waitlist(&entries, &request.filters, provider.as_ref());

    Ok(Json(WaitlistQueryResponse {
        total: results.len(),
        entries: results,
    }))
}
