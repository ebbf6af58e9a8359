use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::common::{Modality, ProviderId};
use crate::domains::schedules::{open_slots, AppointmentSlot};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub modality: Option<Modality>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub total: usize,
    pub slots: Vec<AppointmentSlot>,
}

/// Open slots on a provider's calendar, soonest first.
pub async fn provider_slots_handler(
    Extension(state): Extension<AppState>,
    Path(provider_id): Path<ProviderId>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    state
        .deps
        .records
        .find_provider(provider_id)
        .await?
        .ok_or(ApiError::NotFound("provider"))?;

    let slots = state.deps.records.list_slots(provider_id).await?;
    let open = open_slots(&slots, query.modality, Utc::now());

    Ok(Json(SlotsResponse {
        total: open.len(),
        slots: open,
    }))
}
