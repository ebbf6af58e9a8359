use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::common::{PatientId, ProviderId};
use crate::domains::matching::{evaluate_match, MatchOutcome};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct EvaluateMatchRequest {
    pub provider_id: ProviderId,
    pub patient_id: PatientId,
}

/// Evaluate provider/patient fit.
pub async fn evaluate_match_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<EvaluateMatchRequest>,
) -> Result<Json<MatchOutcome>, ApiError> {
    let provider = state
        .deps
        .records
        .find_provider(request.provider_id)
        .await?
        .ok_or(ApiError::NotFound("provider"))?;

    let patient = state
        .deps
        .records
        .find_patient(request.patient_id)
        .await?
        .ok_or(ApiError::NotFound("patient"))?;

    Ok(Json(evaluate_match(&provider, &patient)))
}
