use std::time::Duration;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::{DispatchId, PatientId};
use crate::domains::notifications::{
    DispatchOptions, DispatchReport, DispatchStatus, Recipient, Strategy,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct DispatchRequest {
    pub patient_ids: Vec<PatientId>,
    /// Message template; `{name}` is substituted per recipient.
    pub template: String,
    pub strategy: Strategy,
    /// Overrides the configured waterfall interval for this run.
    pub interval_minutes: Option<u64>,
}

#[derive(Serialize)]
pub struct DispatchStartedResponse {
    pub id: DispatchId,
    pub status: DispatchStatus,
    pub total: usize,
}

#[derive(Serialize)]
pub struct DispatchReportResponse {
    pub id: DispatchId,
    #[serde(flatten)]
    pub report: DispatchReport,
}

/// Start a notification run for the given patients.
///
/// Recipients are resolved from the records store in request order, which
/// the waterfall strategy preserves. Validation failures (unknown patients,
/// missing phone numbers) reject the whole run before anything is sent.
pub async fn start_dispatch_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<DispatchRequest>,
) -> Result<(StatusCode, Json<DispatchStartedResponse>), ApiError> {
    if request.patient_ids.is_empty() {
        return Err(ApiError::Validation(
            "at least one recipient is required".to_string(),
        ));
    }

    let mut recipients = Vec::with_capacity(request.patient_ids.len());
    for patient_id in &request.patient_ids {
        let patient = state
            .deps
            .records
            .find_patient(*patient_id)
            .await?
            .ok_or(ApiError::NotFound("patient"))?;
        recipients.push(Recipient::from(&patient));
    }

    let options = DispatchOptions {
        interval: request
            .interval_minutes
            .map(|minutes| Duration::from_secs(minutes * 60)),
        on_progress: None,
    };

    let total = recipients.len();
    let handle =
        state
            .dispatcher
            .start(recipients, request.template, request.strategy, options)?;
    let id = state.dispatches.insert(handle).await;

    tracing::info!(
        dispatch_id = %id,
        strategy = %request.strategy,
        total,
        "dispatch started"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(DispatchStartedResponse {
            id,
            status: DispatchStatus::Sending,
            total,
        }),
    ))
}

/// Current snapshot of a dispatch run.
pub async fn dispatch_report_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<DispatchId>,
) -> Result<Json<DispatchReportResponse>, ApiError> {
    let report = state
        .dispatches
        .report(id)
        .await
        .ok_or(ApiError::NotFound("dispatch"))?;

    Ok(Json(DispatchReportResponse { id, report }))
}

/// Cancel a dispatch run between waterfall steps.
pub async fn cancel_dispatch_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<DispatchId>,
) -> Result<Json<DispatchReportResponse>, ApiError> {
    let report = state
        .dispatches
        .cancel(id)
        .await
        .ok_or(ApiError::NotFound("dispatch"))?;

    tracing::info!(dispatch_id = %id, "dispatch cancellation requested");

    Ok(Json(DispatchReportResponse { id, report }))
}
