use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    records_store: RecordsStoreHealth,
    active_dispatches: usize,
}

#[derive(Serialize)]
pub struct RecordsStoreHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks:
/// - Records store reachability and responsiveness
/// - In-flight dispatch runs
///
/// Returns 200 OK if all systems are healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    // Check records store reachability with a bounded wait
    let records_health = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        state.deps.records.ping(),
    )
    .await
    {
        Ok(Ok(())) => RecordsStoreHealth {
            status: "ok".to_string(),
            error: None,
        },
        Ok(Err(e)) => RecordsStoreHealth {
            status: "error".to_string(),
            error: Some(format!("Ping failed: {}", e)),
        },
        Err(_) => RecordsStoreHealth {
            status: "error".to_string(),
            error: Some("Ping timeout (>5s)".to_string()),
        },
    };

    let active_dispatches = state.dispatches.active_count().await;

    let is_healthy = records_health.status == "ok";

    let overall_status = if is_healthy { "healthy" } else { "unhealthy" };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            records_store: records_health,
            active_dispatches,
        }),
    )
}
