//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::notifications::{DispatchRegistry, Dispatcher, DispatcherConfig};
use crate::kernel::ServerDeps;
use crate::server::routes::{
    cancel_dispatch_handler, dispatch_report_handler, evaluate_match_handler, health_handler,
    provider_slots_handler, query_waitlist_handler, start_dispatch_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    pub dispatcher: Dispatcher,
    pub dispatches: DispatchRegistry,
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>, dispatcher_config: DispatcherConfig) -> Router {
    let state = AppState {
        dispatcher: Dispatcher::new(deps.sms.clone(), dispatcher_config),
        dispatches: DispatchRegistry::new(),
        deps,
    };

    // CORS: the scheduling front-end calls this API directly from the browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/waitlist/query", post(query_waitlist_handler))
        .route("/api/matching/evaluate", post(evaluate_match_handler))
        .route("/api/providers/:id/slots", get(provider_slots_handler))
        .route("/api/notifications/dispatch", post(start_dispatch_handler))
        .route(
            "/api/notifications/dispatches/:id",
            get(dispatch_report_handler),
        )
        .route(
            "/api/notifications/dispatches/:id/cancel",
            post(cancel_dispatch_handler),
        )
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
