// Main entry point for API server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use server_core::domains::notifications::DispatcherConfig;
use server_core::kernel::{RecordsClient, RecordsConfig, ServerDeps, TwilioAdapter};
use server_core::server::build_app;
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twilio::{TwilioOptions, TwilioService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Openslot waitlist API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Records store client (explicit config, no ambient credentials)
    let records = Arc::new(
        RecordsClient::new(RecordsConfig {
            base_url: config.records_api_url.clone(),
            api_key: config.records_api_key.clone(),
        })
        .context("Failed to create records client")?,
    );

    // SMS gateway
    let twilio = Arc::new(TwilioService::new(TwilioOptions {
        account_sid: config.twilio_account_sid.clone(),
        auth_token: config.twilio_auth_token.clone(),
        from_number: config.twilio_from_number.clone(),
    }));

    let deps = Arc::new(ServerDeps::new(
        records,
        Arc::new(TwilioAdapter::new(twilio)),
    ));

    let dispatcher_config = DispatcherConfig {
        waterfall_interval: Duration::from_secs(config.waterfall_interval_minutes * 60),
    };

    // Build application
    let app = build_app(deps, dispatcher_config);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
