use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables.
///
/// Loaded once in `main` and passed down explicitly. Business logic never
/// reads ambient environment state.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub records_api_url: String,
    pub records_api_key: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    /// Minutes between consecutive waterfall sends.
    pub waterfall_interval_minutes: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            records_api_url: env::var("RECORDS_API_URL")
                .context("RECORDS_API_URL must be set")?,
            records_api_key: env::var("RECORDS_API_KEY")
                .context("RECORDS_API_KEY must be set")?,
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID")
                .context("TWILIO_ACCOUNT_SID must be set")?,
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN")
                .context("TWILIO_AUTH_TOKEN must be set")?,
            twilio_from_number: env::var("TWILIO_FROM_NUMBER")
                .context("TWILIO_FROM_NUMBER must be set")?,
            waterfall_interval_minutes: env::var("WATERFALL_INTERVAL_MINUTES")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("WATERFALL_INTERVAL_MINUTES must be a valid number")?,
        })
    }
}
