use anyhow::{Context, Result};
use std::env;

/// Runtime configuration, sourced from environment variables (and `.env`
/// via dotenvy, loaded in `main`). Every value has a default so the client
/// runs against a local prediction service out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base origin of the prediction service, e.g. `http://127.0.0.1:5000`.
    pub api_base_url: String,
    /// Per-request timeout for all HTTP calls.
    pub request_timeout_secs: u64,
    /// Initial value of the area field, in square feet.
    pub default_area_sqft: f64,
    /// Initial value of the forecast horizon field, in months.
    pub default_horizon_months: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("Failed to parse REQUEST_TIMEOUT_SECS")?;

        let default_area_sqft = env::var("DEFAULT_AREA_SQFT")
            .unwrap_or_else(|_| "1000".to_string())
            .parse::<f64>()
            .context("Failed to parse DEFAULT_AREA_SQFT")?;

        let default_horizon_months = env::var("DEFAULT_HORIZON_MONTHS")
            .unwrap_or_else(|_| "12".to_string())
            .parse::<u32>()
            .context("Failed to parse DEFAULT_HORIZON_MONTHS")?;

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            default_area_sqft,
            default_horizon_months,
        })
    }
}
