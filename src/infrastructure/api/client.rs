use crate::domain::estimate::{EstimateFilters, ForecastRequest};
use crate::domain::forecast::ForecastOutlook;
use crate::domain::ports::PredictionProvider;
use crate::domain::sentiment::SentimentReading;
use crate::infrastructure::api::schema::{
    LocationsResponse, PriceResponse, RawForecastResponse, RawSentimentResponse,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for the external prediction service. One instance is shared
/// by the estimator worker for the lifetime of the process.
pub struct PredictionApiClient {
    client: Client,
    base_url: String,
}

impl PredictionApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PredictionProvider for PredictionApiClient {
    async fn location_names(&self) -> Result<Vec<String>> {
        let url = self.url("/get_location_names");
        debug!("Fetching location catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch location catalog")?;

        if !response.status().is_success() {
            anyhow::bail!("Location catalog returned status: {}", response.status());
        }

        let body: LocationsResponse = response
            .json()
            .await
            .context("Failed to parse location catalog response")?;

        info!("Loaded {} locations", body.locations.len());
        Ok(body.locations)
    }

    async fn current_price(&self, filters: &EstimateFilters) -> Result<f64> {
        // This endpoint predates the JSON ones and still takes a form body.
        let form = [
            ("total_sqft", filters.area_sqft.to_string()),
            ("bhk", filters.bedrooms_wire().to_string()),
            ("bath", filters.bathrooms_wire().to_string()),
            ("location", filters.location.clone()),
        ];

        let response = self
            .client
            .post(self.url("/predict_home_price"))
            .form(&form)
            .send()
            .await
            .context("Failed to request current price")?;

        if !response.status().is_success() {
            anyhow::bail!("Price endpoint returned status: {}", response.status());
        }

        let body: PriceResponse = response
            .json()
            .await
            .context("Failed to parse current price response")?;

        info!(
            "Current price for {} ({} sqft): {:.2} lakh",
            filters.location, filters.area_sqft, body.estimated_price
        );
        Ok(body.estimated_price)
    }

    async fn future_outlook(
        &self,
        filters: &EstimateFilters,
        horizon_months: u32,
    ) -> Result<ForecastOutlook> {
        let request = ForecastRequest::new(filters, horizon_months);

        let response = self
            .client
            .post(self.url("/predict_future_price"))
            .json(&request)
            .send()
            .await
            .context("Failed to request future price forecast")?;

        if !response.status().is_success() {
            anyhow::bail!("Forecast endpoint returned status: {}", response.status());
        }

        let raw: RawForecastResponse = response
            .json()
            .await
            .context("Failed to parse forecast response")?;

        let outlook = raw.normalize()?;
        info!(
            "Forecast for {} over {} months: {:.2} lakh, risk {}",
            filters.location, horizon_months, outlook.future_price, outlook.risk_label
        );
        Ok(outlook)
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentReading> {
        let response = self
            .client
            .post(self.url("/analyze_sentiment"))
            .json(&json!({ "text": text }))
            .send()
            .await
            .context("Failed to request sentiment analysis")?;

        if !response.status().is_success() {
            anyhow::bail!("Sentiment endpoint returned status: {}", response.status());
        }

        let raw: RawSentimentResponse = response
            .json()
            .await
            .context("Failed to parse sentiment response")?;

        let reading = raw.normalize();
        info!(
            "Sentiment: {} ({:.1})",
            reading.label, reading.score
        );
        Ok(reading)
    }
}
