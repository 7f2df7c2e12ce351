use crate::domain::estimate::EstimateFilters;
use crate::domain::forecast::ForecastOutlook;
use crate::domain::sentiment::SentimentReading;
use anyhow::Result;
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Fetch the location catalog, in server order.
    async fn location_names(&self) -> Result<Vec<String>>;

    /// Current price estimate for the given filters, in lakhs.
    async fn current_price(&self, filters: &EstimateFilters) -> Result<f64>;

    /// Future price plus risk and sentiment for the given horizon.
    async fn future_outlook(
        &self,
        filters: &EstimateFilters,
        horizon_months: u32,
    ) -> Result<ForecastOutlook>;

    /// Free-text sentiment analysis, independent of any estimate.
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentReading>;
}
