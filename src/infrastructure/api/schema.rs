//! Wire schemas for the prediction service, and their normalization.
//!
//! The service has shipped several field spellings over time (snake_case and
//! camelCase, plus shortened names). Rather than scattering `a || b || c`
//! fallbacks through rendering code, every known variant is deserialized
//! here and resolved once, in a fixed priority order: snake_case first,
//! camelCase aliases last. Which version is authoritative is an open
//! question tracked in DESIGN.md.

use crate::domain::forecast::ForecastOutlook;
use crate::domain::risk::RiskLevel;
use crate::domain::sentiment::SentimentReading;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceResponse {
    pub estimated_price: f64,
}

/// Raw `/predict_future_price` payload with every field variant the service
/// has been observed to send.
#[derive(Debug, Default, Deserialize)]
pub struct RawForecastResponse {
    pub future_price: Option<f64>,
    pub expected_price: Option<f64>,
    pub expected_growth_percent: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_level: Option<String>,
    pub market_risk: Option<String>,
    pub risk: Option<String>,
    pub composite_risk_score: Option<Value>,
    #[serde(rename = "compositeScore")]
    pub composite_score: Option<Value>,
    pub risk_category: Option<String>,
    pub risk_message: Option<String>,
    pub recommendation: Option<String>,
    pub prescription_explanation: Option<String>,
    #[serde(rename = "prescriptionExplain")]
    pub prescription_explain: Option<String>,
    pub sentiment_label: Option<String>,
    pub sentiment: Option<String>,
    pub sentiment_score: Option<f64>,
}

impl RawForecastResponse {
    /// Resolve the fallback chains into a [`ForecastOutlook`]. Only the
    /// future price is required; everything else degrades to placeholders.
    pub fn normalize(self) -> Result<ForecastOutlook> {
        let future_price = self
            .future_price
            .or(self.expected_price)
            .context("Forecast response carried no future_price or expected_price")?;

        let risk_label = self
            .risk_level
            .or(self.market_risk)
            .or(self.risk)
            .unwrap_or_else(|| "Unknown".to_string());
        let risk_level = RiskLevel::from_label(&risk_label);

        let composite_score = self
            .composite_risk_score
            .or(self.composite_score)
            .and_then(display_value);

        let prescription_explanation =
            self.prescription_explanation.or(self.prescription_explain);

        // Sentiment is absent only when both fields are missing; a score of
        // 0 with a present label is a real observation.
        let label = self.sentiment_label.or(self.sentiment);
        let score = self.sentiment_score;
        let sentiment = match (label, score) {
            (None, None) => None,
            (label, score) => Some(SentimentReading {
                label: label.unwrap_or_else(|| "Neutral".to_string()),
                score: score.unwrap_or(50.0),
            }),
        };

        Ok(ForecastOutlook {
            future_price,
            expected_growth_percent: self.expected_growth_percent,
            volatility: self.volatility,
            risk_label,
            risk_level,
            composite_score,
            risk_category: self.risk_category,
            risk_message: self.risk_message,
            recommendation: self.recommendation,
            prescription_explanation,
            sentiment,
        })
    }
}

/// Raw `/analyze_sentiment` payload. Same story: four spellings for the
/// label, three for the score.
#[derive(Debug, Default, Deserialize)]
pub struct RawSentimentResponse {
    pub sentiment: Option<String>,
    pub sentiment_label: Option<String>,
    #[serde(rename = "sentimentLabel")]
    pub sentiment_label_camel: Option<String>,
    pub label: Option<String>,
    pub score: Option<f64>,
    pub confidence: Option<f64>,
    pub sentiment_score: Option<f64>,
}

impl RawSentimentResponse {
    /// First non-null variant wins. A fully absent payload reads as
    /// Neutral with score 0 (not 50: this endpoint reports confidence in
    /// the analyzed text, and "nothing analyzed" is zero confidence).
    pub fn normalize(self) -> SentimentReading {
        let label = self
            .sentiment
            .or(self.sentiment_label)
            .or(self.sentiment_label_camel)
            .or(self.label)
            .unwrap_or_else(|| "Neutral".to_string());

        let score = self
            .score
            .or(self.confidence)
            .or(self.sentiment_score)
            .unwrap_or(0.0);

        SentimentReading { label, score }
    }
}

/// Composite score passthrough: numbers render as sent (integers without a
/// trailing ".0"), strings render verbatim, anything else is dropped.
fn display_value(value: Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
