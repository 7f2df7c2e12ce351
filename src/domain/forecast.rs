use crate::domain::risk::RiskLevel;
use crate::domain::sentiment::SentimentReading;

/// Normalized view of one `/predict_future_price` response. Produced by the
/// api schema layer; the UI renders it without any further fallback logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutlook {
    /// Projected price at the end of the horizon, in lakhs.
    pub future_price: f64,
    pub expected_growth_percent: Option<f64>,
    pub volatility: Option<f64>,
    /// Raw label as sent by the service ("Low", "Elevated", ...), shown
    /// verbatim in the pill.
    pub risk_label: String,
    /// Severity bucket derived from `risk_label`, drives the pill color.
    pub risk_level: RiskLevel,
    /// Composite risk score passed through untouched; the service may send
    /// a number or a textual placeholder.
    pub composite_score: Option<String>,
    pub risk_category: Option<String>,
    pub risk_message: Option<String>,
    pub recommendation: Option<String>,
    pub prescription_explanation: Option<String>,
    /// None only when the response carried neither a sentiment label nor a
    /// score. A score of 0 with a present label survives as Some.
    pub sentiment: Option<SentimentReading>,
}
