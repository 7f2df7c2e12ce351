use serde::{Deserialize, Serialize};

/// One sentiment observation: a label such as "Positive"/"Neutral"/"Negative"
/// and a confidence percentage in [0, 100]. A score of exactly 0 is a valid
/// observation, not a missing one; absence is modelled as `Option` upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub label: String,
    pub score: f64,
}

impl SentimentReading {
    /// The resting state of the gauge, also used when a forecast response
    /// carries no sentiment at all.
    pub fn neutral() -> Self {
        Self {
            label: "Neutral".to_string(),
            score: 50.0,
        }
    }
}

/// Needle rotation for a score: 0 maps to -90°, 50 to 0°, 100 to +90°,
/// linearly. Out-of-range scores (infinities included) are clamped first;
/// only NaN falls back to the midpoint. The form `(score - 50) * 1.8` is
/// exact at every whole-number score.
pub fn gauge_angle(score: f64) -> f64 {
    let score = if score.is_nan() { 50.0 } else { score };
    let clamped = score.clamp(0.0, 100.0);
    (clamped - 50.0) * 1.8
}

/// Fill color of the gauge needle and readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeColor {
    Red,
    Amber,
    Green,
}

impl GaugeColor {
    /// Substring match on the label, case-insensitive: anything containing
    /// "neg" is red, anything containing "neutral" is amber, and everything
    /// else — including unrecognized labels — renders green. Defaulting to
    /// positive is intentional and matches the service's label vocabulary.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("neg") {
            Self::Red
        } else if label.contains("neutral") {
            Self::Amber
        } else {
            Self::Green
        }
    }
}
