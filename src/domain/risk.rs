use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity bucket for the forecast risk pill. The service sends a free-form
/// label; only "low" and "moderate" (case-insensitive, exact) are trusted as
/// such, everything else is treated as high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

impl RiskLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            _ => Self::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_case_insensitively() {
        assert_eq!(RiskLevel::from_label("low"), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label("LOW"), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label(" Moderate "), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_label("high"), RiskLevel::High);
    }

    #[test]
    fn test_unrecognized_labels_default_to_high() {
        assert_eq!(RiskLevel::from_label("unknown"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label(""), RiskLevel::High);
        assert_eq!(RiskLevel::from_label("very low"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label("Elevated"), RiskLevel::High);
    }
}
