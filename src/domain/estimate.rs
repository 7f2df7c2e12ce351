use crate::domain::errors::ValidationError;
use serde::Serialize;

/// Wire sentinel for "no selection" on the bedroom/bathroom radio groups.
/// The prediction service expects -1 rather than a missing field.
pub const UNSPECIFIED_ROOMS: i32 = -1;

/// Property filters for one estimate submission. Constructed fresh per
/// submit and discarded after rendering; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateFilters {
    pub area_sqft: f64,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub location: String,
}

impl EstimateFilters {
    /// Check the invariants the service relies on. Room counts are allowed
    /// to be unselected; area and location are not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.area_sqft.is_finite() || self.area_sqft <= 0.0 {
            return Err(ValidationError::InvalidArea);
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        Ok(())
    }

    pub fn bedrooms_wire(&self) -> i32 {
        self.bedrooms.map_or(UNSPECIFIED_ROOMS, i32::from)
    }

    pub fn bathrooms_wire(&self) -> i32 {
        self.bathrooms.map_or(UNSPECIFIED_ROOMS, i32::from)
    }
}

/// JSON body of the future-price request. The current-price request reuses
/// the same field names but is form-encoded (see the api client).
#[derive(Debug, Serialize)]
pub struct ForecastRequest {
    pub total_sqft: f64,
    pub bhk: i32,
    pub bath: i32,
    pub location: String,
    pub horizon_months: u32,
}

impl ForecastRequest {
    pub fn new(filters: &EstimateFilters, horizon_months: u32) -> Self {
        Self {
            total_sqft: filters.area_sqft,
            bhk: filters.bedrooms_wire(),
            bath: filters.bathrooms_wire(),
            location: filters.location.clone(),
            horizon_months,
        }
    }
}

/// Parse the area text field. Any unparseable or non-positive input is a
/// validation failure; the caller shows an alert and skips the network.
pub fn parse_area(input: &str) -> Result<f64, ValidationError> {
    let area = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidArea)?;
    if !area.is_finite() || area <= 0.0 {
        return Err(ValidationError::InvalidArea);
    }
    Ok(area)
}

/// Parse the horizon text field, falling back to `default` (12 in the stock
/// configuration) when the input is empty or non-numeric. Zero is rejected
/// the same way: the service needs a positive number of months.
pub fn parse_horizon(input: &str, default: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(months) if months > 0 => months,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(area: f64, location: &str) -> EstimateFilters {
        EstimateFilters {
            area_sqft: area,
            bedrooms: Some(2),
            bathrooms: Some(2),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_area() {
        assert_eq!(
            filters(0.0, "Whitefield").validate(),
            Err(ValidationError::InvalidArea)
        );
        assert_eq!(
            filters(-450.0, "Whitefield").validate(),
            Err(ValidationError::InvalidArea)
        );
        assert_eq!(
            filters(f64::NAN, "Whitefield").validate(),
            Err(ValidationError::InvalidArea)
        );
    }

    #[test]
    fn test_validate_rejects_blank_location() {
        assert_eq!(
            filters(1000.0, "").validate(),
            Err(ValidationError::MissingLocation)
        );
        assert_eq!(
            filters(1000.0, "   ").validate(),
            Err(ValidationError::MissingLocation)
        );
    }

    #[test]
    fn test_validate_accepts_typical_submission() {
        assert_eq!(filters(1000.0, "Whitefield").validate(), Ok(()));
    }

    #[test]
    fn test_unselected_rooms_encode_as_minus_one() {
        let f = EstimateFilters {
            area_sqft: 1000.0,
            bedrooms: None,
            bathrooms: None,
            location: "Whitefield".to_string(),
        };
        assert_eq!(f.bedrooms_wire(), -1);
        assert_eq!(f.bathrooms_wire(), -1);

        let req = ForecastRequest::new(&f, 12);
        assert_eq!(req.bhk, -1);
        assert_eq!(req.bath, -1);
        assert_eq!(req.horizon_months, 12);
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(parse_area("1000"), Ok(1000.0));
        assert_eq!(parse_area(" 1250.5 "), Ok(1250.5));
        assert_eq!(parse_area("big"), Err(ValidationError::InvalidArea));
        assert_eq!(parse_area(""), Err(ValidationError::InvalidArea));
        assert_eq!(parse_area("0"), Err(ValidationError::InvalidArea));
        assert_eq!(parse_area("-5"), Err(ValidationError::InvalidArea));
    }

    #[test]
    fn test_parse_horizon_defaults_to_twelve() {
        assert_eq!(parse_horizon("24", 12), 24);
        assert_eq!(parse_horizon("", 12), 12);
        assert_eq!(parse_horizon("a year", 12), 12);
        assert_eq!(parse_horizon("0", 12), 12);
    }
}
