use thiserror::Error;

/// Errors raised while validating the estimate form, before any network call
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Enter a valid area in square feet (must be a positive number)")]
    InvalidArea,

    #[error("Select a location before requesting an estimate")]
    MissingLocation,
}
