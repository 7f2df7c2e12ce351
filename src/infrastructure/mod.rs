// Prediction service HTTP client and response schemas
pub mod api;
