// Estimate request filters and input parsing
pub mod estimate;

// Normalized forecast view-model
pub mod forecast;

// Risk level classification
pub mod risk;

// Sentiment readings and gauge math
pub mod sentiment;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
