// App state component (form + results)
pub mod app;

// Channel facade between UI and worker
pub mod client;

// Background estimator worker
pub mod estimator;
