//! Background worker that talks to the prediction service.
//!
//! The UI never performs I/O: it pushes [`EstimateCommand`]s into a tokio
//! mpsc channel and the worker answers with [`EstimateEvent`]s over a
//! crossbeam channel the UI drains each frame. Commands are processed one at
//! a time, and every event carries the sequence number of the command that
//! produced it so the app can discard responses from superseded submissions.

use crate::domain::estimate::EstimateFilters;
use crate::domain::forecast::ForecastOutlook;
use crate::domain::ports::PredictionProvider;
use crate::domain::sentiment::SentimentReading;
use crossbeam_channel::Sender;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub enum EstimateCommand {
    Estimate {
        seq: u64,
        filters: EstimateFilters,
        horizon_months: u32,
    },
    AnalyzeSentiment {
        seq: u64,
        text: String,
    },
}

#[derive(Debug, Clone)]
pub enum EstimateEvent {
    LocationsLoaded(Vec<String>),
    LocationsUnavailable,
    CurrentPrice {
        seq: u64,
        price: f64,
    },
    ForecastReady {
        seq: u64,
        outlook: ForecastOutlook,
    },
    EstimateFailed {
        seq: u64,
        error: String,
    },
    SentimentReady {
        seq: u64,
        reading: SentimentReading,
    },
    SentimentFailed {
        seq: u64,
        error: String,
    },
}

/// Run the worker until the command channel closes. Loads the location
/// catalog once at startup; a failed load is terminal for this run (the
/// selector stays unavailable until the app is restarted).
pub async fn run_worker(
    provider: Arc<dyn PredictionProvider>,
    mut cmd_rx: Receiver<EstimateCommand>,
    event_tx: Sender<EstimateEvent>,
) {
    match provider.location_names().await {
        Ok(locations) if !locations.is_empty() => {
            let _ = event_tx.send(EstimateEvent::LocationsLoaded(locations));
        }
        Ok(_) => {
            // An empty catalog leaves nothing to select from; treat it the
            // same as a failed load so the selector does not offer a dead end.
            warn!("Location catalog is empty");
            let _ = event_tx.send(EstimateEvent::LocationsUnavailable);
        }
        Err(e) => {
            error!("Location catalog load failed: {:#}", e);
            let _ = event_tx.send(EstimateEvent::LocationsUnavailable);
        }
    }

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            EstimateCommand::Estimate {
                seq,
                filters,
                horizon_months,
            } => {
                handle_estimate(provider.as_ref(), &event_tx, seq, filters, horizon_months).await;
            }
            EstimateCommand::AnalyzeSentiment { seq, text } => {
                match provider.analyze_sentiment(&text).await {
                    Ok(reading) => {
                        let _ = event_tx.send(EstimateEvent::SentimentReady { seq, reading });
                    }
                    Err(e) => {
                        error!("Sentiment analysis failed: {:#}", e);
                        let _ = event_tx.send(EstimateEvent::SentimentFailed {
                            seq,
                            error: format!("{:#}", e),
                        });
                    }
                }
            }
        }
    }

    info!("Estimator worker shutting down (command channel closed)");
}

/// The two price calls are sequential and the current price is reported as
/// soon as it lands, so the user sees partial feedback before the forecast
/// arrives. Failure of either call aborts the submission.
async fn handle_estimate(
    provider: &dyn PredictionProvider,
    event_tx: &Sender<EstimateEvent>,
    seq: u64,
    filters: EstimateFilters,
    horizon_months: u32,
) {
    let price = match provider.current_price(&filters).await {
        Ok(price) => price,
        Err(e) => {
            error!("Current price request failed: {:#}", e);
            let _ = event_tx.send(EstimateEvent::EstimateFailed {
                seq,
                error: format!("{:#}", e),
            });
            return;
        }
    };
    let _ = event_tx.send(EstimateEvent::CurrentPrice { seq, price });

    match provider.future_outlook(&filters, horizon_months).await {
        Ok(outlook) => {
            let _ = event_tx.send(EstimateEvent::ForecastReady { seq, outlook });
        }
        Err(e) => {
            error!("Forecast request failed: {:#}", e);
            let _ = event_tx.send(EstimateEvent::EstimateFailed {
                seq,
                error: format!("{:#}", e),
            });
        }
    }
}
