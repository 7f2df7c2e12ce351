use crate::application::estimator::{EstimateCommand, EstimateEvent};
use crate::domain::estimate::EstimateFilters;
use anyhow::Result;
use crossbeam_channel::Receiver;

/// Unified event type for the User Interface
#[derive(Clone, Debug)]
pub enum AppEvent {
    Worker(EstimateEvent),
    Log(String),
}

/// A client interface for interacting with the estimator worker.
/// Abstracts away channel management and provides a clean API for the app.
pub struct PredictorClient {
    cmd_tx: tokio::sync::mpsc::Sender<EstimateCommand>,
    event_rx: Receiver<EstimateEvent>,
    log_rx: Receiver<String>,
}

impl PredictorClient {
    pub fn new(
        cmd_tx: tokio::sync::mpsc::Sender<EstimateCommand>,
        event_rx: Receiver<EstimateEvent>,
        log_rx: Receiver<String>,
    ) -> Self {
        Self {
            cmd_tx,
            event_rx,
            log_rx,
        }
    }

    /// Poll for the next available event from any channel.
    /// This is a non-blocking call that checks channels in priority order.
    pub fn poll_next(&mut self) -> Option<AppEvent> {
        // 1. Worker events (drive the visible results)
        if let Ok(event) = self.event_rx.try_recv() {
            return Some(AppEvent::Worker(event));
        }

        // 2. Log lines (high volume, lower priority)
        if let Ok(msg) = self.log_rx.try_recv() {
            return Some(AppEvent::Log(msg));
        }

        None
    }

    // --- Command Methods ---

    pub fn request_estimate(
        &self,
        seq: u64,
        filters: EstimateFilters,
        horizon_months: u32,
    ) -> Result<()> {
        self.cmd_tx
            .try_send(EstimateCommand::Estimate {
                seq,
                filters,
                horizon_months,
            })
            .map_err(|e| anyhow::anyhow!("Failed to queue estimate request: {}", e))
    }

    pub fn request_sentiment(&self, seq: u64, text: String) -> Result<()> {
        self.cmd_tx
            .try_send(EstimateCommand::AnalyzeSentiment { seq, text })
            .map_err(|e| anyhow::anyhow!("Failed to queue sentiment request: {}", e))
    }
}
