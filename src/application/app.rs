use crate::application::client::{AppEvent, PredictorClient};
use crate::application::estimator::EstimateEvent;
use crate::config::Config;
use crate::domain::errors::ValidationError;
use crate::domain::estimate::{EstimateFilters, parse_area, parse_horizon};
use crate::domain::risk::RiskLevel;
use crate::domain::sentiment::SentimentReading;
use tracing::debug;

/// Placeholder shown wherever a result is not (yet) available.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub enum LocationCatalog {
    Loading,
    Ready(Vec<String>),
    Unavailable,
}

/// Typed handles for every rendered result field. The UI reads these and
/// nothing else; all response mapping happens in [`EstimatorApp`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub current_price: Option<f64>,
    pub future_price: Option<f64>,
    pub expected_growth_percent: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_label: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub composite_score: Option<String>,
    pub risk_category: Option<String>,
    pub risk_message: Option<String>,
    pub recommendation: Option<String>,
    pub prescription_explanation: Option<String>,
    pub gauge: SentimentReading,
    pub sentiment_line: Option<String>,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self {
            current_price: None,
            future_price: None,
            expected_growth_percent: None,
            volatility: None,
            risk_label: None,
            risk_level: None,
            composite_score: None,
            risk_category: None,
            risk_message: None,
            recommendation: None,
            prescription_explanation: None,
            gauge: SentimentReading::neutral(),
            sentiment_line: None,
        }
    }
}

impl ResultsView {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_price_text(&self) -> String {
        price_text(self.current_price)
    }

    pub fn future_price_text(&self) -> String {
        price_text(self.future_price)
    }

    pub fn composite_score_text(&self) -> String {
        self.composite_score
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn growth_text(&self) -> String {
        match self.expected_growth_percent {
            Some(g) => format!("{:.2}%", g),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn volatility_text(&self) -> String {
        match self.volatility {
            Some(v) => format!("{:.3}", v),
            None => PLACEHOLDER.to_string(),
        }
    }
}

fn price_text(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("₹ {:.2} Lakh", p),
        None => PLACEHOLDER.to_string(),
    }
}

/// All state behind the estimate form and results panel. Pure state and
/// event handling; rendering lives in `interfaces::ui`.
pub struct EstimatorApp {
    client: PredictorClient,

    default_area_sqft: f64,
    default_horizon_months: u32,

    // Form state
    pub area_input: String,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub catalog: LocationCatalog,
    pub selected_location: Option<String>,
    pub horizon_input: String,
    pub commentary: String,

    // Display state
    pub results: ResultsView,
    pub alert: Option<String>,
    pub activity_log: Vec<String>,
    pub estimating: bool,
    pub analyzing: bool,

    // Sequence numbers of the latest submissions; events tagged with an
    // older number belong to a superseded request and are dropped.
    estimate_seq: u64,
    sentiment_seq: u64,
}

impl EstimatorApp {
    pub fn new(client: PredictorClient, config: &Config) -> Self {
        Self {
            client,
            default_area_sqft: config.default_area_sqft,
            default_horizon_months: config.default_horizon_months,
            area_input: format_area(config.default_area_sqft),
            bedrooms: None,
            bathrooms: None,
            catalog: LocationCatalog::Loading,
            selected_location: None,
            horizon_input: config.default_horizon_months.to_string(),
            commentary: String::new(),
            results: ResultsView::default(),
            alert: None,
            activity_log: Vec::new(),
            estimating: false,
            analyzing: false,
            estimate_seq: 0,
            sentiment_seq: 0,
        }
    }

    /// Validate the form and queue an estimate. Validation failures surface
    /// as an alert and never reach the network.
    pub fn submit_estimate(&mut self) {
        let area = match parse_area(&self.area_input) {
            Ok(area) => area,
            Err(e) => {
                self.alert = Some(e.to_string());
                return;
            }
        };

        let location = match &self.selected_location {
            Some(location) if !location.trim().is_empty() => location.clone(),
            _ => {
                self.alert = Some(ValidationError::MissingLocation.to_string());
                return;
            }
        };

        let filters = EstimateFilters {
            area_sqft: area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            location,
        };
        if let Err(e) = filters.validate() {
            self.alert = Some(e.to_string());
            return;
        }

        let horizon = parse_horizon(&self.horizon_input, self.default_horizon_months);

        self.estimate_seq += 1;
        self.estimating = true;
        if let Err(e) = self.client.request_estimate(self.estimate_seq, filters, horizon) {
            self.estimating = false;
            self.alert = Some(e.to_string());
        }
    }

    /// Queue the free-text commentary for sentiment analysis. The service
    /// answers Neutral for empty text, so no client-side validation here.
    pub fn analyze_sentiment(&mut self) {
        self.sentiment_seq += 1;
        self.analyzing = true;
        if let Err(e) = self
            .client
            .request_sentiment(self.sentiment_seq, self.commentary.clone())
        {
            self.analyzing = false;
            self.alert = Some(e.to_string());
        }
    }

    /// Restore the form and every result field to its documented default.
    pub fn reset_form(&mut self) {
        self.area_input = format_area(self.default_area_sqft);
        self.bedrooms = None;
        self.bathrooms = None;
        self.selected_location = None;
        self.horizon_input = self.default_horizon_months.to_string();
        self.commentary.clear();
        self.results.reset();
        self.alert = None;
    }

    /// Drain all pending worker events and log lines. Called once per frame.
    pub fn pump_events(&mut self) {
        while let Some(event) = self.client.poll_next() {
            match event {
                AppEvent::Worker(event) => self.apply_event(event),
                AppEvent::Log(line) => {
                    self.activity_log.push(line);
                    // Keep the pane manageable
                    if self.activity_log.len() > 500 {
                        self.activity_log.drain(0..100);
                    }
                }
            }
        }
    }

    pub fn apply_event(&mut self, event: EstimateEvent) {
        match event {
            EstimateEvent::LocationsLoaded(locations) => {
                self.catalog = LocationCatalog::Ready(locations);
            }
            EstimateEvent::LocationsUnavailable => {
                self.catalog = LocationCatalog::Unavailable;
            }
            EstimateEvent::CurrentPrice { seq, price } if seq == self.estimate_seq => {
                self.results.current_price = Some(price);
            }
            EstimateEvent::ForecastReady { seq, outlook } if seq == self.estimate_seq => {
                self.estimating = false;
                self.results.future_price = Some(outlook.future_price);
                self.results.expected_growth_percent = outlook.expected_growth_percent;
                self.results.volatility = outlook.volatility;
                self.results.risk_label = Some(outlook.risk_label);
                self.results.risk_level = Some(outlook.risk_level);
                self.results.composite_score = outlook.composite_score;
                self.results.risk_category = outlook.risk_category;
                self.results.risk_message = outlook.risk_message;
                self.results.recommendation = outlook.recommendation;
                self.results.prescription_explanation = outlook.prescription_explanation;
                self.results.gauge = outlook
                    .sentiment
                    .unwrap_or_else(SentimentReading::neutral);
            }
            EstimateEvent::EstimateFailed { seq, error } if seq == self.estimate_seq => {
                // Only the price lines reset; risk and sentiment keep their
                // prior state (matches the original client's behavior).
                self.estimating = false;
                self.alert = Some(error);
                self.results.current_price = None;
                self.results.future_price = None;
            }
            EstimateEvent::SentimentReady { seq, reading } if seq == self.sentiment_seq => {
                self.analyzing = false;
                self.results.sentiment_line = Some(format!(
                    "{} ({:.1}% confidence)",
                    reading.label, reading.score
                ));
                self.results.gauge = reading;
            }
            EstimateEvent::SentimentFailed { seq, error } if seq == self.sentiment_seq => {
                self.analyzing = false;
                self.alert = Some(error);
            }
            stale => {
                debug!("Dropping event from superseded request: {:?}", stale);
            }
        }
    }
}

/// Areas are whole square feet in practice; keep "1000" instead of "1000.0"
/// in the text field, but preserve fractional defaults if configured.
fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{}", area as i64)
    } else {
        format!("{}", area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::estimator::EstimateCommand;
    use crate::domain::forecast::ForecastOutlook;
    use crate::domain::sentiment::{GaugeColor, gauge_angle};
    use crossbeam_channel::unbounded;
    use tokio::sync::mpsc;

    fn test_app() -> (EstimatorApp, mpsc::Receiver<EstimateCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = unbounded();
        let (_log_tx, log_rx) = unbounded();
        let client = PredictorClient::new(cmd_tx, event_rx, log_rx);

        let config = Config {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 30,
            default_area_sqft: 1000.0,
            default_horizon_months: 12,
        };
        (EstimatorApp::new(client, &config), cmd_rx)
    }

    fn ready_app() -> (EstimatorApp, mpsc::Receiver<EstimateCommand>) {
        let (mut app, cmd_rx) = test_app();
        app.apply_event(EstimateEvent::LocationsLoaded(vec![
            "Whitefield".to_string(),
        ]));
        app.selected_location = Some("Whitefield".to_string());
        (app, cmd_rx)
    }

    fn outlook() -> ForecastOutlook {
        ForecastOutlook {
            future_price: 102.3,
            expected_growth_percent: Some(4.2),
            volatility: Some(0.015),
            risk_label: "Moderate".to_string(),
            risk_level: RiskLevel::Moderate,
            composite_score: Some("41.5".to_string()),
            risk_category: Some("Caution Advised".to_string()),
            risk_message: Some("Some mixed signals.".to_string()),
            recommendation: Some("Hold".to_string()),
            prescription_explanation: Some("Mild positive growth.".to_string()),
            sentiment: Some(SentimentReading {
                label: "Positive".to_string(),
                score: 70.0,
            }),
        }
    }

    #[test]
    fn test_invalid_area_alerts_without_queuing_a_request() {
        let (mut app, mut cmd_rx) = ready_app();
        app.area_input = "-50".to_string();

        app.submit_estimate();

        assert!(app.alert.is_some());
        assert!(!app.estimating);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_non_numeric_area_alerts_without_queuing_a_request() {
        let (mut app, mut cmd_rx) = ready_app();
        app.area_input = "spacious".to_string();

        app.submit_estimate();

        assert!(app.alert.is_some());
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_missing_location_alerts_without_queuing_a_request() {
        let (mut app, mut cmd_rx) = test_app();
        app.area_input = "1000".to_string();
        app.selected_location = None;

        app.submit_estimate();

        assert!(app.alert.is_some());
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_valid_submission_queues_one_estimate() {
        let (mut app, mut cmd_rx) = ready_app();
        app.bedrooms = Some(2);
        app.bathrooms = Some(2);

        app.submit_estimate();

        assert!(app.alert.is_none());
        assert!(app.estimating);
        match cmd_rx.try_recv().unwrap() {
            EstimateCommand::Estimate {
                seq,
                filters,
                horizon_months,
            } => {
                assert_eq!(seq, 1);
                assert_eq!(filters.location, "Whitefield");
                assert_eq!(filters.area_sqft, 1000.0);
                assert_eq!(horizon_months, 12);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rendered_prices_match_worked_example() {
        let (mut app, _cmd_rx) = ready_app();
        app.submit_estimate();

        app.apply_event(EstimateEvent::CurrentPrice { seq: 1, price: 85.5 });
        assert_eq!(app.results.current_price_text(), "₹ 85.50 Lakh");

        app.apply_event(EstimateEvent::ForecastReady {
            seq: 1,
            outlook: ForecastOutlook {
                sentiment: Some(SentimentReading {
                    label: "Positive".to_string(),
                    score: 70.0,
                }),
                ..outlook()
            },
        });

        assert_eq!(app.results.future_price_text(), "₹ 102.30 Lakh");
        assert_eq!(app.results.risk_level, Some(RiskLevel::Moderate));
        assert_eq!(gauge_angle(app.results.gauge.score), 36.0);
        assert_eq!(GaugeColor::from_label(&app.results.gauge.label), GaugeColor::Green);
        assert!(!app.estimating);
    }

    #[test]
    fn test_forecast_growth_and_volatility_are_rendered() {
        let (mut app, _cmd_rx) = ready_app();
        assert_eq!(app.results.growth_text(), PLACEHOLDER);
        assert_eq!(app.results.volatility_text(), PLACEHOLDER);

        app.submit_estimate();
        app.apply_event(EstimateEvent::ForecastReady {
            seq: 1,
            outlook: outlook(),
        });

        assert_eq!(app.results.growth_text(), "4.20%");
        assert_eq!(app.results.volatility_text(), "0.015");

        app.reset_form();
        assert_eq!(app.results.growth_text(), PLACEHOLDER);
        assert_eq!(app.results.volatility_text(), PLACEHOLDER);
    }

    #[test]
    fn test_stale_events_are_dropped() {
        let (mut app, _cmd_rx) = ready_app();
        app.submit_estimate(); // seq 1
        app.submit_estimate(); // seq 2 supersedes it

        app.apply_event(EstimateEvent::CurrentPrice { seq: 1, price: 11.0 });
        assert_eq!(app.results.current_price, None);

        app.apply_event(EstimateEvent::CurrentPrice { seq: 2, price: 85.5 });
        assert_eq!(app.results.current_price, Some(85.5));

        // A late failure from the first submission must not clobber anything
        app.apply_event(EstimateEvent::EstimateFailed {
            seq: 1,
            error: "boom".to_string(),
        });
        assert_eq!(app.results.current_price, Some(85.5));
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_failure_resets_prices_but_keeps_risk_fields() {
        let (mut app, _cmd_rx) = ready_app();
        app.submit_estimate();
        app.apply_event(EstimateEvent::CurrentPrice { seq: 1, price: 85.5 });
        app.apply_event(EstimateEvent::ForecastReady {
            seq: 1,
            outlook: outlook(),
        });

        app.submit_estimate(); // seq 2
        app.apply_event(EstimateEvent::EstimateFailed {
            seq: 2,
            error: "connection refused".to_string(),
        });

        assert_eq!(app.results.current_price_text(), PLACEHOLDER);
        assert_eq!(app.results.future_price_text(), PLACEHOLDER);
        // Risk and sentiment fields retain the previous submission's state
        assert_eq!(app.results.risk_level, Some(RiskLevel::Moderate));
        assert_eq!(app.results.gauge.score, 70.0);
        assert!(app.alert.as_ref().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_forecast_without_sentiment_rests_gauge_at_neutral() {
        let (mut app, _cmd_rx) = ready_app();
        app.results.gauge = SentimentReading {
            label: "Positive".to_string(),
            score: 90.0,
        };
        app.submit_estimate();

        app.apply_event(EstimateEvent::ForecastReady {
            seq: 1,
            outlook: ForecastOutlook {
                sentiment: None,
                ..outlook()
            },
        });

        assert_eq!(app.results.gauge, SentimentReading::neutral());
    }

    #[test]
    fn test_sentiment_score_of_zero_renders_zero() {
        let (mut app, _cmd_rx) = ready_app();
        app.analyze_sentiment();

        app.apply_event(EstimateEvent::SentimentReady {
            seq: 1,
            reading: SentimentReading {
                label: "Negative".to_string(),
                score: 0.0,
            },
        });

        assert_eq!(app.results.gauge.score, 0.0);
        assert_eq!(gauge_angle(app.results.gauge.score), -90.0);
        assert_eq!(
            app.results.sentiment_line.as_deref(),
            Some("Negative (0.0% confidence)")
        );
    }

    #[test]
    fn test_reset_restores_documented_defaults() {
        let (mut app, _cmd_rx) = ready_app();
        app.area_input = "2500".to_string();
        app.horizon_input = "36".to_string();
        app.bedrooms = Some(3);
        app.commentary = "market looks hot".to_string();
        app.submit_estimate();
        app.apply_event(EstimateEvent::CurrentPrice { seq: 1, price: 85.5 });

        app.reset_form();

        assert_eq!(app.area_input, "1000");
        assert_eq!(app.horizon_input, "12");
        assert_eq!(app.bedrooms, None);
        assert_eq!(app.selected_location, None);
        assert!(app.commentary.is_empty());
        assert_eq!(app.results.current_price_text(), PLACEHOLDER);
        assert_eq!(app.results.composite_score_text(), PLACEHOLDER);
        assert_eq!(app.results.gauge, SentimentReading::neutral());
    }

    #[test]
    fn test_catalog_events_update_selector_state() {
        let (mut app, _cmd_rx) = test_app();
        assert_eq!(app.catalog, LocationCatalog::Loading);

        app.apply_event(EstimateEvent::LocationsUnavailable);
        assert_eq!(app.catalog, LocationCatalog::Unavailable);
    }
}
