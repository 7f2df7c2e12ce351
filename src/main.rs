use homecast::application::app::EstimatorApp;
use homecast::application::client::PredictorClient;
use homecast::application::estimator::run_worker;
use homecast::config::Config;
use homecast::infrastructure::api::PredictionApiClient;
use homecast::interfaces::design_system::DesignSystem;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).trim_end().to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Create Log Channel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Homecast...");

    let config = Config::from_env()?;
    info!("Prediction service: {}", config.api_base_url);

    // 3. Worker channels: commands in (tokio mpsc), events out (crossbeam)
    let (cmd_tx, cmd_rx) = tokio::sync::mpsc::channel(16);
    let (event_tx, event_rx) = crossbeam_channel::unbounded();

    // 4. Background Tokio runtime hosting the estimator worker
    let worker_config = config.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        rt.block_on(async move {
            info!("Background runtime started.");

            let provider = match PredictionApiClient::new(
                worker_config.api_base_url.clone(),
                worker_config.request_timeout_secs,
            ) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::error!("Failed to build prediction client: {:#}", e);
                    return;
                }
            };

            run_worker(provider, cmd_rx, event_tx).await;
        });
    });

    // 5. Build the app and run the UI (blocks the main thread)
    let client = PredictorClient::new(cmd_tx, event_rx, log_rx);
    let app = EstimatorApp::new(client, &config);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_title("Homecast"),
        ..Default::default()
    };

    eframe::run_native(
        "Homecast",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
