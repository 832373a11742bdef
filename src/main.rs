//! Entry point for luxmon.
//!
//! Loads configuration, initializes tracing, stands up a tokio runtime
//! for the sensor delivery task, and hands the window to eframe on the
//! main thread. When the sensor is available the subscription starts
//! immediately so the chart fills without user action.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use parking_lot::RwLock;
use tracing::info;

use luxmon::buffer::SampleBuffer;
use luxmon::config::AppConfig;
use luxmon::controller::SubscriptionController;
use luxmon::gui::LuxApp;
use luxmon::logging;
use luxmon::platform::SensorAvailability;
use luxmon::sim::SimulatedLightSensor;

#[derive(Parser)]
#[command(name = "luxmon")]
#[command(about = "Ambient light monitor with a live history chart", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config/config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    config.validate()?;
    logging::init_from_config(&config)?;

    info!(name = %config.application.name, "Starting up");

    // eframe needs the main thread; the runtime guard lets the sensor
    // spawn its delivery task from here.
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let availability = SensorAvailability::detect(&config);
    let buffer = Arc::new(RwLock::new(SampleBuffer::new(
        config.display.history_capacity,
    )?));
    let sensor = Arc::new(SimulatedLightSensor::from_config(&config.sensor));
    let mut controller = SubscriptionController::new(sensor, buffer);

    if availability.is_available() {
        controller.start();
    } else {
        info!("Sensor unavailable, monitoring disabled");
    }

    let app = LuxApp::new(controller, availability, config.sensor.sample_rate_hz);
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &config.application.name,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("GUI error: {}", e))
}
