//! Simulated light sensor.
//!
//! Produces readings on a fixed tokio interval: a base illuminance plus
//! uniform noise, clamped to non-negative. With a seed the sequence is
//! reproducible, which the tests rely on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::config::SensorConfig;
use crate::feed::{LightSensor, Listener, SubscriptionHandle};
use crate::sample::LightSample;

/// Seeded random source shared by all subscriptions of one sensor.
#[derive(Debug)]
struct SensorRng {
    inner: Mutex<ChaCha8Rng>,
}

impl SensorRng {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            inner: Mutex::new(rng),
        }
    }

    fn noise(&self, amplitude: f64) -> f64 {
        self.inner.lock().gen_range(-amplitude..=amplitude)
    }
}

/// A feed implementation that synthesizes readings.
#[derive(Debug)]
pub struct SimulatedLightSensor {
    sample_rate_hz: f64,
    base_lux: f64,
    noise_lux: f64,
    rng: Arc<SensorRng>,
}

impl SimulatedLightSensor {
    /// Create a sensor with typical indoor lighting defaults.
    pub fn new() -> Self {
        Self {
            sample_rate_hz: 2.0,
            base_lux: 400.0,
            noise_lux: 25.0,
            rng: Arc::new(SensorRng::new(None)),
        }
    }

    /// Set the delivery rate in readings per second.
    pub fn with_sample_rate_hz(mut self, rate: f64) -> Self {
        self.sample_rate_hz = rate;
        self
    }

    /// Set the mean illuminance of the synthesized signal.
    pub fn with_base_lux(mut self, base: f64) -> Self {
        self.base_lux = base;
        self
    }

    /// Set the uniform noise amplitude around the base.
    pub fn with_noise_lux(mut self, noise: f64) -> Self {
        self.noise_lux = noise;
        self
    }

    /// Seed the noise source for a reproducible sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(SensorRng::new(Some(seed)));
        self
    }

    /// Build a sensor from the `[sensor]` configuration section.
    pub fn from_config(config: &SensorConfig) -> Self {
        let mut sensor = Self::new()
            .with_sample_rate_hz(config.sample_rate_hz)
            .with_base_lux(config.base_lux)
            .with_noise_lux(config.noise_lux);
        if let Some(seed) = config.seed {
            sensor = sensor.with_seed(seed);
        }
        sensor
    }

}

fn synthesize(rng: &SensorRng, base_lux: f64, noise_lux: f64) -> f64 {
    let noise = if noise_lux > 0.0 {
        rng.noise(noise_lux)
    } else {
        0.0
    };
    (base_lux + noise).max(0.0)
}

impl Default for SimulatedLightSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl LightSensor for SimulatedLightSensor {
    fn subscribe(&self, mut listener: Listener) -> SubscriptionHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_task = Arc::clone(&cancelled);
        let period = std::time::Duration::from_secs_f64(1.0 / self.sample_rate_hz);

        let rng = Arc::clone(&self.rng);
        let base_lux = self.base_lux;
        let noise_lux = self.noise_lux;

        debug!(
            rate_hz = self.sample_rate_hz,
            base_lux, noise_lux, "Starting simulated sensor delivery"
        );

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if cancelled_task.load(Ordering::SeqCst) {
                    break;
                }
                listener(LightSample::new(synthesize(&rng, base_lux, noise_lux)));
            }
        });

        SubscriptionHandle::new(cancelled, task)
    }
}
