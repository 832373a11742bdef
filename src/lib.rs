//! `luxmon`
//!
//! A small ambient-light monitoring application. A push-based sensor feed
//! delivers illuminance readings (lux) at a fixed cadence; the application
//! keeps a bounded history of recent samples, shows the latest value, and
//! renders a scrolling chart.
//!
//! ## Architecture
//!
//! - [`feed::LightSensor`]: the feed interface; `subscribe` a listener,
//!   cancel through the returned [`feed::SubscriptionHandle`]
//! - [`sim::SimulatedLightSensor`]: the bundled feed implementation, a
//!   seeded simulation driven by a tokio interval
//! - [`buffer::SampleBuffer`]: bounded history with one-oldest eviction and
//!   a user-adjustable capacity
//! - [`controller::SubscriptionController`]: owns the single live
//!   subscription and forwards samples into the shared buffer
//! - [`capacity::CapacityEditor`]: pending-text capacity input with
//!   silent-reject commit
//! - [`gui::LuxApp`]: the eframe presentation layer
//!
//! Samples flow from the sensor feed through the controller into the
//! buffer, which the GUI renders read-only. The capacity editor mutates
//! the buffer independently of the feed path.

pub mod buffer;
pub mod capacity;
pub mod config;
pub mod controller;
pub mod error;
pub mod feed;
pub mod gui;
pub mod logging;
pub mod platform;
pub mod sample;
pub mod sim;

pub use buffer::SampleBuffer;
pub use capacity::CapacityEditor;
pub use config::AppConfig;
pub use controller::{SharedBuffer, SubscriptionController, SubscriptionState};
pub use error::{AppResult, LuxError};
pub use feed::{LightSensor, Listener, SubscriptionHandle};
pub use platform::SensorAvailability;
pub use sample::LightSample;
pub use sim::SimulatedLightSensor;
