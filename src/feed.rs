//! Sensor feed abstraction.
//!
//! A feed is push-based: the caller hands `subscribe` a listener closure
//! and the feed invokes it once per reading until the returned
//! [`SubscriptionHandle`] is removed. The handle removes itself on drop,
//! so a forgotten subscription cannot leak a delivery task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::sample::LightSample;

/// Callback invoked once per delivered reading.
pub type Listener = Box<dyn FnMut(LightSample) + Send>;

/// A push-based source of light readings.
pub trait LightSensor: Send + Sync {
    /// Begin delivering readings to `listener`.
    ///
    /// Delivery continues until the returned handle is removed or
    /// dropped. Each call creates an independent subscription.
    fn subscribe(&self, listener: Listener) -> SubscriptionHandle;
}

/// Cancellation handle for one active subscription.
///
/// `remove` is idempotent; the handle also removes on drop.
#[derive(Debug)]
pub struct SubscriptionHandle {
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl SubscriptionHandle {
    /// Build a handle around a shared cancellation flag and the delivery
    /// task honoring it.
    pub fn new(cancelled: Arc<AtomicBool>, task: JoinHandle<()>) -> Self {
        Self {
            cancelled,
            task: Some(task),
        }
    }

    /// Stop delivery. Safe to call more than once.
    pub fn remove(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True once `remove` has been called (or the feed itself stopped).
    pub fn is_removed(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.remove();
    }
}
