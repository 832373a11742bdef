//! Subscription lifecycle.
//!
//! `SubscriptionController` owns at most one live subscription to the
//! sensor feed and routes delivered samples into the shared buffer. The
//! state machine has two states, `Stopped` and `Active`; `toggle` moves
//! between them and `Drop` guarantees the subscription is released.
//!
//! Stopping is synchronous with respect to the buffer: once `stop`
//! returns, no further sample from the old subscription can appear in
//! the buffer. The delivery task and `stop` both take the buffer write
//! lock, and the stop gate is flipped while `stop` holds it, so a
//! listener that wins the race completes its push before the clear and
//! one that loses sees the gate and drops the sample.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::buffer::SampleBuffer;
use crate::feed::{LightSensor, SubscriptionHandle};

/// Buffer shared between the delivery task and the GUI thread.
pub type SharedBuffer = Arc<RwLock<SampleBuffer>>;

/// Whether the controller currently holds a live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// No subscription; the buffer is not being fed.
    Stopped,
    /// One subscription is live and feeding the buffer.
    Active,
}

struct ActiveSubscription {
    handle: SubscriptionHandle,
    gate: Arc<AtomicBool>,
}

/// Owns the single feed subscription and the buffer it fills.
pub struct SubscriptionController {
    sensor: Arc<dyn LightSensor>,
    buffer: SharedBuffer,
    active: Option<ActiveSubscription>,
}

impl SubscriptionController {
    /// Create a stopped controller over the given sensor and buffer.
    pub fn new(sensor: Arc<dyn LightSensor>, buffer: SharedBuffer) -> Self {
        Self {
            sensor,
            buffer,
            active: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SubscriptionState {
        if self.active.is_some() {
            SubscriptionState::Active
        } else {
            SubscriptionState::Stopped
        }
    }

    /// The buffer this controller feeds.
    pub fn buffer(&self) -> &SharedBuffer {
        &self.buffer
    }

    /// Subscribe and start feeding the buffer. No-op when already active.
    pub fn start(&mut self) {
        if self.active.is_some() {
            debug!("Start requested while already active, ignoring");
            return;
        }

        let gate = Arc::new(AtomicBool::new(false));
        let gate_listener = Arc::clone(&gate);
        let buffer = Arc::clone(&self.buffer);

        let handle = self.sensor.subscribe(Box::new(move |sample| {
            let mut buf = buffer.write();
            // Checked under the lock so a concurrent stop() is final.
            if gate_listener.load(Ordering::SeqCst) {
                return;
            }
            buf.push(sample);
        }));

        self.active = Some(ActiveSubscription { handle, gate });
        info!("Sensor subscription started");
    }

    /// Unsubscribe and clear the history. No-op when already stopped.
    ///
    /// The buffer is guaranteed empty of old-subscription samples when
    /// this returns.
    pub fn stop(&mut self) {
        let Some(mut active) = self.active.take() else {
            debug!("Stop requested while already stopped, ignoring");
            return;
        };

        {
            let mut buf = self.buffer.write();
            active.gate.store(true, Ordering::SeqCst);
            buf.clear();
        }
        active.handle.remove();
        info!("Sensor subscription stopped, history cleared");
    }

    /// Flip between `Stopped` and `Active`.
    pub fn toggle(&mut self) {
        match self.state() {
            SubscriptionState::Stopped => self.start(),
            SubscriptionState::Active => self.stop(),
        }
    }
}

impl Drop for SubscriptionController {
    fn drop(&mut self) {
        self.stop();
    }
}
