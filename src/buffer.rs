//! Bounded sample history.
//!
//! `SampleBuffer` keeps the most recent readings in arrival order, up to a
//! capacity the user can change at runtime. When a push arrives at a full
//! buffer, exactly one sample is evicted from the oldest end, so length
//! never exceeds capacity. Shrinking the capacity below the current length
//! truncates from the oldest end immediately.

use std::collections::VecDeque;

use crate::error::{AppResult, LuxError};
use crate::sample::LightSample;

/// Default history size when no configuration overrides it.
pub const DEFAULT_CAPACITY: usize = 30;

/// A bounded FIFO of light samples, newest at the back.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<LightSample>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`LuxError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> AppResult<Self> {
        if capacity == 0 {
            return Err(LuxError::InvalidCapacity(capacity));
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a sample, evicting the single oldest entry if full.
    pub fn push(&mut self, sample: LightSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Change the capacity bound.
    ///
    /// Shrinking below the current length discards the oldest samples
    /// until the buffer fits. Growing never discards and leaves existing
    /// contents untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LuxError::InvalidCapacity`] if `capacity` is zero; the
    /// buffer is left unchanged.
    pub fn set_capacity(&mut self, capacity: usize) -> AppResult<()> {
        if capacity == 0 {
            return Err(LuxError::InvalidCapacity(capacity));
        }
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Remove all samples. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples in arrival order, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &LightSample> {
        self.samples.iter()
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<&LightSample> {
        self.samples.back()
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples are held.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The current capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_values(buffer: &mut SampleBuffer, values: &[f64]) {
        for &v in values {
            buffer.push(LightSample::new(v));
        }
    }

    fn contents(buffer: &SampleBuffer) -> Vec<f64> {
        buffer.samples().map(|s| s.illuminance).collect()
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert!(matches!(
            SampleBuffer::new(0),
            Err(LuxError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_default_capacity() {
        let buffer = SampleBuffer::default();
        assert_eq!(buffer.capacity(), DEFAULT_CAPACITY);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_push_preserves_arrival_order() {
        let mut buffer = SampleBuffer::new(5).unwrap();
        push_values(&mut buffer, &[1.0, 2.0, 3.0]);
        assert_eq!(contents(&buffer), vec![1.0, 2.0, 3.0]);
        assert_eq!(buffer.latest().unwrap().illuminance, 3.0);
    }

    #[test]
    fn test_push_at_capacity_evicts_one_oldest() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        push_values(&mut buffer, &[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(contents(&buffer), vec![20.0, 30.0, 40.0]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut buffer = SampleBuffer::new(4).unwrap();
        for i in 0..100 {
            buffer.push(LightSample::new(f64::from(i)));
            assert!(buffer.len() <= buffer.capacity());
        }
        assert_eq!(contents(&buffer), vec![96.0, 97.0, 98.0, 99.0]);
    }

    #[test]
    fn test_shrink_truncates_oldest() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        push_values(&mut buffer, &[10.0, 20.0, 30.0, 40.0]);
        buffer.set_capacity(2).unwrap();
        assert_eq!(contents(&buffer), vec![30.0, 40.0]);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn test_grow_keeps_contents() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        push_values(&mut buffer, &[10.0, 20.0, 30.0, 40.0]);
        buffer.set_capacity(2).unwrap();
        buffer.set_capacity(5).unwrap();
        assert_eq!(contents(&buffer), vec![30.0, 40.0]);
        assert_eq!(buffer.capacity(), 5);
        // Room for three more before eviction resumes.
        push_values(&mut buffer, &[50.0, 60.0, 70.0]);
        assert_eq!(contents(&buffer), vec![30.0, 40.0, 50.0, 60.0, 70.0]);
    }

    #[test]
    fn test_set_capacity_zero_rejected_and_unchanged() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        push_values(&mut buffer, &[1.0, 2.0]);
        assert!(buffer.set_capacity(0).is_err());
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(contents(&buffer), vec![1.0, 2.0]);
    }

    #[test]
    fn test_set_capacity_equal_to_len_is_noop_on_contents() {
        let mut buffer = SampleBuffer::new(5).unwrap();
        push_values(&mut buffer, &[1.0, 2.0, 3.0]);
        buffer.set_capacity(3).unwrap();
        assert_eq!(contents(&buffer), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_capacity_one_keeps_only_latest() {
        let mut buffer = SampleBuffer::new(1).unwrap();
        push_values(&mut buffer, &[10.0, 20.0, 30.0]);
        assert_eq!(contents(&buffer), vec![30.0]);
    }

    #[test]
    fn test_clear_empties_but_keeps_capacity() {
        let mut buffer = SampleBuffer::new(3).unwrap();
        push_values(&mut buffer, &[1.0, 2.0, 3.0]);
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.latest().is_none());
        assert_eq!(buffer.capacity(), 3);
        // Still usable after clear.
        buffer.push(LightSample::new(9.0));
        assert_eq!(contents(&buffer), vec![9.0]);
    }
}
