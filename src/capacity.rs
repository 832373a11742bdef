//! Capacity input handling.
//!
//! The GUI lets the user type a new history capacity as free text. The
//! text is held here as pending state until an explicit commit; a commit
//! with anything other than a positive integer is discarded silently,
//! leaving the buffer untouched. No error feedback is shown for bad
//! input.

use tracing::debug;

use crate::buffer::SampleBuffer;

/// Pending capacity text plus its commit rule.
#[derive(Debug, Default)]
pub struct CapacityEditor {
    pending: String,
}

impl CapacityEditor {
    /// Create an editor pre-filled with the buffer's current capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: capacity.to_string(),
        }
    }

    /// The text currently held, uncommitted.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Mutable access for direct text-widget binding.
    pub fn pending_mut(&mut self) -> &mut String {
        &mut self.pending
    }

    /// Replace the pending text without committing.
    pub fn update_text(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Try to apply the pending text to the buffer.
    ///
    /// Leading and trailing whitespace is tolerated. Returns true when
    /// the capacity changed; non-integer text and values below 1 are
    /// rejected without touching the buffer or the pending text.
    pub fn commit(&mut self, buffer: &mut SampleBuffer) -> bool {
        let trimmed = self.pending.trim();
        match trimmed.parse::<usize>() {
            Ok(capacity) if capacity >= 1 => {
                // set_capacity only fails on zero, excluded above.
                let applied = buffer.set_capacity(capacity).is_ok();
                if applied {
                    debug!(capacity, "History capacity updated");
                }
                applied
            }
            _ => {
                debug!(input = %trimmed, "Discarding invalid capacity input");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::LightSample;

    fn filled_buffer() -> SampleBuffer {
        let mut buffer = SampleBuffer::new(3).unwrap();
        for v in [10.0, 20.0, 30.0] {
            buffer.push(LightSample::new(v));
        }
        buffer
    }

    #[test]
    fn test_new_prefills_current_capacity() {
        let editor = CapacityEditor::new(30);
        assert_eq!(editor.pending(), "30");
    }

    #[test]
    fn test_commit_valid_changes_capacity() {
        let mut buffer = filled_buffer();
        let mut editor = CapacityEditor::new(3);
        editor.update_text("2");
        assert!(editor.commit(&mut buffer));
        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_commit_tolerates_whitespace() {
        let mut buffer = filled_buffer();
        let mut editor = CapacityEditor::default();
        editor.update_text("  5 ");
        assert!(editor.commit(&mut buffer));
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn test_commit_rejects_zero() {
        let mut buffer = filled_buffer();
        let mut editor = CapacityEditor::default();
        editor.update_text("0");
        assert!(!editor.commit(&mut buffer));
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_commit_rejects_garbage() {
        let mut buffer = filled_buffer();
        let mut editor = CapacityEditor::default();
        for text in ["", "abc", "-4", "3.5", "1e3", "ten"] {
            editor.update_text(text);
            assert!(!editor.commit(&mut buffer), "accepted {:?}", text);
            assert_eq!(buffer.capacity(), 3);
        }
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_pending_survives_rejection() {
        let mut buffer = filled_buffer();
        let mut editor = CapacityEditor::default();
        editor.update_text("oops");
        editor.commit(&mut buffer);
        assert_eq!(editor.pending(), "oops");
    }
}
