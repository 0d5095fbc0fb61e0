//! Sequence buffer for exercise classification
//!
//! The CNN consumes a fixed 240×3×18 tensor spanning the whole recording.
//! Frames accumulate here during capture; on export the full sequence is
//! resampled evenly down (or up) to exactly 240 frames.

use super::features::{FrameFeatures, CHANNELS, JOINTS};

/// Number of frames in the classifier input tensor
pub const SEQUENCE_LEN: usize = 240;

/// Floats in the exported tensor
pub const INPUT_LEN: usize = SEQUENCE_LEN * CHANNELS * JOINTS;

/// Grow-only buffer of per-frame feature blocks
pub struct SequenceBuffer {
    frames: Vec<FrameFeatures>,
}

impl SequenceBuffer {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Append one frame's features
    pub fn push(&mut self, features: FrameFeatures) {
        self.frames.push(features);
    }

    /// True once the recording is long enough to feed the CNN
    pub fn is_ready(&self) -> bool {
        self.frames.len() >= SEQUENCE_LEN
    }

    /// Recorded frame count
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the classifier input tensor, flat in frame-major order:
    /// `value(i, j, k) = out[i * 3 * 18 + j * 18 + k]`.
    ///
    /// The recording is sampled at evenly spaced indices so the 240 exported
    /// frames span the whole set. `None` until [`SequenceBuffer::is_ready`].
    pub fn as_input(&self) -> Option<Vec<f32>> {
        if !self.is_ready() {
            return None;
        }

        let mut out = Vec::with_capacity(INPUT_LEN);
        for i in 0..SEQUENCE_LEN {
            let src = i * self.frames.len() / SEQUENCE_LEN;
            for row in &self.frames[src] {
                out.extend_from_slice(row);
            }
        }
        Some(out)
    }

    /// Drop all recorded frames (new recording)
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Default for SequenceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::features::empty_frame_features;

    fn marked_frame(value: f32) -> FrameFeatures {
        let mut features = empty_frame_features();
        features[0][0] = value;
        features
    }

    #[test]
    fn not_ready_until_sequence_len() {
        let mut buffer = SequenceBuffer::new();
        for i in 0..SEQUENCE_LEN - 1 {
            buffer.push(marked_frame(i as f32));
        }
        assert!(!buffer.is_ready());
        assert!(buffer.as_input().is_none());

        buffer.push(marked_frame(0.0));
        assert!(buffer.is_ready());
    }

    #[test]
    fn exact_length_exports_identity() {
        let mut buffer = SequenceBuffer::new();
        for i in 0..SEQUENCE_LEN {
            buffer.push(marked_frame(i as f32));
        }

        let input = buffer.as_input().unwrap();
        assert_eq!(input.len(), INPUT_LEN);
        // Frame i's x-row starts at i * 3 * 18; joint 0 carries the marker
        assert_eq!(input[0], 0.0);
        assert_eq!(input[5 * CHANNELS * JOINTS], 5.0);
        assert_eq!(input[(SEQUENCE_LEN - 1) * CHANNELS * JOINTS], 239.0);
    }

    #[test]
    fn longer_recordings_are_resampled_evenly() {
        let mut buffer = SequenceBuffer::new();
        for i in 0..SEQUENCE_LEN * 2 {
            buffer.push(marked_frame(i as f32));
        }

        let input = buffer.as_input().unwrap();
        assert_eq!(input.len(), INPUT_LEN);
        // Every second source frame survives
        assert_eq!(input[0], 0.0);
        assert_eq!(input[CHANNELS * JOINTS], 2.0);
        assert_eq!(input[(SEQUENCE_LEN - 1) * CHANNELS * JOINTS], 478.0);
    }

    #[test]
    fn clear_resets_readiness() {
        let mut buffer = SequenceBuffer::new();
        for _ in 0..SEQUENCE_LEN {
            buffer.push(empty_frame_features());
        }
        buffer.clear();
        assert_eq!(buffer.frame_count(), 0);
        assert!(!buffer.is_ready());
    }
}
