//! Stop-gesture trimming
//!
//! The operator ends the recording with a stop gesture (lowering the arms,
//! standing up) that looks exactly like another repetition. The trailing
//! seconds of the trace are dropped before any angle extraction.

use super::pose::FramePose;

/// Drop the last `round(frame_rate * seconds)` frames of the trace.
///
/// Returns an empty slice when the drop count reaches the trace length.
pub fn trim_stop_gesture(frames: &[FramePose], frame_rate: f32, seconds: f32) -> &[FramePose] {
    let drop = (frame_rate * seconds.max(0.0)).round() as usize;
    let keep = frames.len().saturating_sub(drop);
    &frames[..keep]
}
