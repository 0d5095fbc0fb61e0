//! Pose recording storage and JS bridge
//!
//! Receives per-frame keypoints from the JavaScript pose detector and
//! accumulates the trace until the recording ends and analysis is requested.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analysis::{FramePose, Joint};

/// Flat values per frame on the wire: 18 joints × (x, y, confidence)
pub const WIRE_FRAME_LEN: usize = Joint::COUNT * 3;

/// Frame rate assumed until the caller reports the real one
const DEFAULT_FRAME_RATE: f32 = 30.0;

/// Current recording: pose trace plus the video's frame rate
struct RecordingStore {
    frames: Vec<FramePose>,
    frame_rate: f32,
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static RECORDING: RefCell<RecordingStore> = RefCell::new(RecordingStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a fresh recording at the given frame rate.
///
/// Clears the pose trace, the classifier buffer, and any stale prediction.
#[wasm_bindgen]
pub fn begin_recording(frame_rate: f32) {
    let frame_rate = if frame_rate > 0.0 {
        frame_rate
    } else {
        DEFAULT_FRAME_RATE
    };

    RECORDING.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.frames.clear();
        store.frame_rate = frame_rate;
    });
    super::classifier_entry::reset_classifier_buffer();
    crate::classifier::clear_exercise_prediction();
}

/// Called from JavaScript with one frame's flat keypoint array (54 values).
///
/// Undetected joints arrive zeroed; a frame of the wrong length is dropped
/// with a console warning.
#[wasm_bindgen]
pub fn push_pose_frame(data: &[f32]) {
    let Some(pose) = FramePose::from_flat(data) else {
        web_sys::console::warn_1(
            &format!(
                "Invalid pose frame length: {} (expected {})",
                data.len(),
                WIRE_FRAME_LEN
            )
            .into(),
        );
        return;
    };

    super::classifier_entry::process_classifier_frame(&pose);
    RECORDING.with(|store_cell| {
        store_cell.borrow_mut().frames.push(pose);
    });
}

/// Number of frames recorded so far
#[wasm_bindgen]
pub fn recorded_frames() -> usize {
    RECORDING.with(|store_cell| store_cell.borrow().frames.len())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Run `f` against the current recording
pub fn with_recording<R>(f: impl FnOnce(&[FramePose], f32) -> R) -> R {
    RECORDING.with(|store_cell| {
        let store = store_cell.borrow();
        f(&store.frames, store.frame_rate)
    })
}
