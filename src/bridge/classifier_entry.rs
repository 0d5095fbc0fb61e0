//! Classifier integration - connects the mismatch CNN with the recording
//!
//! Manages the sequence buffer and exports its tensor for JS inference.
//! The actual CNN runs in JavaScript using onnxruntime-web.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analysis::FramePose;
use crate::classifier::{extract_frame_features, SequenceBuffer};

/// Classifier-side recording state
struct ClassifierState {
    buffer: SequenceBuffer,
    /// Whether the CNN is loaded (set by JS)
    model_ready: bool,
}

impl Default for ClassifierState {
    fn default() -> Self {
        Self {
            buffer: SequenceBuffer::new(),
            model_ready: false,
        }
    }
}

thread_local! {
    static CLASSIFIER_STATE: RefCell<ClassifierState> = RefCell::new(ClassifierState::default());
}

/// Called from JS once the CNN is loaded
#[wasm_bindgen]
pub fn set_classifier_ready() {
    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().model_ready = true;
    });
    web_sys::console::log_1(&"Exercise classifier ready".into());
}

/// Export the 240×3×18 input tensor for JS inference.
///
/// `None` until the recording is long enough and the model is loaded.
#[wasm_bindgen]
pub fn classifier_input() -> Option<Vec<f32>> {
    CLASSIFIER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        if state.model_ready {
            state.buffer.as_input()
        } else {
            None
        }
    })
}

/// Whether an input tensor can be exported right now
#[wasm_bindgen]
pub fn is_classifier_input_ready() -> bool {
    CLASSIFIER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        state.model_ready && state.buffer.is_ready()
    })
}

/// Feed one recorded frame into the sequence buffer (called from
/// `push_pose_frame`)
pub fn process_classifier_frame(pose: &FramePose) {
    CLASSIFIER_STATE.with(|state_cell| {
        state_cell
            .borrow_mut()
            .buffer
            .push(extract_frame_features(pose));
    });
}

/// Drop the buffered sequence (new recording)
pub fn reset_classifier_buffer() {
    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().buffer.clear();
    });
}
