//! Classifier module - exercise-mismatch verification
//!
//! Note: CNN inference runs in JavaScript using onnxruntime-web.
//! Rust handles feature extraction, sequence buffering, and the verdict.

mod buffer;
mod features;
mod model;

pub use buffer::{SequenceBuffer, INPUT_LEN, SEQUENCE_LEN};
pub use features::{extract_frame_features, FrameFeatures, CHANNELS, JOINTS};
pub use model::{
    clear_exercise_prediction, last_prediction, set_exercise_prediction, ExercisePrediction,
    EXERCISE_LABELS, MATCH_CONFIDENCE_THRESHOLD,
};
