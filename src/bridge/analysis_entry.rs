//! Analysis entry point and configuration bridge
//!
//! `analyze_recording` is what the recording flow calls once the video is
//! done: mismatch pre-check first, then the rep analysis over the stored
//! trace. The result crosses the boundary as a serde-serialized object.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analysis::{analyze_named, AnalysisResult, AnalyzerConfig, Exercise};
use crate::classifier::last_prediction;

/// Diagnostic when the classifier says the recording is a different exercise
pub const MISMATCH_ERROR: &str =
    "Esercizio errato: hai eseguito un esercizio diverso da quello selezionato";

thread_local! {
    static CONFIG: RefCell<AnalyzerConfig> = RefCell::new(AnalyzerConfig::default());
}

/// Override the trim budgets from JS, e.g.
/// `{ bench_trim_secs: 2.5, deadlift_trim_secs: 1.5, squat_trim_secs: 0.0 }`
#[wasm_bindgen]
pub fn set_analyzer_config(value: JsValue) -> Result<(), JsValue> {
    let config: AnalyzerConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    CONFIG.with(|c| *c.borrow_mut() = config);
    Ok(())
}

/// Analyze the current recording for the selected exercise.
///
/// Always returns a well-formed result object: unknown exercise names and
/// classifier mismatches come back with zero counts and one diagnostic.
#[wasm_bindgen]
pub fn analyze_recording(exercise: &str) -> JsValue {
    let result = recording_result(exercise);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn recording_result(exercise: &str) -> AnalysisResult {
    // Pre-check: abort before the state machine when the recorded movement
    // does not match the selection. No prediction means no veto.
    if let (Some(kind), Some(prediction)) = (Exercise::parse(exercise), last_prediction()) {
        if !prediction.matches(kind) {
            return AnalysisResult::rejected(MISMATCH_ERROR);
        }
    }

    super::poses::with_recording(|frames, frame_rate| {
        CONFIG.with(|c| analyze_named(frames, exercise, frame_rate, &c.borrow()))
    })
}
