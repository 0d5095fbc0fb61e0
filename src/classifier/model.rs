//! Exercise classifier result handling
//!
//! NOTE: The 3D-CNN itself runs in JavaScript (onnxruntime-web); Rust owns
//! the input tensor and the verdict. JS calls `set_exercise_prediction()`
//! with the winning label once inference finishes.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analysis::Exercise;

/// Exercise labels in training order
pub const EXERCISE_LABELS: [&str; 3] = ["panca", "squat", "stacco"];

/// Predictions below this confidence are treated as "not the selected
/// exercise"
pub const MATCH_CONFIDENCE_THRESHOLD: f32 = 0.1;

/// Classifier output as reported by JS
#[derive(Clone, Debug, PartialEq)]
pub struct ExercisePrediction {
    pub label: String,
    pub confidence: f32,
}

impl ExercisePrediction {
    /// True when the prediction confirms the user's selection
    pub fn matches(&self, selected: Exercise) -> bool {
        self.confidence >= MATCH_CONFIDENCE_THRESHOLD
            && Exercise::parse(&self.label) == Some(selected)
    }
}

// Thread-local storage for the last prediction (WASM is single-threaded)
thread_local! {
    static LAST_PREDICTION: RefCell<Option<ExercisePrediction>> = RefCell::new(None);
}

/// Called from JavaScript with the classification result
#[wasm_bindgen]
pub fn set_exercise_prediction(label: &str, confidence: f32) {
    LAST_PREDICTION.with(|p| {
        *p.borrow_mut() = Some(ExercisePrediction {
            label: label.to_string(),
            confidence,
        });
    });
}

/// Forget the last prediction (new recording)
#[wasm_bindgen]
pub fn clear_exercise_prediction() {
    LAST_PREDICTION.with(|p| {
        *p.borrow_mut() = None;
    });
}

/// Last prediction reported by JS, if any
pub fn last_prediction() -> Option<ExercisePrediction> {
    LAST_PREDICTION.with(|p| p.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_label_confirms_selection() {
        let prediction = ExercisePrediction {
            label: "squat".to_string(),
            confidence: 0.8,
        };
        assert!(prediction.matches(Exercise::Squat));
        assert!(!prediction.matches(Exercise::Bench));
    }

    #[test]
    fn italian_labels_match_their_exercise() {
        let prediction = ExercisePrediction {
            label: "Panca".to_string(),
            confidence: 0.9,
        };
        assert!(prediction.matches(Exercise::Bench));
    }

    #[test]
    fn low_confidence_is_a_mismatch() {
        let prediction = ExercisePrediction {
            label: "stacco".to_string(),
            confidence: 0.05,
        };
        assert!(!prediction.matches(Exercise::Deadlift));
    }
}
