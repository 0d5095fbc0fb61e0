//! Analysis result aggregate
//!
//! One value per analysis call, serialized as-is across the WASM boundary
//! for the recap screen.

use serde::{Deserialize, Serialize};

/// Outcome of analyzing one recorded set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Correct repetitions
    pub repetitions: u32,
    /// Incomplete or incorrect repetitions
    pub incomplete: u32,
    /// Human-readable diagnostics, one per flagged rep
    pub errors: Vec<String>,
    /// Every angle sample extracted, in frame order (debug/visualization)
    pub angles: Vec<f32>,
}

impl AnalysisResult {
    /// Result for input the analyzer refused to process (unrecognized
    /// exercise, mismatched recording). Zero counts, a single diagnostic.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            errors: vec![reason.into()],
            ..Self::default()
        }
    }

    /// Total attempted reps, correct and incomplete together
    pub fn total(&self) -> u32 {
        self.repetitions + self.incomplete
    }
}
