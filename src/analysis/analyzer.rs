//! Analysis orchestrator
//!
//! Single entry point for the recorded pose trace: trim the stop gesture,
//! extract the exercise's joint angle per frame, run the matching rep
//! machine. Pure and synchronous; the same input always produces the same
//! result.

use serde::{Deserialize, Serialize};

use super::angles::{arm_angle, hip_angle, knee_angle};
use super::bench::BenchMachine;
use super::deadlift::DeadliftMachine;
use super::exercise::Exercise;
use super::pose::FramePose;
use super::result::AnalysisResult;
use super::squat::SquatMachine;
use super::trim::trim_stop_gesture;

/// Diagnostic for an exercise name outside the supported set
pub const UNRECOGNIZED_EXERCISE_ERROR: &str = "Esercizio non riconosciuto";

/// Per-exercise stop-gesture trim budgets, in seconds.
///
/// The squat historically ran untrimmed; that asymmetry is kept as the
/// default but is overridable from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub bench_trim_secs: f32,
    pub deadlift_trim_secs: f32,
    pub squat_trim_secs: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            bench_trim_secs: 2.5,
            deadlift_trim_secs: 1.5,
            squat_trim_secs: 0.0,
        }
    }
}

impl AnalyzerConfig {
    fn trim_secs(&self, exercise: Exercise) -> f32 {
        match exercise {
            Exercise::Bench => self.bench_trim_secs,
            Exercise::Deadlift => self.deadlift_trim_secs,
            Exercise::Squat => self.squat_trim_secs,
        }
    }
}

/// Analyze a recorded pose trace for the given exercise.
///
/// Frames whose joints fail the confidence gate contribute no angle sample
/// and trigger no transition; however sparse the input, the result is
/// well-formed.
pub fn analyze(
    frames: &[FramePose],
    exercise: Exercise,
    frame_rate: f32,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    let effective = trim_stop_gesture(frames, frame_rate, config.trim_secs(exercise));

    let extract: fn(&FramePose) -> Option<f32> = match exercise {
        Exercise::Bench => arm_angle,
        Exercise::Squat => knee_angle,
        Exercise::Deadlift => hip_angle,
    };
    let angles: Vec<f32> = effective.iter().filter_map(extract).collect();

    let (repetitions, incomplete, errors) = match exercise {
        Exercise::Bench => {
            let mut machine = BenchMachine::new();
            angles.iter().for_each(|&a| machine.advance(a));
            machine.finish()
        }
        Exercise::Squat => {
            let mut machine = SquatMachine::new();
            angles.iter().for_each(|&a| machine.advance(a));
            machine.finish()
        }
        Exercise::Deadlift => {
            let mut machine = DeadliftMachine::new();
            angles.iter().for_each(|&a| machine.advance(a));
            machine.finish()
        }
    };

    AnalysisResult {
        repetitions,
        incomplete,
        errors,
        angles,
    }
}

/// Analyze with a caller-supplied exercise name.
///
/// An unrecognized name is a normal result, not an error: the recap screen
/// still needs something to render.
pub fn analyze_named(
    frames: &[FramePose],
    exercise: &str,
    frame_rate: f32,
    config: &AnalyzerConfig,
) -> AnalysisResult {
    match Exercise::parse(exercise) {
        Some(kind) => analyze(frames, kind, frame_rate, config),
        None => AnalysisResult::rejected(UNRECOGNIZED_EXERCISE_ERROR),
    }
}
