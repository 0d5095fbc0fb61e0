//! Analysis core - rep counting from recorded pose traces
//!
//! Re-exports only. All logic in submodules.

mod analyzer;
mod angles;
mod bench;
mod deadlift;
mod exercise;
mod pose;
mod result;
mod squat;
mod trim;

pub use analyzer::{analyze, analyze_named, AnalyzerConfig, UNRECOGNIZED_EXERCISE_ERROR};
pub use angles::{angle_between, arm_angle, hip_angle, knee_angle, CONFIDENCE_THRESHOLD};
pub use bench::BenchMachine;
pub use deadlift::DeadliftMachine;
pub use exercise::Exercise;
pub use pose::{FramePose, Joint, Keypoint};
pub use result::AnalysisResult;
pub use squat::SquatMachine;
pub use trim::trim_stop_gesture;
