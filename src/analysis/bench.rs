//! Bench press rep counting
//!
//! Tracks the averaged elbow angle through lockout → descent → press.
//! Depth quality is not judged here: elbow keypoints from a behind-the-bench
//! camera are too noisy for a reliable "too shallow" call, so the bench only
//! ever reports correct reps.

/// Elbow angle above which the arms count as locked out
pub const LOCKOUT_THRESHOLD: f32 = 145.0;

/// Elbow angle at or below which the bar has reached the chest
pub const BOTTOM_THRESHOLD: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    LockedOut,
    Descending,
    Rising,
}

/// Streaming rep counter for the bench press
pub struct BenchMachine {
    phase: Phase,
    min_angle: f32,
    correct: u32,
}

impl BenchMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::LockedOut,
            min_angle: 180.0,
            correct: 0,
        }
    }

    /// Feed one angle sample; frames without a sample are simply not fed
    pub fn advance(&mut self, angle: f32) {
        match self.phase {
            Phase::LockedOut => {
                if angle < LOCKOUT_THRESHOLD {
                    self.phase = Phase::Descending;
                    self.min_angle = angle;
                }
            }
            Phase::Descending => {
                if angle < self.min_angle {
                    self.min_angle = angle;
                }
                if angle <= BOTTOM_THRESHOLD {
                    self.phase = Phase::Rising;
                }
            }
            Phase::Rising => {
                if angle > LOCKOUT_THRESHOLD {
                    self.correct += 1;
                    self.min_angle = 180.0;
                    self.phase = Phase::LockedOut;
                }
            }
        }
    }

    /// Final tally: (correct, incomplete, errors). A cycle still in flight at
    /// the end of the trace is dropped, not flushed.
    pub fn finish(self) -> (u32, u32, Vec<String>) {
        (self.correct, 0, Vec::new())
    }
}

impl Default for BenchMachine {
    fn default() -> Self {
        Self::new()
    }
}
