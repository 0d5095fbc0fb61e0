//! Squat rep counting with depth check
//!
//! Tracks the left knee angle through stand → descent → rise. The turning
//! point is detected as a 5° rebound off the running minimum; depth is judged
//! against that minimum when the lifter is back above the stand threshold.

/// Knee angle above which the lifter counts as standing
pub const UP_THRESHOLD: f32 = 150.0;

/// Running minimum below this makes the rep a valid-depth squat
pub const VALID_DEPTH: f32 = 110.0;

/// Rebound above the running minimum that flips descent into rise
pub const RISE_TRIGGER_MARGIN: f32 = 5.0;

/// Diagnostic for a squat that never reached valid depth
pub const SHALLOW_SQUAT_ERROR: &str = "Squat troppo alto, scendi di più";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Standing,
    Descending,
    Rising,
}

/// Streaming rep counter for the squat
pub struct SquatMachine {
    phase: Phase,
    min_angle: f32,
    was_descending: bool,
    counted: bool,
    correct: u32,
    incomplete: u32,
    errors: Vec<String>,
}

impl SquatMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Standing,
            min_angle: 180.0,
            was_descending: false,
            counted: false,
            correct: 0,
            incomplete: 0,
            errors: Vec::new(),
        }
    }

    /// Feed one angle sample; frames without a sample are simply not fed
    pub fn advance(&mut self, angle: f32) {
        match self.phase {
            Phase::Standing => {
                if angle < UP_THRESHOLD {
                    self.phase = Phase::Descending;
                    self.min_angle = angle;
                    self.was_descending = true;
                    self.counted = false;
                }
            }
            Phase::Descending => {
                if angle < self.min_angle {
                    self.min_angle = angle;
                }
                if angle >= self.min_angle + RISE_TRIGGER_MARGIN {
                    self.phase = Phase::Rising;
                }
            }
            Phase::Rising => {
                if angle <= UP_THRESHOLD {
                    // Rearm while still below standing height
                    self.counted = false;
                } else if self.was_descending && !self.counted {
                    if self.min_angle < VALID_DEPTH {
                        self.correct += 1;
                    } else {
                        self.incomplete += 1;
                        self.errors.push(SHALLOW_SQUAT_ERROR.to_string());
                    }
                    self.counted = true;
                    self.was_descending = false;
                    self.phase = Phase::Standing;
                }
            }
        }
    }

    /// Final tally: (correct, incomplete, errors)
    pub fn finish(self) -> (u32, u32, Vec<String>) {
        (self.correct, self.incomplete, self.errors)
    }
}

impl Default for SquatMachine {
    fn default() -> Self {
        Self::new()
    }
}
