//! Deadlift rep counting with lockout check
//!
//! Tracks the right hip angle through setup → pull → lockout. A rep that
//! turns back down before reaching lockout is flagged, as is a lockout whose
//! descent never reached valid depth.

/// Hip angle below which the lifter has reached the bottom position
pub const VALID_DEPTH: f32 = 95.0;

/// Hip angle at or above which the lift counts as locked out
pub const LOCKOUT_THRESHOLD: f32 = 140.0;

/// Diagnostic for a lockout whose descent stayed above valid depth
pub const SHORT_PULL_ERROR: &str = "Deadlift troppo corto: scendi di più";

/// Diagnostic for turning back down before reaching lockout
pub const NO_LOCKOUT_ERROR: &str = "Non sei salito abbastanza";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Descending,
    Rising,
}

/// Streaming rep counter for the deadlift
pub struct DeadliftMachine {
    phase: Phase,
    min_angle: f32,
    has_reached_depth: bool,
    counted: bool,
    correct: u32,
    incomplete: u32,
    errors: Vec<String>,
}

impl DeadliftMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            min_angle: 180.0,
            has_reached_depth: false,
            counted: false,
            correct: 0,
            incomplete: 0,
            errors: Vec::new(),
        }
    }

    fn seed_descent(&mut self, angle: f32) {
        self.phase = Phase::Descending;
        self.min_angle = angle;
        self.has_reached_depth = true;
        self.counted = false;
    }

    /// Feed one angle sample; frames without a sample are simply not fed
    pub fn advance(&mut self, angle: f32) {
        match self.phase {
            Phase::Idle => {
                if angle < VALID_DEPTH {
                    self.seed_descent(angle);
                }
            }
            Phase::Descending => {
                if angle < self.min_angle {
                    self.min_angle = angle;
                }
                if angle >= VALID_DEPTH {
                    self.phase = Phase::Rising;
                }
            }
            Phase::Rising => {
                if angle >= LOCKOUT_THRESHOLD {
                    if self.has_reached_depth && !self.counted {
                        if self.min_angle < VALID_DEPTH {
                            self.correct += 1;
                        } else {
                            self.incomplete += 1;
                            self.errors.push(SHORT_PULL_ERROR.to_string());
                        }
                        self.counted = true;
                    }
                    self.phase = Phase::Idle;
                } else if angle < VALID_DEPTH {
                    // Turned back down without reaching lockout
                    if self.has_reached_depth && !self.counted {
                        self.incomplete += 1;
                        self.errors.push(NO_LOCKOUT_ERROR.to_string());
                    }
                    self.seed_descent(angle);
                }
                // Between valid depth and lockout: keep rising
            }
        }
    }

    /// Final tally: (correct, incomplete, errors). An unfinished rising phase
    /// at the last frame is silently dropped.
    pub fn finish(self) -> (u32, u32, Vec<String>) {
        (self.correct, self.incomplete, self.errors)
    }
}

impl Default for DeadliftMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(angles: &[f32]) -> (u32, u32, Vec<String>) {
        let mut machine = DeadliftMachine::new();
        for &angle in angles {
            machine.advance(angle);
        }
        machine.finish()
    }

    #[test]
    fn full_pull_counts_correct() {
        let (correct, incomplete, errors) = run(&[170.0, 90.0, 100.0, 145.0]);
        assert_eq!(correct, 1);
        assert_eq!(incomplete, 0);
        assert!(errors.is_empty());
    }

    #[test]
    fn redescent_before_lockout_is_incomplete() {
        // Rises out of the hole but drops back under depth before lockout
        let (correct, incomplete, errors) = run(&[170.0, 90.0, 110.0, 85.0, 100.0, 150.0]);
        assert_eq!(correct, 1);
        assert_eq!(incomplete, 1);
        assert_eq!(errors, vec![NO_LOCKOUT_ERROR.to_string()]);
    }

    #[test]
    fn unfinished_rise_at_trace_end_is_dropped() {
        let (correct, incomplete, _) = run(&[170.0, 90.0, 110.0, 120.0]);
        assert_eq!((correct, incomplete), (0, 0));
    }

    #[test]
    fn hovering_between_depth_and_lockout_stays_pending() {
        let (correct, incomplete, _) = run(&[170.0, 90.0, 110.0, 120.0, 130.0, 135.0]);
        assert_eq!((correct, incomplete), (0, 0));
    }

    #[test]
    fn two_clean_pulls() {
        let (correct, incomplete, _) =
            run(&[170.0, 90.0, 120.0, 145.0, 170.0, 88.0, 115.0, 150.0]);
        assert_eq!(correct, 2);
        assert_eq!(incomplete, 0);
    }

    #[test]
    fn one_error_string_per_incomplete_rep() {
        let trace = [
            170.0, 90.0, 110.0, 85.0, // incomplete (no lockout)
            100.0, 92.0, // incomplete again
            110.0, 145.0, // final clean lockout
        ];
        let (correct, incomplete, errors) = run(&trace);
        assert_eq!(correct, 1);
        assert_eq!(incomplete, 2);
        assert_eq!(errors.len(), 2);
    }
}
