//! Supported exercises
//!
//! Closed set of three lifts. Parsing accepts both the English names and the
//! Italian UI names the app has always used; anything else stays a plain
//! string and is rejected at the orchestrator boundary.

/// The three supported lifts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exercise {
    Bench,
    Squat,
    Deadlift,
}

impl Exercise {
    /// Case-insensitive parse; `None` for anything outside the closed set
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bench" | "panca" => Some(Exercise::Bench),
            "squat" => Some(Exercise::Squat),
            "deadlift" | "stacco" => Some(Exercise::Deadlift),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Bench => "bench",
            Exercise::Squat => "squat",
            Exercise::Deadlift => "deadlift",
        }
    }

    /// Label used by the exercise classifier's training data
    pub fn classifier_label(&self) -> &'static str {
        match self {
            Exercise::Bench => "panca",
            Exercise::Squat => "squat",
            Exercise::Deadlift => "stacco",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Exercise::parse("Bench"), Some(Exercise::Bench));
        assert_eq!(Exercise::parse("SQUAT"), Some(Exercise::Squat));
        assert_eq!(Exercise::parse("deadlift"), Some(Exercise::Deadlift));
    }

    #[test]
    fn parse_accepts_italian_names() {
        assert_eq!(Exercise::parse("Panca"), Some(Exercise::Bench));
        assert_eq!(Exercise::parse("Stacco"), Some(Exercise::Deadlift));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Exercise::parse("curl"), None);
        assert_eq!(Exercise::parse(""), None);
    }
}
