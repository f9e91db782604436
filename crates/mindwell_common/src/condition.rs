//! Symptom text to condition classification
//!
//! Ordered keyword rules over the lower-cased symptom description, first match
//! wins. The precedence (depression, then anxiety, then sleep) matters: a text
//! mentioning both sadness and panic classifies as depression.

/// The dialogue's derived classification of the user's symptom description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Depression,
    Anxiety,
    SleepIssues,
    General,
}

/// Keyword rules in precedence order.
const RULES: &[(&[&str], Condition)] = &[
    (&["low mood", "sadness", "hopeless"], Condition::Depression),
    (&["worry", "anxious", "panic"], Condition::Anxiety),
    (&["sleep", "insomnia"], Condition::SleepIssues),
];

impl Condition {
    /// Classify a free-text symptom description.
    pub fn classify(symptoms: &str) -> Self {
        let lower = symptoms.to_lowercase();
        for (keywords, condition) in RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return *condition;
            }
        }
        Condition::General
    }
}
