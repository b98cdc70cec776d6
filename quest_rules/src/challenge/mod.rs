//! Challenge definitions: the static templates and the per-round values built from them.

mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

/// What a challenge is testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Real-world magnitude comparisons.
    Scale,
    /// Intuition about growth, probability, information.
    Conceptual,
    /// Platform feature questions, served on a fixed cadence.
    Feature,
}

/// A question as it sits in the static tables.
///
/// Closeness is data rather than behavior: `close_indices` lists the wrong
/// options that still earn the reduced "close" deduction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChallengeTemplate {
    pub key: &'static str,
    pub story: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
    pub explanation: &'static str,
    pub fun_fact: &'static str,
    pub category: Category,
    pub close_indices: &'static [usize],
}

impl ChallengeTemplate {
    /// Build a playable challenge with `prefix` joined in front of the story.
    pub fn instantiate(&self, prefix: &str) -> Challenge {
        Challenge {
            key: self.key.to_string(),
            story: format!("{} {}", prefix, self.story),
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_index: self.correct_index,
            explanation: self.explanation.to_string(),
            fun_fact: self.fun_fact.to_string(),
            category: self.category,
            close_indices: self.close_indices.to_vec(),
        }
    }
}

/// One round's question, with genre narrative already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Key of the template this was built from.
    pub key: String,
    pub story: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub fun_fact: String,
    pub category: Category,
    #[serde(default)]
    pub close_indices: Vec<usize>,
}

impl Challenge {
    /// Whether `selected` is listed as a near miss.
    ///
    /// This says nothing about correctness; the correct index is never close.
    pub fn is_close(&self, selected: usize) -> bool {
        self.close_indices.contains(&selected)
    }

    /// Whether `selected` is the right answer.
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    /// Letter label for an option ("A" for 0, "B" for 1, ...).
    pub fn option_label(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_prefixes_story() {
        let template = &SCALE_CHALLENGES[0];
        let challenge = template.instantiate("The caverns shimmer...");

        assert!(challenge.story.starts_with("The caverns shimmer... "));
        assert!(challenge.story.ends_with(template.story));
        assert_eq!(challenge.options.len(), 4);
        assert_eq!(challenge.key, template.key);
    }

    #[test]
    fn test_closeness_is_declarative() {
        let challenge = SCALE_CHALLENGES[0].instantiate("");
        assert!(challenge.is_correct(1));
        assert!(challenge.is_close(0));
        assert!(challenge.is_close(2));
        assert!(!challenge.is_close(3));
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(Challenge::option_label(0), 'A');
        assert_eq!(Challenge::option_label(3), 'D');
    }

    #[test]
    fn test_challenge_survives_json() {
        let challenge = CONCEPTUAL_CHALLENGES[4].instantiate("Lord Blackwood's study...");
        let json = serde_json::to_string(&challenge).unwrap();
        let back: Challenge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, challenge);
        assert!(json.contains("\"category\":\"conceptual\""));
    }
}
