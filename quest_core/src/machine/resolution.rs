//! The outcome of a single answer.

use quest_rules::{Challenge, Verdict};
use serde::{Deserialize, Serialize};

use crate::session::deduct;

/// What the player sees right after answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub selected: usize,
    pub verdict: Verdict,
    pub steps_deducted: u32,
    pub steps_before: i32,
    pub steps_after: i32,
    pub explanation: String,
    pub fun_fact: String,
}

impl Resolution {
    pub(crate) fn new(
        challenge: &Challenge,
        selected: usize,
        verdict: Verdict,
        steps_deducted: u32,
        steps_before: i32,
    ) -> Self {
        Self {
            selected,
            verdict,
            steps_deducted,
            steps_before,
            steps_after: deduct(steps_before, steps_deducted),
            explanation: challenge.explanation.clone(),
            fun_fact: challenge.fun_fact.clone(),
        }
    }

    pub fn was_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    /// Wrong but near; never true for a correct answer.
    pub fn was_close(&self) -> bool {
        self.verdict == Verdict::Close
    }
}
