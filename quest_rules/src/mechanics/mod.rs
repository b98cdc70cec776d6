//! Game mechanics: verdicts, step deductions, accuracy ratings.

use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;

/// Steps every session starts with.
pub const STARTING_STEPS: i32 = 1000;

/// Number of slots in a shuffled challenge order.
pub const ORDER_SLOTS: usize = 5;

/// Every round divisible by this serves a feature challenge.
pub const FEATURE_CADENCE: u32 = 3;

/// At or below this many steps the display flags the pool as low.
pub const LOW_STEPS_THRESHOLD: i32 = 100;

/// Steps spent per ending tier.
pub const ENDING_STEP_BAND: u32 = 200;

/// Steps spent per archetype tier.
pub const ARCHETYPE_STEP_BAND: u32 = 300;

/// Outcome class of a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    /// Wrong, but listed as a near miss.
    Close,
    Wrong,
}

impl Verdict {
    /// Banner text shown on the resolution screen.
    pub fn banner(&self) -> &'static str {
        match self {
            Verdict::Correct => "KILO-CORRECT!",
            Verdict::Close => "KILO-CLOSE!",
            Verdict::Wrong => "KILO-MISS",
        }
    }
}

/// Classify `selected` against a challenge.
pub fn judge(challenge: &Challenge, selected: usize) -> Verdict {
    if challenge.is_correct(selected) {
        Verdict::Correct
    } else if challenge.is_close(selected) {
        Verdict::Close
    } else {
        Verdict::Wrong
    }
}

/// Steps deducted per verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub correct: u32,
    pub close: u32,
    pub wrong: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoreTable {
    /// 100 / 250 / 500.
    pub const fn standard() -> Self {
        Self {
            correct: 100,
            close: 250,
            wrong: 500,
        }
    }

    /// 10 / 25 / 50, for long sessions.
    pub const fn gentle() -> Self {
        Self {
            correct: 10,
            close: 25,
            wrong: 50,
        }
    }

    /// Steps deducted for a verdict.
    pub fn deduction(&self, verdict: Verdict) -> u32 {
        match verdict {
            Verdict::Correct => self.correct,
            Verdict::Close => self.close,
            Verdict::Wrong => self.wrong,
        }
    }

    /// Costs must not reward a worse answer, and a miss must cost something.
    pub fn is_valid(&self) -> bool {
        self.correct <= self.close && self.close <= self.wrong && self.wrong > 0
    }
}

/// Accuracy bracket shown under the accuracy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyRating {
    /// 80% and up.
    EliteEstimator,
    /// 60-79%.
    SolidGuesser,
    /// 40-59%.
    LearningWarrior,
    Survivor,
}

impl AccuracyRating {
    /// Rating for a whole-number accuracy percentage.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            80.. => AccuracyRating::EliteEstimator,
            60..=79 => AccuracyRating::SolidGuesser,
            40..=59 => AccuracyRating::LearningWarrior,
            _ => AccuracyRating::Survivor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccuracyRating::EliteEstimator => "Elite Estimator",
            AccuracyRating::SolidGuesser => "Solid Guesser",
            AccuracyRating::LearningWarrior => "Learning Warrior",
            AccuracyRating::Survivor => "Survivor",
        }
    }
}

impl std::fmt::Display for AccuracyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
