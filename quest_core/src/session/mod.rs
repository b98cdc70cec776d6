//! Session state - everything that belongs to one playthrough.

mod order;

pub use order::*;

use chrono::{DateTime, Utc};
use quest_rules::{Genre, Verdict, ORDER_SLOTS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil session ID (useful in tests).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Running count of answers by verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tally {
    pub correct: u32,
    pub close: u32,
    pub wrong: u32,
}

impl Tally {
    /// Count one answer.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Close => self.close += 1,
            Verdict::Wrong => self.wrong += 1,
        }
    }

    /// Total answers counted.
    pub fn answered(&self) -> u32 {
        self.correct + self.close + self.wrong
    }

    /// Fraction of answers that were correct; 0.0 before any answer.
    pub fn accuracy(&self) -> f64 {
        match self.answered() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }

    /// Accuracy as a rounded whole percentage.
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }
}

/// One playthrough from genre selection to the ending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub genre: Genre,

    /// Remaining steps. Can go negative on the final answer.
    pub steps: i32,
    /// 1-based round counter.
    pub round: u32,
    /// Sum of all deductions so far.
    pub steps_spent: u32,
    pub tally: Tally,

    /// Permutation of 1..=5 drawn at session start.
    pub challenge_order: [usize; ORDER_SLOTS],
    /// Feature challenges served so far.
    pub features_served: usize,

    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Start a new session, shuffling the challenge order with `rng`.
    pub fn new<R: Rng + ?Sized>(genre: Genre, starting_steps: i32, rng: &mut R) -> Self {
        Self {
            id: SessionId::new(),
            genre,
            steps: starting_steps,
            round: 1,
            steps_spent: 0,
            tally: Tally::default(),
            challenge_order: shuffled_order(rng),
            features_served: 0,
            started_at: Utc::now(),
        }
    }

    /// Override the start time.
    pub fn with_start_time(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Apply an answer's verdict and deduction.
    ///
    /// Arithmetic saturates, so the pool never grows whatever the deduction.
    pub fn record_answer(&mut self, verdict: Verdict, deduction: u32) {
        self.steps = deduct(self.steps, deduction);
        self.steps_spent = self.steps_spent.saturating_add(deduction);
        self.tally.record(verdict);
    }

    /// Whether the step pool has run dry.
    pub fn is_exhausted(&self) -> bool {
        self.steps <= 0
    }

    /// Move to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
    }

    /// Whole seconds between the start and `now`, never negative.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        let millis = (now - self.started_at).num_milliseconds().max(0);
        ((millis as f64) / 1000.0).round() as u64
    }
}

/// `steps - deduction`, saturating at `i32::MIN`.
pub fn deduct(steps: i32, deduction: u32) -> i32 {
    let remaining = i64::from(steps) - i64::from(deduction);
    i32::try_from(remaining).unwrap_or(i32::MIN)
}
