//! Ending derivation - turns a finished session into its ending screen.
//!
//! The ending and archetype are pure lookups keyed by steps spent, so the
//! same session always earns the same result.

mod achievements;

pub use achievements::*;

use chrono::{DateTime, Utc};
use quest_rules::{
    AccuracyRating, Archetype, Genre, StatsLabels, ARCHETYPE_STEP_BAND, ENDING_STEP_BAND,
};
use serde::Serialize;

use crate::session::{Session, SessionId, Tally};

/// Index into a genre's endings for the given spend.
pub fn ending_index(steps_spent: u32, endings: usize) -> usize {
    ((steps_spent / ENDING_STEP_BAND) as usize).min(endings.saturating_sub(1))
}

/// Index into a genre's archetypes for the given spend.
pub fn archetype_index(steps_spent: u32, archetypes: usize) -> usize {
    ((steps_spent / ARCHETYPE_STEP_BAND) as usize).min(archetypes.saturating_sub(1))
}

/// "2m 5s", or "42s" under a minute.
pub fn format_elapsed(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Everything the ending screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct EndingSummary {
    pub session: SessionId,
    pub genre: Genre,
    pub rounds: u32,
    pub steps_spent: u32,
    pub tally: Tally,
    pub stats_labels: StatsLabels,

    pub ending_index: usize,
    pub ending: &'static str,
    pub archetype_index: usize,
    pub archetype: Archetype,

    pub accuracy: f64,
    pub accuracy_percent: u32,
    pub rating: AccuracyRating,

    pub elapsed_secs: u64,
    pub elapsed_label: String,
    pub average_spent_per_round: u32,

    pub achievements: Vec<Achievement>,
    pub final_message: &'static str,
}

impl EndingSummary {
    /// Derive the ending for `session` as of `now`.
    pub fn derive(session: &Session, now: DateTime<Utc>) -> Self {
        let profile = session.genre.profile();

        let ending_index = ending_index(session.steps_spent, profile.endings.len());
        let archetype_index = archetype_index(session.steps_spent, profile.archetypes.len());

        let accuracy_percent = session.tally.accuracy_percent();
        let elapsed_secs = session.elapsed_secs(now);
        let average_spent_per_round = if session.round > 0 {
            (session.steps_spent as f64 / session.round as f64).round() as u32
        } else {
            0
        };

        let run = RunStats {
            accuracy_percent,
            elapsed_secs,
            average_spent_per_round,
            correct: session.tally.correct,
            rounds: session.round,
        };

        Self {
            session: session.id,
            genre: session.genre,
            rounds: session.round,
            steps_spent: session.steps_spent,
            tally: session.tally,
            stats_labels: profile.stats_labels,
            ending_index,
            ending: profile.ending(ending_index),
            archetype_index,
            archetype: *profile.archetype(archetype_index),
            accuracy: session.tally.accuracy(),
            accuracy_percent,
            rating: AccuracyRating::from_percent(accuracy_percent),
            elapsed_secs,
            elapsed_label: format_elapsed(elapsed_secs),
            average_spent_per_round,
            achievements: award_achievements(&run),
            final_message: profile.final_message,
        }
    }

    /// Number of achievements earned.
    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned).count()
    }
}
