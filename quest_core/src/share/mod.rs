//! Result sharing: the share card text and the copy-with-fallback policy.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::ending::EndingSummary;

/// Canonical link appended to every copied result.
pub const SHARE_URL: &str = "https://kiloquest.demo";

/// Shown when neither copy strategy works.
pub const MANUAL_COPY_NOTICE: &str = "Failed to copy. Please copy the text manually.";

/// Both copy strategies failed.
#[derive(Debug, Error)]
#[error("clipboard unavailable ({primary}); fallback failed ({fallback})")]
pub struct ShareError {
    pub primary: std::io::Error,
    pub fallback: std::io::Error,
}

/// The public summary of a finished quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareCard {
    pub genre: String,
    pub rounds: u32,
    pub accuracy_percent: u32,
    pub title: String,
}

impl ShareCard {
    /// Build the card from an ending summary.
    pub fn from_summary(summary: &EndingSummary) -> Self {
        Self {
            genre: summary.genre.id().to_string(),
            rounds: summary.rounds,
            accuracy_percent: summary.accuracy_percent,
            title: summary.archetype.name.to_string(),
        }
    }

    /// The one-line brag.
    pub fn text(&self) -> String {
        format!(
            "🎮 Just completed KiloQuest {} with {} rounds, {}% accuracy, and earned the \"{}\" title! Can you beat my score? #KiloQuest #KiloGuess",
            self.genre, self.rounds, self.accuracy_percent, self.title
        )
    }

    /// Text plus link, as placed on the clipboard.
    pub fn payload(&self) -> String {
        format!("{}\n{}", self.text(), SHARE_URL)
    }
}

/// Somewhere text can be copied to.
pub trait CopyTarget {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Copy `text`, or report why it could not be copied.
    fn copy_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// Which strategy ended up holding the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
}

/// Copy with `primary`, falling back to `fallback` on failure.
pub fn copy_with_fallback(
    primary: &mut dyn CopyTarget,
    fallback: &mut dyn CopyTarget,
    text: &str,
) -> Result<CopyOutcome, ShareError> {
    let primary_err = match primary.copy_text(text) {
        Ok(()) => return Ok(CopyOutcome::Primary),
        Err(e) => e,
    };

    warn!(target_name = primary.name(), error = %primary_err, "copy failed, trying fallback");

    match fallback.copy_text(text) {
        Ok(()) => Ok(CopyOutcome::Fallback),
        Err(fallback_err) => {
            warn!(target_name = fallback.name(), error = %fallback_err, "fallback copy failed");
            Err(ShareError {
                primary: primary_err,
                fallback: fallback_err,
            })
        }
    }
}
