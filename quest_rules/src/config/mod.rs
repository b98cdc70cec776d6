//! Quest configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::mechanics::{ScoreTable, STARTING_STEPS};

/// Errors raised while loading rules or configuration.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown genre: {0}")]
    UnknownGenre(String),
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How non-feature rounds pick their challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Walk the regular pool in table order.
    #[default]
    Sequential,
    /// Follow the session's shuffled five-slot order, then loop it.
    Shuffled,
}

/// Longest accepted animation tick.
pub const MAX_TICK_MS: u64 = 60_000;

/// Timing of the counting animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub tick_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            tick_ms: 16,
        }
    }
}

/// Tunables for a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    pub starting_steps: i32,
    pub score_table: ScoreTable,
    pub selection: SelectionStrategy,
    /// Pause between choosing an answer and seeing its resolution.
    pub answer_delay_ms: u64,
    pub animation: AnimationConfig,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            starting_steps: STARTING_STEPS,
            score_table: ScoreTable::standard(),
            selection: SelectionStrategy::Sequential,
            answer_delay_ms: 300,
            animation: AnimationConfig::default(),
        }
    }
}

impl QuestConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, RulesError> {
        let config: QuestConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject configurations that would break session invariants.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.starting_steps <= 0 {
            return Err(RulesError::Invalid(format!(
                "starting_steps must be positive, got {}",
                self.starting_steps
            )));
        }
        if !self.score_table.is_valid() {
            return Err(RulesError::Invalid(format!(
                "score table must satisfy correct <= close <= wrong with wrong > 0, got {}/{}/{}",
                self.score_table.correct, self.score_table.close, self.score_table.wrong
            )));
        }
        // wrong is the largest cost once the ordering holds
        if i32::try_from(self.score_table.wrong).is_err() {
            return Err(RulesError::Invalid(format!(
                "score table costs must not exceed {}, got {}",
                i32::MAX,
                self.score_table.wrong
            )));
        }
        if self.animation.tick_ms == 0 {
            return Err(RulesError::Invalid("animation.tick_ms must be non-zero".into()));
        }
        if self.animation.tick_ms > MAX_TICK_MS {
            return Err(RulesError::Invalid(format!(
                "animation.tick_ms must be at most {}, got {}",
                MAX_TICK_MS, self.animation.tick_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuestConfig::default();
        assert_eq!(config.starting_steps, 1000);
        assert_eq!(config.score_table, ScoreTable::standard());
        assert_eq!(config.selection, SelectionStrategy::Sequential);
        assert_eq!(config.answer_delay_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = QuestConfig::from_toml_str("").unwrap();
        assert_eq!(config, QuestConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = QuestConfig::from_toml_str(
            r#"
            selection = "shuffled"
            answer_delay_ms = 0

            [score_table]
            correct = 10
            close = 25
            wrong = 50

            [animation]
            tick_ms = 32
            "#,
        )
        .unwrap();

        assert_eq!(config.selection, SelectionStrategy::Shuffled);
        assert_eq!(config.score_table, ScoreTable::gentle());
        assert_eq!(config.answer_delay_ms, 0);
        assert_eq!(config.animation.tick_ms, 32);
        assert_eq!(config.animation.duration_ms, 500);
        assert_eq!(config.starting_steps, 1000);
    }

    #[test]
    fn test_sample_file_matches_defaults() {
        let config = QuestConfig::from_toml_str(include_str!("../../../kiloquest.toml")).unwrap();
        assert_eq!(config, QuestConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            QuestConfig::from_toml_str("starting_steps = 0"),
            Err(RulesError::Invalid(_))
        ));
        assert!(matches!(
            QuestConfig::from_toml_str("[score_table]\ncorrect = 9\nclose = 5\nwrong = 1"),
            Err(RulesError::Invalid(_))
        ));
        assert!(matches!(
            QuestConfig::from_toml_str("[animation]\ntick_ms = 0"),
            Err(RulesError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_cost() {
        let err = QuestConfig::from_toml_str(
            "[score_table]\ncorrect = 100\nclose = 250\nwrong = 3000000000",
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::Invalid(_)));
        assert!(err.to_string().contains("3000000000"));

        let at_limit = format!("[score_table]\ncorrect = 1\nclose = 2\nwrong = {}", i32::MAX);
        assert!(QuestConfig::from_toml_str(&at_limit).is_ok());
    }

    #[test]
    fn test_rejects_huge_tick() {
        assert!(matches!(
            QuestConfig::from_toml_str("[animation]\ntick_ms = 60001"),
            Err(RulesError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_syntax() {
        assert!(matches!(
            QuestConfig::from_toml_str("selection = "),
            Err(RulesError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = QuestConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
