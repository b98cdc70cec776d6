//! The quest state machine.
//!
//! ```text
//! NotStarted --start--> InRound --select--> Answering --settle--> Resolved --continue--> InRound
//!                                                          \
//!                                                           +--(steps <= 0)--> Ended
//! any --restart--> NotStarted            Ended --replay--> InRound
//! ```
//!
//! `answer` is `select` followed immediately by `settle`. Front ends that
//! play a transition between the two keep the machine in `Answering`,
//! which rejects a second answer.

mod resolution;

pub use resolution::*;

use chrono::{DateTime, Utc};
use quest_rules::{judge, Challenge, Genre, QuestConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::ending::EndingSummary;
use crate::events::QuestEvent;
use crate::selection::ChallengeSelector;
use crate::session::Session;

/// Errors raised by transitions requested from the wrong phase.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestError {
    #[error("no quest in progress")]
    NotStarted,
    #[error("a quest is already in progress")]
    AlreadyStarted,
    #[error("an answer is already being resolved")]
    AnswerPending,
    #[error("not waiting for an answer")]
    NotAwaitingAnswer,
    #[error("option {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("no answer to settle")]
    NothingToSettle,
    #[error("the current challenge has not been resolved")]
    NotResolved,
    #[error("the quest is over")]
    QuestOver,
    #[error("the quest has not ended")]
    NotEnded,
}

/// Where the machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a genre.
    NotStarted,
    /// A challenge is on screen.
    InRound,
    /// An option was chosen; its resolution has not been applied yet.
    Answering,
    /// The resolution is on screen.
    Resolved,
    /// The step pool ran dry.
    Ended,
}

/// Drives one quest at a time from genre selection to ending.
#[derive(Debug, Clone)]
pub struct QuestMachine {
    config: QuestConfig,
    selector: ChallengeSelector,
    phase: Phase,
    session: Option<Session>,
    challenge: Option<Challenge>,
    pending: Option<usize>,
    resolution: Option<Resolution>,
    events: Vec<QuestEvent>,
}

impl QuestMachine {
    /// Create a machine with the given configuration.
    pub fn new(config: QuestConfig) -> Self {
        let selector = ChallengeSelector::new(config.selection);
        Self {
            config,
            selector,
            phase: Phase::NotStarted,
            session: None,
            challenge: None,
            pending: None,
            resolution: None,
            events: Vec::new(),
        }
    }

    /// Create a machine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(QuestConfig::default())
    }

    pub fn config(&self) -> &QuestConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The challenge on screen, kept through resolution.
    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    /// The last resolution, kept through the ending.
    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Genre of the running session.
    pub fn genre(&self) -> Option<Genre> {
        self.session.as_ref().map(|s| s.genre)
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<QuestEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a session in `genre` and serve the first challenge.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        genre: Genre,
        rng: &mut R,
    ) -> Result<&Challenge, QuestError> {
        if self.phase != Phase::NotStarted {
            return Err(QuestError::AlreadyStarted);
        }

        let session = Session::new(genre, self.config.starting_steps, rng);
        info!(session = %session.id, %genre, order = ?session.challenge_order, "quest started");
        self.events.push(QuestEvent::SessionStarted {
            session: session.id,
            genre,
        });
        self.session = Some(session);
        self.serve_challenge()
    }

    /// Lock in an answer. The resolution is applied by [`settle`](Self::settle).
    pub fn select(&mut self, index: usize) -> Result<(), QuestError> {
        match self.phase {
            Phase::InRound => {}
            Phase::Answering => return Err(QuestError::AnswerPending),
            Phase::NotStarted => return Err(QuestError::NotStarted),
            Phase::Resolved => return Err(QuestError::NotAwaitingAnswer),
            Phase::Ended => return Err(QuestError::QuestOver),
        }

        let (session, challenge) = self.active()?;
        let len = challenge.options.len();
        if index >= len {
            return Err(QuestError::OptionOutOfRange { index, len });
        }

        let event = QuestEvent::AnswerLocked {
            session: session.id,
            round: session.round,
            selected: index,
        };
        self.events.push(event);
        self.pending = Some(index);
        self.phase = Phase::Answering;
        Ok(())
    }

    /// Apply the locked answer: score it, update the session, and decide
    /// whether the quest continues.
    pub fn settle(&mut self) -> Result<&Resolution, QuestError> {
        if self.phase != Phase::Answering {
            return Err(QuestError::NothingToSettle);
        }
        let selected = self.pending.take().ok_or(QuestError::NothingToSettle)?;

        let table = self.config.score_table;
        let session = self.session.as_mut().ok_or(QuestError::NotStarted)?;
        let challenge = self.challenge.as_ref().ok_or(QuestError::NotStarted)?;

        let verdict = judge(challenge, selected);
        let deduction = table.deduction(verdict);
        let resolution = Resolution::new(challenge, selected, verdict, deduction, session.steps);
        session.record_answer(verdict, deduction);

        debug!(
            session = %session.id,
            round = session.round,
            ?verdict,
            deduction,
            steps = session.steps,
            "answer resolved"
        );
        self.events.push(QuestEvent::AnswerResolved {
            session: session.id,
            round: session.round,
            verdict,
            deducted: deduction,
            steps_left: session.steps,
        });

        if session.is_exhausted() {
            info!(
                session = %session.id,
                rounds = session.round,
                spent = session.steps_spent,
                "quest ended"
            );
            self.events.push(QuestEvent::QuestEnded {
                session: session.id,
                rounds: session.round,
                steps_spent: session.steps_spent,
            });
            self.phase = Phase::Ended;
        } else {
            self.phase = Phase::Resolved;
        }

        Ok(self.resolution.insert(resolution))
    }

    /// Select and settle in one step.
    pub fn answer(&mut self, index: usize) -> Result<&Resolution, QuestError> {
        self.select(index)?;
        self.settle()
    }

    /// Leave the resolution screen and serve the next round's challenge.
    pub fn continue_quest(&mut self) -> Result<&Challenge, QuestError> {
        match self.phase {
            Phase::Resolved => {}
            Phase::NotStarted => return Err(QuestError::NotStarted),
            Phase::Ended => return Err(QuestError::QuestOver),
            Phase::InRound | Phase::Answering => return Err(QuestError::NotResolved),
        }

        self.session
            .as_mut()
            .ok_or(QuestError::NotStarted)?
            .advance_round();
        self.resolution = None;
        self.serve_challenge()
    }

    /// Drop the session and go back to genre selection.
    pub fn restart(&mut self) {
        let previous = self.session.take().map(|s| s.id);
        if let Some(id) = previous {
            info!(session = %id, "quest reset");
        }
        self.events.push(QuestEvent::SessionCleared { session: previous });
        self.challenge = None;
        self.pending = None;
        self.resolution = None;
        self.phase = Phase::NotStarted;
    }

    /// Start a fresh session in the genre that just ended.
    pub fn replay<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Challenge, QuestError> {
        if self.phase != Phase::Ended {
            return Err(QuestError::NotEnded);
        }
        let genre = self.genre().ok_or(QuestError::NotStarted)?;
        self.restart();
        self.start(genre, rng)
    }

    /// The ending screen, available once the quest has ended.
    pub fn ending(&self, now: DateTime<Utc>) -> Result<EndingSummary, QuestError> {
        if self.phase != Phase::Ended {
            return Err(QuestError::NotEnded);
        }
        let session = self.session.as_ref().ok_or(QuestError::NotStarted)?;
        Ok(EndingSummary::derive(session, now))
    }

    fn active(&self) -> Result<(&Session, &Challenge), QuestError> {
        match (&self.session, &self.challenge) {
            (Some(session), Some(challenge)) => Ok((session, challenge)),
            _ => Err(QuestError::NotStarted),
        }
    }

    fn serve_challenge(&mut self) -> Result<&Challenge, QuestError> {
        let session = self.session.as_mut().ok_or(QuestError::NotStarted)?;
        let challenge = self.selector.next_challenge(session);

        self.events.push(QuestEvent::ChallengeServed {
            session: session.id,
            round: session.round,
            key: challenge.key.clone(),
            category: challenge.category,
        });
        self.phase = Phase::InRound;
        Ok(self.challenge.insert(challenge))
    }
}

impl Default for QuestMachine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
