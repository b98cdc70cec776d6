//! Quest events emitted by state machine transitions.

use quest_rules::{Category, Genre, Verdict};
use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Something that happened during a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestEvent {
    SessionStarted {
        session: SessionId,
        genre: Genre,
    },
    ChallengeServed {
        session: SessionId,
        round: u32,
        key: String,
        category: Category,
    },
    /// An option was chosen and is waiting to settle.
    AnswerLocked {
        session: SessionId,
        round: u32,
        selected: usize,
    },
    AnswerResolved {
        session: SessionId,
        round: u32,
        verdict: Verdict,
        deducted: u32,
        steps_left: i32,
    },
    QuestEnded {
        session: SessionId,
        rounds: u32,
        steps_spent: u32,
    },
    /// The machine went back to genre selection.
    SessionCleared {
        session: Option<SessionId>,
    },
}

impl QuestEvent {
    /// The session this event belongs to, if any.
    pub fn session(&self) -> Option<SessionId> {
        match self {
            QuestEvent::SessionStarted { session, .. }
            | QuestEvent::ChallengeServed { session, .. }
            | QuestEvent::AnswerLocked { session, .. }
            | QuestEvent::AnswerResolved { session, .. }
            | QuestEvent::QuestEnded { session, .. } => Some(*session),
            QuestEvent::SessionCleared { session } => *session,
        }
    }

    /// Short machine-readable name.
    pub fn kind(&self) -> &'static str {
        match self {
            QuestEvent::SessionStarted { .. } => "session_started",
            QuestEvent::ChallengeServed { .. } => "challenge_served",
            QuestEvent::AnswerLocked { .. } => "answer_locked",
            QuestEvent::AnswerResolved { .. } => "answer_resolved",
            QuestEvent::QuestEnded { .. } => "quest_ended",
            QuestEvent::SessionCleared { .. } => "session_cleared",
        }
    }
}
