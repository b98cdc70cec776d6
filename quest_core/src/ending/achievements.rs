//! Achievements awarded on the ending screen.

use serde::{Deserialize, Serialize};

/// Every achievement a quest can award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementKind {
    FirstVictory,
    Sharpshooter,
    SpeedDemon,
    EfficiencyExpert,
    OnFire,
    Veteran,
}

impl AchievementKind {
    /// Display order.
    pub const ALL: [AchievementKind; 6] = [
        AchievementKind::FirstVictory,
        AchievementKind::Sharpshooter,
        AchievementKind::SpeedDemon,
        AchievementKind::EfficiencyExpert,
        AchievementKind::OnFire,
        AchievementKind::Veteran,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::FirstVictory => "First Victory",
            AchievementKind::Sharpshooter => "Sharpshooter",
            AchievementKind::SpeedDemon => "Speed Demon",
            AchievementKind::EfficiencyExpert => "Efficiency Expert",
            AchievementKind::OnFire => "On Fire",
            AchievementKind::Veteran => "Veteran",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstVictory => "Complete your first KiloQuest",
            AchievementKind::Sharpshooter => "80%+ accuracy",
            AchievementKind::SpeedDemon => "Complete in under 2 minutes",
            AchievementKind::EfficiencyExpert => "Avg < 30 steps per round",
            AchievementKind::OnFire => "5+ correct answers",
            AchievementKind::Veteran => "Reach round 10+",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::FirstVictory => "🏆",
            AchievementKind::Sharpshooter => "🎯",
            AchievementKind::SpeedDemon => "⚡",
            AchievementKind::EfficiencyExpert => "💎",
            AchievementKind::OnFire => "🔥",
            AchievementKind::Veteran => "🎖️",
        }
    }

    /// Whether the achievement is earned for the given run.
    pub fn is_earned(&self, run: &RunStats) -> bool {
        match self {
            AchievementKind::FirstVictory => true,
            AchievementKind::Sharpshooter => run.accuracy_percent >= 80,
            AchievementKind::SpeedDemon => run.elapsed_secs < 120,
            AchievementKind::EfficiencyExpert => run.average_spent_per_round < 30,
            AchievementKind::OnFire => run.correct >= 5,
            AchievementKind::Veteran => run.rounds >= 10,
        }
    }
}

/// The numbers achievements are judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub accuracy_percent: u32,
    pub elapsed_secs: u64,
    pub average_spent_per_round: u32,
    pub correct: u32,
    pub rounds: u32,
}

/// An achievement and whether this run earned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub earned: bool,
}

/// Judge every achievement, in display order.
pub fn award_achievements(run: &RunStats) -> Vec<Achievement> {
    AchievementKind::ALL
        .iter()
        .map(|kind| Achievement {
            kind: *kind,
            earned: kind.is_earned(run),
        })
        .collect()
}
