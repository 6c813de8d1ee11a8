use serde::{Deserialize, Serialize};

use crate::Level;

/// Scores kept per difficulty before the cutoff applies.
pub const SCORES_PER_LEVEL: usize = 10;

/// The record handed off by the embedder when a game transitions to Won:
/// the difficulty played, the caller-measured completion time, and the
/// player's name. The engine itself never measures time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub level: Level,
    pub elapsed_secs: u64,
    pub player_name: String,
}

impl HighScore {
    pub fn new(level: Level, elapsed_secs: u64, player_name: impl Into<String>) -> Self {
        Self {
            level,
            elapsed_secs,
            player_name: player_name.into(),
        }
    }
}

/// Top-10 tables per difficulty, fastest first. A plain owned value; embed
/// one wherever the scores should live.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    beginner: Vec<HighScore>,
    intermediate: Vec<HighScore>,
    expert: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self, level: Level) -> &[HighScore] {
        match level {
            Level::Beginner => &self.beginner,
            Level::Intermediate => &self.intermediate,
            Level::Expert => &self.expert,
        }
    }

    fn scores_mut(&mut self, level: Level) -> &mut Vec<HighScore> {
        match level {
            Level::Beginner => &mut self.beginner,
            Level::Intermediate => &mut self.intermediate,
            Level::Expert => &mut self.expert,
        }
    }

    /// Whether a completion time makes the table for its difficulty: always
    /// while the table is short, otherwise it must beat the current 10th.
    pub fn qualifies(&self, level: Level, elapsed_secs: u64) -> bool {
        match self.scores(level).get(SCORES_PER_LEVEL - 1) {
            None => true,
            Some(slowest) => elapsed_secs < slowest.elapsed_secs,
        }
    }

    /// Records a score if it qualifies, keeping the table sorted fastest
    /// first and capped at [`SCORES_PER_LEVEL`]. Returns whether it was kept.
    pub fn record(&mut self, score: HighScore) -> bool {
        if !self.qualifies(score.level, score.elapsed_secs) {
            return false;
        }
        let scores = self.scores_mut(score.level);
        scores.push(score);
        scores.sort_by_key(|score| score.elapsed_secs);
        scores.truncate(SCORES_PER_LEVEL);
        true
    }
}
