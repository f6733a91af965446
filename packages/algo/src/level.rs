//! Level Adjustment
//!
//! The per-subject difficulty state machine. Given the level a quiz was
//! taken at and its score, decides the next level and whether the subject
//! is now mastered.
//!
//! | pre-level | score >= promote_at   | score <= reset_at | otherwise |
//! |-----------|-----------------------|-------------------|-----------|
//! | easy      | medium                | easy              | easy      |
//! | medium    | hard                  | easy              | medium    |
//! | hard      | hard, mastered        | easy              | hard      |

use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_score;
use crate::types::Difficulty;

/// Score thresholds driving the transitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPolicy {
    /// Scores at or above this promote (or master at hard)
    pub promote_at: f64,
    /// Scores at or below this reset to easy
    pub reset_at: f64,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self {
            promote_at: 80.0,
            reset_at: 30.0,
        }
    }
}

/// Outcome of one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelTransition {
    pub previous: Difficulty,
    pub next: Difficulty,
    /// Set when this quiz qualifies the subject as mastered
    pub mastered_now: bool,
}

impl LevelTransition {
    pub fn changed(&self) -> bool {
        self.previous != self.next
    }
}

pub fn adjust_level(previous: Difficulty, score: f64, policy: &LevelPolicy) -> LevelTransition {
    let score = sanitize_score(score);
    let high = score >= policy.promote_at;

    let (next, mastered_now) = if high {
        match previous {
            Difficulty::Hard => (Difficulty::Hard, true),
            level => (level.next_harder(), false),
        }
    } else if score <= policy.reset_at && previous != Difficulty::Easy {
        (Difficulty::Easy, false)
    } else {
        (previous, false)
    };

    LevelTransition {
        previous,
        next,
        mastered_now,
    }
}
