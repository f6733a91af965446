//! Common Types and Constants
//!
//! Shared data structures used across all algorithm modules.

use std::fmt;

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Maximum number of questions drawn into one quiz
pub const DEFAULT_QUIZ_SIZE: usize = 3;

/// Lowest possible quiz score
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible quiz score
pub const MAX_SCORE: f64 = 100.0;

// ==================== Difficulty ====================

/// Difficulty tier a learner is tested at for one subject
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// One tier up; `Hard` saturates.
    pub fn next_harder(&self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            _ => Self::Hard,
        }
    }

    pub fn is_hardest(&self) -> bool {
        matches!(self, Self::Hard)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Learning Style ====================

/// Preferred modality of a learner.
///
/// Declaration order doubles as the tie-break priority when assessing a
/// style from responses: visual beats auditory beats kinesthetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

impl LearningStyle {
    pub const PRIORITY: [LearningStyle; 3] = [Self::Visual, Self::Auditory, Self::Kinesthetic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Kinesthetic => "kinesthetic",
        }
    }

    /// Maps a questionnaire preference key to the style it signals.
    pub fn from_preference(preference: &str) -> Option<Self> {
        match preference {
            "diagrams" => Some(Self::Visual),
            "verbal_explanation" => Some(Self::Auditory),
            "hands_on" => Some(Self::Kinesthetic),
            _ => None,
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Questions & Answers ====================

/// An expected or supplied answer. Numbers and text never compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A quiz question as supplied by a content provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Prompt shown to the learner
    pub text: String,
    /// Answer the learner must give
    pub expected_answer: AnswerValue,
    /// Shown when the learner answers incorrectly
    pub explanation: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        expected_answer: impl Into<AnswerValue>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            expected_answer: expected_answer.into(),
            explanation: explanation.into(),
        }
    }
}

// ==================== Scored History ====================

/// Minimal view of one graded quiz needed by the progress reporter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub subject: String,
    pub score: f64,
}

impl ScoredEntry {
    pub fn new(subject: impl Into<String>, score: f64) -> Self {
        Self {
            subject: subject.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_next_harder_saturates() {
        assert_eq!(Difficulty::Easy.next_harder(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next_harder(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next_harder(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_style_from_preference() {
        assert_eq!(
            LearningStyle::from_preference("diagrams"),
            Some(LearningStyle::Visual)
        );
        assert_eq!(
            LearningStyle::from_preference("verbal_explanation"),
            Some(LearningStyle::Auditory)
        );
        assert_eq!(
            LearningStyle::from_preference("hands_on"),
            Some(LearningStyle::Kinesthetic)
        );
        assert_eq!(LearningStyle::from_preference("Diagrams"), None);
    }

    #[test]
    fn test_answer_value_untagged_json() {
        let n: AnswerValue = serde_json::from_str("12").unwrap();
        let s: AnswerValue = serde_json::from_str("\"Newton\"").unwrap();
        assert_eq!(n, AnswerValue::Number(12.0));
        assert_eq!(s, AnswerValue::Text("Newton".to_string()));
    }

    #[test]
    fn test_question_json_shape() {
        let q = Question::new("What is 5 + 7?", 12, "Adding 5 and 7 equals 12");
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["expectedAnswer"], serde_json::json!(12.0));
        assert_eq!(value["text"], "What is 5 + 7?");
    }
}
