use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tutor_algo::{
    AnswerValue, Difficulty, LearningStyle, PerformanceTrend, Question, ResponseDetail,
    ScoredEntry,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub subject: String,
    pub level: Difficulty,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub subject: String,
    pub score: f64,
    /// Level the quiz was taken at, before any transition
    pub level: Difficulty,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub quiz_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub subject: String,
    pub level: Difficulty,
    pub score: f64,
    pub questions: Vec<Question>,
    pub student_answers: Vec<AnswerValue>,
    pub detailed_responses: Vec<ResponseDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub name: String,
    pub current_level: BTreeMap<String, Difficulty>,
    pub topics_mastered: BTreeSet<String>,
    pub learning_style: Option<LearningStyle>,
    pub performance_history: Vec<PerformanceEntry>,
    pub quiz_attempts: Vec<QuizAttempt>,
    pub pending_quizzes: BTreeMap<String, Quiz>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl LearnerProfile {
    pub fn new<I>(name: impl Into<String>, subjects: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            name: name.into(),
            current_level: subjects
                .into_iter()
                .map(|subject| (subject, Difficulty::Easy))
                .collect(),
            topics_mastered: BTreeSet::new(),
            learning_style: None,
            performance_history: Vec::new(),
            quiz_attempts: Vec::new(),
            pending_quizzes: BTreeMap::new(),
            created_at: now,
            last_activity: now,
        }
    }

    pub fn level_for(&self, subject: &str) -> Option<Difficulty> {
        self.current_level.get(subject).copied()
    }

    pub fn is_mastered(&self, subject: &str) -> bool {
        self.topics_mastered.contains(subject)
    }

    /// Never moves `last_activity` backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_activity {
            self.last_activity = now;
        }
    }

    pub fn scored_history(&self) -> Vec<ScoredEntry> {
        self.performance_history
            .iter()
            .map(|entry| ScoredEntry::new(entry.subject.clone(), entry.score))
            .collect()
    }
}

/// One questionnaire answer used to assess a learning style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleResponse {
    #[serde(default, deserialize_with = "lenient_preference")]
    pub preference: Option<String>,
}

/// Non-string preferences decode as no preference instead of failing the list.
fn lenient_preference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

impl StyleResponse {
    pub fn new(preference: impl Into<String>) -> Self {
        Self {
            preference: Some(preference.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizEvaluation {
    pub quiz_id: Uuid,
    pub score: f64,
    pub feedback: Vec<String>,
    pub previous_level: Difficulty,
    pub new_level: Difficulty,
    pub detailed_responses: Vec<ResponseDetail>,
    pub recommendations: Vec<String>,
    pub mastered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub name: String,
    pub learning_style: Option<LearningStyle>,
    pub current_levels: BTreeMap<String, Difficulty>,
    pub topics_mastered: Vec<String>,
    pub total_quizzes_taken: usize,
    pub average_scores: BTreeMap<String, f64>,
    pub performance_trend: PerformanceTrend,
    pub last_activity: DateTime<Utc>,
    pub recommendations: Vec<String>,
}
