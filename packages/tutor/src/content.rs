use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tutor_algo::{Difficulty, Question};

use crate::error::ContentError;

/// Source of quiz questions, queried by subject and difficulty.
pub trait ContentProvider: Send + Sync {
    fn questions(&self, subject: &str, level: Difficulty) -> Vec<Question>;

    fn subjects(&self) -> BTreeSet<String>;

    fn has_subject(&self, subject: &str) -> bool {
        self.subjects().contains(subject)
    }
}

/// In-memory question bank keyed by subject then difficulty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentBank {
    subjects: BTreeMap<String, BTreeMap<Difficulty, Vec<Question>>>,
}

impl ContentBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// The math, physics and chemistry bank the tutor ships with.
    pub fn builtin() -> Self {
        crate::seed::builtin_bank()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let bank: Self = serde_json::from_str(raw)?;
        if bank.subjects.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(bank)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn with_questions(
        mut self,
        subject: impl Into<String>,
        level: Difficulty,
        questions: Vec<Question>,
    ) -> Self {
        self.add_questions(subject, level, questions);
        self
    }

    /// Registers a subject with every level present, even when empty.
    pub fn add_questions(
        &mut self,
        subject: impl Into<String>,
        level: Difficulty,
        questions: Vec<Question>,
    ) {
        let levels = self.subjects.entry(subject.into()).or_default();
        for tier in Difficulty::ALL {
            levels.entry(tier).or_default();
        }
        levels.entry(level).or_default().extend(questions);
    }

    pub fn question_count(&self) -> usize {
        self.subjects
            .values()
            .flat_map(|levels| levels.values())
            .map(Vec::len)
            .sum()
    }
}

impl ContentProvider for ContentBank {
    fn questions(&self, subject: &str, level: Difficulty) -> Vec<Question> {
        self.subjects
            .get(subject)
            .and_then(|levels| levels.get(&level))
            .cloned()
            .unwrap_or_default()
    }

    fn subjects(&self) -> BTreeSet<String> {
        self.subjects.keys().cloned().collect()
    }

    fn has_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let bank = ContentBank::builtin();
        let subjects: Vec<_> = bank.subjects().into_iter().collect();
        assert_eq!(subjects, vec!["chemistry", "math", "physics"]);
        assert_eq!(bank.question_count(), 18);
        assert_eq!(bank.questions("math", Difficulty::Hard).len(), 2);
    }

    #[test]
    fn test_unknown_subject_is_empty() {
        let bank = ContentBank::builtin();
        assert!(bank.questions("history", Difficulty::Easy).is_empty());
        assert!(!bank.has_subject("history"));
    }

    #[test]
    fn test_from_json_str() {
        let raw = r#"{
            "art": {
                "easy": [
                    {"text": "Primary colour?", "expectedAnswer": "Red", "explanation": "Red is primary"}
                ]
            }
        }"#;
        let bank = ContentBank::from_json_str(raw).unwrap();
        assert!(bank.has_subject("art"));
        assert_eq!(bank.questions("art", Difficulty::Easy).len(), 1);
        assert!(bank.questions("art", Difficulty::Hard).is_empty());
    }

    #[test]
    fn test_from_json_rejects_empty_and_bad_level() {
        assert!(matches!(ContentBank::from_json_str("{}"), Err(ContentError::Empty)));
        let bad = r#"{"art": {"extreme": []}}"#;
        assert!(matches!(ContentBank::from_json_str(bad), Err(ContentError::Json(_))));
    }

    #[test]
    fn test_add_questions_registers_all_levels() {
        let bank = ContentBank::new().with_questions(
            "music",
            Difficulty::Medium,
            vec![Question::new("Notes in an octave?", 12, "Twelve semitones")],
        );
        assert!(bank.has_subject("music"));
        assert!(bank.questions("music", Difficulty::Easy).is_empty());
        assert_eq!(bank.questions("music", Difficulty::Medium).len(), 1);
    }
}
