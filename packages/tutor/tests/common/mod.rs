#![allow(dead_code)]

use std::sync::Arc;

use adaptive_tutor::{
    AnswerValue, ContentBank, Difficulty, FixedClock, Question, TutorConfig, TutorEngine,
};

pub const FIXED_TIMESTAMP: i64 = 1_700_000_000_000;

/// One question per level so every quiz is fully predictable.
pub fn single_question_bank() -> ContentBank {
    ContentBank::new()
        .with_questions(
            "math",
            Difficulty::Easy,
            vec![Question::new("What is 5 + 7?", 12, "Adding 5 and 7 equals 12")],
        )
        .with_questions(
            "math",
            Difficulty::Medium,
            vec![Question::new("What is 72 ÷ 8?", 9, "Dividing 72 by 8 equals 9")],
        )
        .with_questions(
            "math",
            Difficulty::Hard,
            vec![Question::new("What is 3² + 4²?", 25, "3² (9) + 4² (16) = 25")],
        )
        .with_questions(
            "physics",
            Difficulty::Easy,
            vec![Question::new(
                "What is the SI unit of force?",
                "Newton",
                "Force is measured in Newtons (N)",
            )],
        )
}

pub fn test_config() -> TutorConfig {
    TutorConfig {
        rng_seed: Some(7),
        ..TutorConfig::default()
    }
}

pub fn engine_with(bank: ContentBank) -> (TutorEngine, FixedClock) {
    let clock = FixedClock::from_timestamp_millis(FIXED_TIMESTAMP);
    let engine = TutorEngine::new(test_config(), Arc::new(bank)).with_clock(Arc::new(clock.clone()));
    (engine, clock)
}

pub fn test_engine() -> (TutorEngine, FixedClock) {
    engine_with(single_question_bank())
}

/// The correct answers for the learner's pending quiz in `subject`.
pub fn correct_answers(engine: &TutorEngine, learner_id: &str, subject: &str) -> Vec<AnswerValue> {
    let quiz = engine
        .generate_quiz(learner_id, subject)
        .expect("quiz generation should succeed");
    quiz.questions
        .iter()
        .map(|q| q.expected_answer.clone())
        .collect()
}

pub fn wrong_answers(engine: &TutorEngine, learner_id: &str, subject: &str) -> Vec<AnswerValue> {
    let quiz = engine
        .generate_quiz(learner_id, subject)
        .expect("quiz generation should succeed");
    quiz.questions
        .iter()
        .map(|_| AnswerValue::from("definitely wrong"))
        .collect()
}

/// Puts `subject` at `level` by answering quizzes perfectly from easy.
pub fn promote_to(engine: &TutorEngine, learner_id: &str, subject: &str, level: Difficulty) {
    while engine
        .profile_snapshot(learner_id)
        .expect("profile exists")
        .level_for(subject)
        .unwrap_or_default()
        < level
    {
        let answers = correct_answers(engine, learner_id, subject);
        engine
            .evaluate_quiz(learner_id, subject, answers)
            .expect("evaluation should succeed");
    }
}
