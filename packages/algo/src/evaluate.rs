//! Answer Evaluation
//!
//! Type-aware equality between an expected and a supplied answer, and
//! aggregation of a whole quiz into a score.

use serde::{Deserialize, Serialize};

use crate::sanitize::percentage;
use crate::types::{AnswerValue, Question};

/// Checks a single answer.
///
/// Numbers must match exactly; text matches case-insensitively. A number
/// never matches text and vice versa.
pub fn check_answer(question: &Question, given: &AnswerValue) -> bool {
    match (&question.expected_answer, given) {
        (AnswerValue::Number(expected), AnswerValue::Number(actual)) => expected == actual,
        (AnswerValue::Text(expected), AnswerValue::Text(actual)) => {
            expected.to_lowercase() == actual.to_lowercase()
        }
        _ => false,
    }
}

/// Per-question outcome of a graded quiz
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDetail {
    pub question: String,
    pub student_answer: AnswerValue,
    pub correct_answer: AnswerValue,
    pub is_correct: bool,
    pub explanation: String,
}

/// Graded quiz
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedQuiz {
    pub correct_count: usize,
    pub score: f64,
    pub feedback: Vec<String>,
    pub details: Vec<ResponseDetail>,
}

/// Grades answers against questions position by position.
///
/// Callers must supply exactly one answer per question; the score
/// denominator is `answers.len()`.
pub fn grade(questions: &[Question], answers: &[AnswerValue]) -> GradedQuiz {
    debug_assert_eq!(questions.len(), answers.len());

    let mut correct_count = 0;
    let mut feedback = Vec::with_capacity(answers.len());
    let mut details = Vec::with_capacity(answers.len());

    for (i, (question, answer)) in questions.iter().zip(answers).enumerate() {
        let is_correct = check_answer(question, answer);
        if is_correct {
            correct_count += 1;
            feedback.push(format!("Question {}: Correct!", i + 1));
        } else {
            feedback.push(format!(
                "Question {}: Incorrect. {}",
                i + 1,
                question.explanation
            ));
        }

        details.push(ResponseDetail {
            question: question.text.clone(),
            student_answer: answer.clone(),
            correct_answer: question.expected_answer.clone(),
            is_correct,
            explanation: question.explanation.clone(),
        });
    }

    GradedQuiz {
        correct_count,
        score: percentage(correct_count, answers.len()),
        feedback,
        details,
    }
}
