//! Data Sanitization
//!
//! Numerical stability utilities for scores flowing through the state
//! machine and the progress reporter.
//!
//! Functions:
//! - Score clamping into `[MIN_SCORE, MAX_SCORE]`
//! - Safe means over score slices

use crate::types::{MAX_SCORE, MIN_SCORE};

/// 将分数限制在合法区间内，无效值视为 0
pub fn sanitize_score(score: f64) -> f64 {
    if score.is_nan() {
        return MIN_SCORE;
    }
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Percentage of `correct` out of `total`; an empty quiz scores zero.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return MIN_SCORE;
    }
    sanitize_score(100.0 * correct as f64 / total as f64)
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}
