//! Recommendation Engine
//!
//! Two independent surfaces: guidance right after a quiz, and guidance over
//! a whole profile.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, LearningStyle};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationThresholds {
    /// Quiz scores and subject averages below this call for review
    pub struggling_below: f64,
    /// Subject averages above this are called out as excelling
    pub excelling_above: f64,
    /// Quiz scores at or above this are congratulated
    pub excellent_at: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            struggling_below: 60.0,
            excelling_above: 80.0,
            excellent_at: 80.0,
        }
    }
}

fn study_tip(style: Option<LearningStyle>) -> &'static str {
    match style {
        Some(LearningStyle::Visual) => {
            "Try using diagrams and visual aids to understand the concepts better."
        }
        Some(LearningStyle::Auditory) => {
            "Consider watching video explanations or using verbal reasoning."
        }
        Some(LearningStyle::Kinesthetic) | None => {
            "Practice with hands-on exercises and interactive problems."
        }
    }
}

/// Guidance for a just-graded quiz. `level` is the subject's level after
/// the transition triggered by this quiz.
pub fn quiz_recommendations(
    subject: &str,
    score: f64,
    style: Option<LearningStyle>,
    level: Difficulty,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(2);

    if score < thresholds.struggling_below {
        recommendations.push(format!("Review the basics of {subject} before proceeding."));
        recommendations.push(study_tip(style).to_string());
    } else if score < thresholds.excellent_at {
        recommendations.push("You're doing well! Practice more to master these concepts.".to_string());
        recommendations.push("Try solving similar problems with different variations.".to_string());
    } else {
        recommendations.push("Excellent work! You're ready for more challenging problems.".to_string());
        if level.is_hardest() {
            recommendations.push(format!("You've mastered the {subject} content at this level!"));
        } else {
            recommendations.push("Consider moving to the next difficulty level.".to_string());
        }
    }

    recommendations
}

/// Guidance over a whole profile.
pub fn profile_recommendations(
    mastered: &BTreeSet<String>,
    averages: &BTreeMap<String, f64>,
    style: Option<LearningStyle>,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !mastered.is_empty() {
        let list = mastered.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        recommendations.push(format!("Congratulations! You've mastered: {list}"));
    }

    for (subject, avg) in averages {
        if *avg < thresholds.struggling_below {
            recommendations.push(format!(
                "Consider focusing more on {subject}, your average score is {avg:.1}%"
            ));
        } else if *avg > thresholds.excelling_above {
            recommendations.push(format!(
                "You're excelling in {subject} with an average of {avg:.1}%"
            ));
        }
    }

    if mastered.is_empty() {
        recommendations.push("Focus on mastering at least one topic to build confidence".to_string());
    }

    if let Some(style) = style {
        recommendations.push(format!("Continue utilizing your {style} learning style"));
    }

    recommendations
}
