use tutor_algo::LearningStyle;

use crate::tutor::types::StyleResponse;

/// Majority vote over questionnaire responses.
///
/// Missing or unrecognised preferences count for nothing. Ties, including
/// the all-zero case, go to the earlier style in
/// [`LearningStyle::PRIORITY`].
pub fn dominant_style(responses: &[StyleResponse]) -> LearningStyle {
    let mut counts = [0usize; 3];
    for response in responses {
        let style = response
            .preference
            .as_deref()
            .and_then(LearningStyle::from_preference);
        if let Some(style) = style {
            if let Some(idx) = LearningStyle::PRIORITY.iter().position(|s| *s == style) {
                counts[idx] += 1;
            }
        }
    }

    let mut best = 0;
    for idx in 1..counts.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    LearningStyle::PRIORITY[best]
}

pub fn explanation_for(style: Option<LearningStyle>, topic: &str, concept: &str) -> String {
    match style {
        Some(LearningStyle::Visual) => {
            format!("Here's a visual representation of {concept} in {topic}...")
        }
        Some(LearningStyle::Auditory) => {
            format!("Let me explain {concept} in {topic} step by step...")
        }
        Some(LearningStyle::Kinesthetic) => {
            format!("Let's work through {concept} in {topic} with some hands-on examples...")
        }
        None => "Here's a general explanation...".to_string(),
    }
}
