//! Property-Based Tests for the adaptive state machine
//!
//! Tests the following invariants:
//! - Transition table: every (pre-level, score) pair maps as documented
//! - Mastery monotonicity: once mastered, no later quiz unsets it
//! - Subject isolation: a subject's average and trend ignore other subjects
//! - History growth: one entry and one attempt per evaluation

use proptest::prelude::*;

use adaptive_tutor::{AnswerValue, Difficulty};
use tutor_algo::{
    adjust_level, average_scores, performance_trend, scores_by_subject, LevelPolicy, ScoredEntry,
    TrendParams,
};

mod common;
use common::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn arb_score() -> impl Strategy<Value = f64> {
    (0u32..=1000u32).prop_map(|v| v as f64 / 10.0)
}

fn expected_next(level: Difficulty, score: f64) -> (Difficulty, bool) {
    if score >= 80.0 {
        match level {
            Difficulty::Easy => (Difficulty::Medium, false),
            Difficulty::Medium => (Difficulty::Hard, false),
            Difficulty::Hard => (Difficulty::Hard, true),
        }
    } else if score <= 30.0 && level != Difficulty::Easy {
        (Difficulty::Easy, false)
    } else {
        (level, false)
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn transition_matches_table(level in arb_difficulty(), score in arb_score()) {
        let transition = adjust_level(level, score, &LevelPolicy::default());
        let (next, mastered) = expected_next(level, score);
        prop_assert_eq!(transition.previous, level);
        prop_assert_eq!(transition.next, next);
        prop_assert_eq!(transition.mastered_now, mastered);
    }

    #[test]
    fn hard_never_drops_on_middling_scores(score in 30.1f64..80.0f64) {
        let transition = adjust_level(Difficulty::Hard, score, &LevelPolicy::default());
        prop_assert_eq!(transition.next, Difficulty::Hard);
        prop_assert!(!transition.mastered_now);
    }

    #[test]
    fn subject_figures_ignore_other_subjects(
        math in prop::collection::vec(arb_score(), 0..8),
        physics in prop::collection::vec(arb_score(), 0..8),
        seed in any::<u64>(),
    ) {
        let params = TrendParams::default();

        let grouped_alone = scores_by_subject(
            &math.iter().map(|s| ScoredEntry::new("math", *s)).collect::<Vec<_>>(),
        );

        // Interleave physics entries between math entries in a seed-dependent way.
        let mut mixed = Vec::new();
        let mut physics_iter = physics.iter();
        for (i, score) in math.iter().enumerate() {
            if (seed >> (i % 64)) & 1 == 1 {
                if let Some(p) = physics_iter.next() {
                    mixed.push(ScoredEntry::new("physics", *p));
                }
            }
            mixed.push(ScoredEntry::new("math", *score));
        }
        mixed.extend(physics_iter.map(|p| ScoredEntry::new("physics", *p)));
        let grouped_mixed = scores_by_subject(&mixed);

        let alone_avg = average_scores(&grouped_alone);
        let mixed_avg = average_scores(&grouped_mixed);
        prop_assert_eq!(alone_avg.get("math"), mixed_avg.get("math"));

        let alone_trend = performance_trend(&grouped_alone, &params);
        let mixed_trend = performance_trend(&grouped_mixed, &params);
        prop_assert_eq!(alone_trend.subjects.get("math"), mixed_trend.subjects.get("math"));
    }

    #[test]
    fn mastery_is_monotonic(outcomes in prop::collection::vec(any::<bool>(), 1..12)) {
        let (engine, _clock) = test_engine();
        engine.create_profile("ada", "Ada").unwrap();
        promote_to(&engine, "ada", "math", Difficulty::Hard);

        let answers = correct_answers(&engine, "ada", "math");
        let first = engine.evaluate_quiz("ada", "math", answers).unwrap();
        prop_assert!(first.mastered);

        let mut expected_len = engine.profile_snapshot("ada").unwrap().performance_history.len();
        for correct in outcomes {
            let answers = if correct {
                correct_answers(&engine, "ada", "math")
            } else {
                wrong_answers(&engine, "ada", "math")
            };
            let result = engine.evaluate_quiz("ada", "math", answers).unwrap();
            prop_assert!(result.mastered);

            expected_len += 1;
            let profile = engine.profile_snapshot("ada").unwrap();
            prop_assert_eq!(profile.performance_history.len(), expected_len);
            prop_assert_eq!(profile.quiz_attempts.len(), expected_len);
            prop_assert!(profile.is_mastered("math"));
        }
    }

    #[test]
    fn wrong_typed_answers_never_score(n in -1000i64..1000i64) {
        let (engine, _clock) = test_engine();
        engine.create_profile("ada", "Ada").unwrap();
        engine.generate_quiz("ada", "physics").unwrap();
        let result = engine
            .evaluate_quiz("ada", "physics", vec![AnswerValue::from(n)])
            .unwrap();
        prop_assert_eq!(result.score, 0.0);
    }
}
