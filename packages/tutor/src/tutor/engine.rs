use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tutor_algo::{
    adjust_level, average_scores, grade, performance_trend, profile_recommendations,
    quiz_recommendations, sample_questions, scores_by_subject, AnswerValue, Difficulty,
    LearningStyle,
};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::content::ContentProvider;
use crate::error::TutorError;
use crate::tutor::config::TutorConfig;
use crate::tutor::store::ProfileStore;
use crate::tutor::style::{dominant_style, explanation_for};
use crate::tutor::types::*;

pub struct TutorEngine {
    config: TutorConfig,
    content: Arc<dyn ContentProvider>,
    clock: Arc<dyn Clock>,
    profiles: ProfileStore,
    rng: Mutex<ChaCha8Rng>,
}

impl TutorEngine {
    pub fn new(config: TutorConfig, content: Arc<dyn ContentProvider>) -> Self {
        let seed = config.rng_seed.unwrap_or_else(rand::random);
        Self {
            config,
            content,
            clock: Arc::new(SystemClock),
            profiles: ProfileStore::new(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn content(&self) -> &Arc<dyn ContentProvider> {
        &self.content
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn create_profile(&self, learner_id: &str, name: &str) -> Result<(), TutorError> {
        let profile = LearnerProfile::new(name, self.content.subjects(), self.clock.now());
        if let Err(err) = self.profiles.insert(learner_id, profile) {
            tracing::warn!(learner_id = %learner_id, "duplicate profile creation rejected");
            return Err(err);
        }
        tracing::info!(learner_id = %learner_id, name = %name, "learner profile created");
        Ok(())
    }

    pub fn profile_snapshot(&self, learner_id: &str) -> Result<LearnerProfile, TutorError> {
        self.profiles.with_profile(learner_id, Clone::clone)
    }

    pub fn generate_quiz(&self, learner_id: &str, subject: &str) -> Result<Quiz, TutorError> {
        self.profiles.with_profile_mut(learner_id, |profile| {
            let level = self.subject_level(profile, subject)?;
            let quiz = self.draw_quiz(subject, level);
            tracing::debug!(
                learner_id = %learner_id,
                subject = %subject,
                level = %level,
                questions = quiz.len(),
                "quiz generated"
            );

            profile
                .pending_quizzes
                .insert(subject.to_string(), quiz.clone());
            profile.touch(self.clock.now());
            Ok(quiz)
        })
    }

    /// Grades `answers` against the subject's pending quiz, drawing a fresh
    /// one when nothing is pending, and folds the result into the profile.
    pub fn evaluate_quiz(
        &self,
        learner_id: &str,
        subject: &str,
        answers: Vec<AnswerValue>,
    ) -> Result<QuizEvaluation, TutorError> {
        self.profiles.with_profile_mut(learner_id, |profile| {
            let level = self.subject_level(profile, subject)?;

            let quiz = match profile.pending_quizzes.get(subject) {
                Some(pending) => pending.clone(),
                None => {
                    tracing::debug!(
                        learner_id = %learner_id,
                        subject = %subject,
                        "no pending quiz, drawing one for evaluation"
                    );
                    self.draw_quiz(subject, level)
                }
            };

            if answers.len() != quiz.len() {
                tracing::warn!(
                    learner_id = %learner_id,
                    subject = %subject,
                    expected = quiz.len(),
                    supplied = answers.len(),
                    "answer count does not match quiz"
                );
                return Err(TutorError::InvalidArgument(format!(
                    "expected {} answers for {} quiz, got {}",
                    quiz.len(),
                    subject,
                    answers.len()
                )));
            }

            let graded = grade(&quiz.questions, &answers);
            let transition = adjust_level(level, graded.score, &self.config.level);

            profile
                .current_level
                .insert(subject.to_string(), transition.next);
            if transition.mastered_now && profile.topics_mastered.insert(subject.to_string()) {
                tracing::info!(learner_id = %learner_id, subject = %subject, "subject mastered");
            }

            let now = self.clock.now();
            profile.pending_quizzes.remove(subject);
            profile.quiz_attempts.push(QuizAttempt {
                quiz_id: quiz.id,
                timestamp: now,
                subject: subject.to_string(),
                level,
                score: graded.score,
                questions: quiz.questions,
                student_answers: answers,
                detailed_responses: graded.details.clone(),
            });
            profile.performance_history.push(PerformanceEntry {
                subject: subject.to_string(),
                score: graded.score,
                level,
                timestamp: now,
            });
            profile.touch(now);

            let recommendations = quiz_recommendations(
                subject,
                graded.score,
                profile.learning_style,
                transition.next,
                &self.config.recommendation,
            );

            tracing::info!(
                learner_id = %learner_id,
                subject = %subject,
                score = graded.score,
                previous_level = %transition.previous,
                new_level = %transition.next,
                "quiz evaluated"
            );

            Ok(QuizEvaluation {
                quiz_id: quiz.id,
                score: graded.score,
                feedback: graded.feedback,
                previous_level: transition.previous,
                new_level: transition.next,
                detailed_responses: graded.details,
                recommendations,
                mastered: profile.is_mastered(subject),
            })
        })
    }

    pub fn assess_learning_style(
        &self,
        learner_id: &str,
        responses: &[StyleResponse],
    ) -> Result<LearningStyle, TutorError> {
        self.profiles.with_profile_mut(learner_id, |profile| {
            let style = dominant_style(responses);
            profile.learning_style = Some(style);
            profile.touch(self.clock.now());
            tracing::info!(
                learner_id = %learner_id,
                style = %style,
                responses = responses.len(),
                "learning style assessed"
            );
            Ok(style)
        })
    }

    pub fn provide_explanation(
        &self,
        topic: &str,
        concept: &str,
        learner_id: &str,
    ) -> Result<String, TutorError> {
        self.profiles.with_profile_mut(learner_id, |profile| {
            profile.touch(self.clock.now());
            Ok(explanation_for(profile.learning_style, topic, concept))
        })
    }

    pub fn track_progress(&self, learner_id: &str) -> Result<ProgressReport, TutorError> {
        self.profiles.with_profile_mut(learner_id, |profile| {
            profile.touch(self.clock.now());
            let report = self.build_report(profile);
            tracing::debug!(
                learner_id = %learner_id,
                quizzes = report.total_quizzes_taken,
                overall = report.performance_trend.overall.as_str(),
                "progress report built"
            );
            Ok(report)
        })
    }

    fn build_report(&self, profile: &LearnerProfile) -> ProgressReport {
        let history = profile.scored_history();
        let grouped = scores_by_subject(&history);
        let averages = average_scores(&grouped);
        let trend = performance_trend(&grouped, &self.config.trend);
        let recommendations = profile_recommendations(
            &profile.topics_mastered,
            &averages,
            profile.learning_style,
            &self.config.recommendation,
        );

        ProgressReport {
            name: profile.name.clone(),
            learning_style: profile.learning_style,
            current_levels: self.current_levels(profile),
            topics_mastered: profile.topics_mastered.iter().cloned().collect(),
            total_quizzes_taken: profile.quiz_attempts.len(),
            average_scores: averages,
            performance_trend: trend,
            last_activity: profile.last_activity,
            recommendations,
        }
    }

    /// Recorded levels plus easy for catalog subjects the profile predates.
    fn current_levels(&self, profile: &LearnerProfile) -> BTreeMap<String, Difficulty> {
        let mut levels = profile.current_level.clone();
        for subject in self.content.subjects() {
            levels.entry(subject).or_default();
        }
        levels
    }

    fn subject_level(
        &self,
        profile: &LearnerProfile,
        subject: &str,
    ) -> Result<Difficulty, TutorError> {
        if !self.content.has_subject(subject) {
            tracing::warn!(subject = %subject, "unknown subject requested");
            return Err(TutorError::unknown_subject(subject));
        }
        // Subjects added to the catalog after the profile was created start at easy.
        Ok(profile.level_for(subject).unwrap_or_default())
    }

    fn draw_quiz(&self, subject: &str, level: Difficulty) -> Quiz {
        let available = self.content.questions(subject, level);
        let questions = {
            let mut rng = self.rng.lock();
            sample_questions(&available, self.config.quiz_size, &mut *rng)
        };
        Quiz {
            id: Uuid::new_v4(),
            subject: subject.to_string(),
            level,
            questions,
        }
    }
}
