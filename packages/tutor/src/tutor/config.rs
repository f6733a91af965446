use serde::{Deserialize, Serialize};
use tutor_algo::{LevelPolicy, RecommendationThresholds, TrendParams, DEFAULT_QUIZ_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorConfig {
    pub quiz_size: usize,
    pub level: LevelPolicy,
    pub trend: TrendParams,
    pub recommendation: RecommendationThresholds,
    /// Fixed seed for quiz sampling; entropy when unset
    pub rng_seed: Option<u64>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            quiz_size: DEFAULT_QUIZ_SIZE,
            level: LevelPolicy::default(),
            trend: TrendParams::default(),
            recommendation: RecommendationThresholds::default(),
            rng_seed: None,
        }
    }
}

impl TutorConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TUTOR_QUIZ_SIZE") {
            match val.trim().parse::<usize>() {
                Ok(size) if size > 0 => self.quiz_size = size,
                _ => tracing::warn!(value = %val, "ignoring invalid TUTOR_QUIZ_SIZE"),
            }
        }
        if let Some(val) = lookup("TUTOR_RNG_SEED") {
            match val.trim().parse::<u64>() {
                Ok(seed) => self.rng_seed = Some(seed),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid TUTOR_RNG_SEED"),
            }
        }
    }
}
