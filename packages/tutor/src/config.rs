use std::path::PathBuf;

use crate::tutor::TutorConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub content_path: Option<PathBuf>,
    pub tutor: TutorConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let content_path = std::env::var("TUTOR_CONTENT_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            content_path,
            tutor: TutorConfig::from_env(),
        }
    }
}
