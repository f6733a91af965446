use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TutorError {
    #[error("learner not found: {0}")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("learner already exists: {0}")]
    AlreadyExists(String),
}

impl TutorError {
    pub fn unknown_subject(subject: &str) -> Self {
        Self::InvalidArgument(format!("unknown subject: {subject}"))
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content bank has no subjects")]
    Empty,
}
