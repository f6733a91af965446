pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod seed;
pub mod tutor;

pub use clock::{Clock, FixedClock, SystemClock};
pub use content::{ContentBank, ContentProvider};
pub use error::{ContentError, TutorError};
pub use tutor::{TutorConfig, TutorEngine};
pub use tutor_algo::{AnswerValue, Difficulty, LearningStyle, Question};
