pub mod config;
pub mod engine;
pub mod store;
pub mod style;
pub mod types;

pub use config::TutorConfig;
pub use engine::TutorEngine;
pub use store::ProfileStore;
pub use types::*;
