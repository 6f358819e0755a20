pub mod app;
pub mod bank;
pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod export;
pub mod gate;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use bank::SentenceBank;
pub use config::AppConfig;
pub use engine::{GradeOutcome, QuizEngine};
pub use error::{EngineError, GateError, ValidationError};
pub use export::{export_history, human_time};
pub use gate::AvailabilityGate;
pub use models::{
    AnswerResult, HistoryEntry, Phase, QuestionRecord, QuestionState, RunState, SessionState,
};
