use crate::models::Phase;
use thiserror::Error;

/// Fatal for the current wordlist load; no session state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("wordlist is missing required columns: {0}")]
    MissingColumns(String),
    #[error("wordlist is neither valid UTF-8 nor Shift_JIS text")]
    Encoding,
    #[error("wordlist contains no usable rows")]
    EmptyBank,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Caller-contract violations. Every failed transition leaves the engine
/// state exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("token index {index} out of range ({len} remaining)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("operation not valid in phase {phase:?}")]
    InvalidPhase { phase: Phase },
    #[error("no wordlist loaded")]
    BankNotLoaded,
}

/// Produced by the availability gate before any session state exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("this app is unavailable between {start}:00 and {end}:00")]
    Blackout { start: u32, end: u32 },
    #[error("this app's usage period ended on {0}")]
    Expired(chrono::NaiveDate),
}
