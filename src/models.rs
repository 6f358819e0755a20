use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Question format tag carried on every history row.
pub const FORMAT_REORDER: &str = "reorder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Quiz,
    Done,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerResult {
    Correct,
    Incorrect,
}

impl AnswerResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerResult::Correct => "correct",
            AnswerResult::Incorrect => "incorrect",
        }
    }
}

/// One row of the loaded wordlist. The id is assigned at load time and is the
/// identity used for pool membership, so duplicate rows stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: usize,
    pub word: String,
    pub meaning: String,
    pub example_sentence: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub format: String,
    pub sentence: String,
    pub result: AnswerResult,
    pub elapsed_seconds: u64,
}

/// State of the question currently on screen.
///
/// Invariant: the multiset of `remaining_tokens` plus `selected_tokens`
/// always equals `target_tokens`. Selection moves tokens by position, never
/// by value, so sentences with duplicate words grade unambiguously.
#[derive(Debug, Clone)]
pub struct QuestionState {
    pub record: QuestionRecord,
    pub target_tokens: Vec<String>,
    pub remaining_tokens: Vec<String>,
    pub selected_tokens: Vec<String>,
    pub started_at: Instant,
}

/// State of one run (a batch of sampled questions).
#[derive(Debug, Clone)]
pub struct RunState {
    pub pool: Vec<QuestionRecord>,
    pub total: usize,
    pub answered: usize,
    pub run_started_at: Instant,
    pub cumulative_before_run: u64,
}

/// Session-level state. Survives across runs ("again") and is cleared only by
/// an explicit terminate.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    pub cumulative_elapsed_seconds: u64,
    pub history: Vec<HistoryEntry>,
    pub user_name: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            cumulative_elapsed_seconds: 0,
            history: Vec::new(),
            user_name: String::new(),
        }
    }

    /// Full reset: history, cumulative time and user name are all dropped.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
