use crate::bank::SentenceBank;
use crate::error::EngineError;
use crate::logger;
use crate::models::{
    AnswerResult, FORMAT_REORDER, HistoryEntry, Phase, QuestionState, RunState, SessionState,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// What the caller gets back from `grade`, so the rendering layer can show
/// feedback without reaching into already-discarded question state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    pub result: AnswerResult,
    pub sentence: String,
    pub elapsed_seconds: u64,
}

/// The quiz state machine: menu → quiz → done → finished, with a quiz→quiz
/// self-loop per question and done→menu as the "again" back-edge.
///
/// Every method is one atomic transition; on error the state is untouched.
/// The randomness source is injected so tests can drive deterministic draws.
#[derive(Debug)]
pub struct QuizEngine<R: Rng = StdRng> {
    bank: Option<SentenceBank>,
    session: SessionState,
    run: Option<RunState>,
    question: Option<QuestionState>,
    rng: R,
}

impl QuizEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for QuizEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            bank: None,
            session: SessionState::new(),
            run: None,
            question: None,
            rng,
        }
    }

    /// Install a freshly loaded wordlist. Any in-flight run is dropped, but
    /// session history and cumulative time survive a re-load.
    pub fn load_bank(&mut self, bank: SentenceBank) {
        logger::log(&format!("bank loaded: {} records", bank.len()));
        self.bank = Some(bank);
        self.run = None;
        self.question = None;
        self.session.phase = Phase::Menu;
    }

    pub fn bank(&self) -> Option<&SentenceBank> {
        self.bank.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn run(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    pub fn question(&self) -> Option<&QuestionState> {
        self.question.as_ref()
    }

    /// Wall seconds since the current run started.
    pub fn run_elapsed_seconds(&self) -> u64 {
        self.run
            .as_ref()
            .map(|r| r.run_started_at.elapsed().as_secs())
            .unwrap_or(0)
    }

    /// menu → quiz: sample a pool of `n` (clamped) questions and draw the
    /// first one.
    pub fn start_run(&mut self, n: usize) -> Result<(), EngineError> {
        self.expect_phase(Phase::Menu)?;
        let bank = self.bank.as_ref().ok_or(EngineError::BankNotLoaded)?;
        let pool = bank.sample(n, &mut self.rng);
        let total = pool.len();
        self.run = Some(RunState {
            pool,
            total,
            answered: 0,
            run_started_at: Instant::now(),
            cumulative_before_run: self.session.cumulative_elapsed_seconds,
        });
        self.session.phase = Phase::Quiz;
        logger::log(&format!("run started: {} questions", total));
        self.draw_next();
        Ok(())
    }

    /// quiz → quiz (next question) or quiz → done (pool exhausted).
    fn draw_next(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.pool.is_empty() {
            self.question = None;
            self.session.phase = Phase::Done;
            return;
        }
        let i = self.rng.gen_range(0..run.pool.len());
        let record = run.pool.swap_remove(i);
        let target_tokens: Vec<String> = record
            .example_sentence
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let mut remaining_tokens = target_tokens.clone();
        remaining_tokens.shuffle(&mut self.rng);
        self.question = Some(QuestionState {
            record,
            target_tokens,
            remaining_tokens,
            selected_tokens: Vec::new(),
            started_at: Instant::now(),
        });
        self.session.phase = Phase::Quiz;
    }

    /// Move the token at `token_index` from the remaining row to the end of
    /// the selected sequence. The index refers to a position, not a value.
    pub fn select(&mut self, token_index: usize) -> Result<(), EngineError> {
        let q = self.active_question_mut()?;
        if token_index >= q.remaining_tokens.len() {
            return Err(EngineError::IndexOutOfRange {
                index: token_index,
                len: q.remaining_tokens.len(),
            });
        }
        let token = q.remaining_tokens.remove(token_index);
        q.selected_tokens.push(token);
        Ok(())
    }

    /// Put the most recently selected token back. Appends to the remaining
    /// row rather than reinserting at its old position; a no-op when nothing
    /// is selected.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        let q = self.active_question_mut()?;
        if let Some(token) = q.selected_tokens.pop() {
            q.remaining_tokens.push(token);
        }
        Ok(())
    }

    /// Discard the current shuffle and selection and deal a fresh permutation
    /// of the same sentence.
    pub fn retry(&mut self) -> Result<(), EngineError> {
        let phase = self.session.phase;
        if phase != Phase::Quiz {
            return Err(EngineError::InvalidPhase { phase });
        }
        let Some(q) = self.question.as_mut() else {
            return Err(EngineError::InvalidPhase { phase });
        };
        q.remaining_tokens = q.target_tokens.clone();
        q.remaining_tokens.shuffle(&mut self.rng);
        q.selected_tokens.clear();
        Ok(())
    }

    /// Score the current ordering, record history and timing, and advance to
    /// the next question or to done.
    pub fn grade(&mut self) -> Result<GradeOutcome, EngineError> {
        let phase = self.session.phase;
        if phase != Phase::Quiz {
            return Err(EngineError::InvalidPhase { phase });
        }
        let Some(q) = self.question.take() else {
            return Err(EngineError::InvalidPhase { phase });
        };
        let Some(run) = self.run.as_mut() else {
            self.question = Some(q);
            return Err(EngineError::InvalidPhase { phase });
        };

        let elapsed_seconds = q.started_at.elapsed().as_secs();
        let result = if q.selected_tokens == q.target_tokens {
            AnswerResult::Correct
        } else {
            AnswerResult::Incorrect
        };
        let sentence = q.record.example_sentence.trim().to_string();

        self.session.history.push(HistoryEntry {
            format: FORMAT_REORDER.to_string(),
            sentence: sentence.clone(),
            result,
            elapsed_seconds,
        });
        self.session.cumulative_elapsed_seconds += elapsed_seconds;
        run.answered += 1;
        logger::log(&format!(
            "graded {}/{}: {} ({}s)",
            run.answered,
            run.total,
            result.as_str(),
            elapsed_seconds
        ));

        if run.answered >= run.total {
            self.session.phase = Phase::Done;
        } else {
            self.draw_next();
        }

        Ok(GradeOutcome {
            result,
            sentence,
            elapsed_seconds,
        })
    }

    /// done → menu ("again"): drop run and question state, keep the session.
    pub fn finish_run(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Done)?;
        self.run = None;
        self.question = None;
        self.session.phase = Phase::Menu;
        Ok(())
    }

    /// done → finished: the end-of-session screen.
    pub fn finish(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Done)?;
        self.run = None;
        self.question = None;
        self.session.phase = Phase::Finished;
        Ok(())
    }

    /// Full reset from done or finished: history, cumulative time and user
    /// name are cleared. The loaded bank is retained so the learner can start
    /// over without re-selecting a file.
    pub fn terminate(&mut self) -> Result<(), EngineError> {
        match self.session.phase {
            Phase::Done | Phase::Finished => {}
            phase => return Err(EngineError::InvalidPhase { phase }),
        }
        self.run = None;
        self.question = None;
        self.session.reset();
        logger::log("session terminated");
        Ok(())
    }

    /// quiz → menu: abandon the run in flight. Session state survives.
    pub fn abandon_run(&mut self) -> Result<(), EngineError> {
        self.expect_phase(Phase::Quiz)?;
        self.run = None;
        self.question = None;
        self.session.phase = Phase::Menu;
        Ok(())
    }

    pub fn set_user_name(&mut self, name: &str) {
        self.session.user_name = name.trim().to_string();
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), EngineError> {
        let phase = self.session.phase;
        if phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase { phase })
        }
    }

    fn active_question_mut(&mut self) -> Result<&mut QuestionState, EngineError> {
        let phase = self.session.phase;
        if phase != Phase::Quiz {
            return Err(EngineError::InvalidPhase { phase });
        }
        self.question
            .as_mut()
            .ok_or(EngineError::InvalidPhase { phase })
    }
}
