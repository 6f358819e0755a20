use crate::bank::SentenceBank;
use crate::config::AppConfig;
use crate::csv;
use crate::engine::{GradeOutcome, QuizEngine};
use crate::export::export_history;
use crate::gate::AvailabilityGate;
use crate::logger;
use crate::models::Phase;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// UI-level state wrapped around the engine: menu selections, input buffers,
/// the transient grade banner. All quiz semantics live in the engine; this
/// layer only translates key events into engine calls.
pub struct App<R: Rng = StdRng> {
    pub engine: QuizEngine<R>,
    pub gate: AvailabilityGate,
    pub files: Vec<PathBuf>,
    pub selected_file: usize,
    pub focused_panel: usize,
    pub preset_counts: Vec<usize>,
    pub count_choice: usize,
    pub custom_count: String,
    pub name_buffer: String,
    pub highlighted: usize,
    pub banner: Option<GradeOutcome>,
    pub status: Option<String>,
    pub save_status: Option<String>,
    pub should_quit: bool,
}

impl App<StdRng> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_engine(config, QuizEngine::new())
    }
}

impl<R: Rng> App<R> {
    pub fn with_engine(config: &AppConfig, engine: QuizEngine<R>) -> Self {
        Self {
            engine,
            gate: config.gate(),
            files: csv::find_wordlists(Path::new(&config.wordlist_dir)),
            selected_file: 0,
            focused_panel: 0,
            preset_counts: config.preset_counts.clone(),
            count_choice: 0,
            custom_count: String::new(),
            name_buffer: String::new(),
            highlighted: 0,
            banner: None,
            status: None,
            save_status: None,
            should_quit: false,
        }
    }

    /// Menu entries for the question-count panel: presets plus a custom slot.
    pub fn count_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .preset_counts
            .iter()
            .map(|n| format!("{} questions", n))
            .collect();
        if self.custom_count.is_empty() {
            labels.push("custom: _".to_string());
        } else {
            labels.push(format!("custom: {}", self.custom_count));
        }
        labels
    }

    pub fn selected_count(&self) -> Option<usize> {
        if self.count_choice < self.preset_counts.len() {
            Some(self.preset_counts[self.count_choice])
        } else {
            self.custom_count.parse().ok().filter(|n| *n > 0)
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.engine.phase() {
            Phase::Menu => self.handle_menu_key(key),
            Phase::Quiz => self.handle_quiz_key(key),
            Phase::Done => self.handle_done_key(key),
            Phase::Finished => self.handle_finished_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let custom_active =
            self.focused_panel == 1 && self.count_choice == self.preset_counts.len();
        match key.code {
            KeyCode::Char(c) if custom_active && c.is_ascii_digit() => {
                if self.custom_count.len() < 3 {
                    self.custom_count.push(c);
                }
            }
            KeyCode::Backspace if custom_active => {
                self.custom_count.pop();
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.focused_panel = 0,
            KeyCode::Char('2') => self.focused_panel = 1,
            KeyCode::Tab => self.focused_panel = 1 - self.focused_panel,
            KeyCode::Up => {
                if self.focused_panel == 0 {
                    self.selected_file = self.selected_file.saturating_sub(1);
                } else {
                    self.count_choice = self.count_choice.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_panel == 0 {
                    if self.selected_file < self.files.len().saturating_sub(1) {
                        self.selected_file += 1;
                    }
                } else if self.count_choice < self.preset_counts.len() {
                    self.count_choice += 1;
                }
            }
            KeyCode::Enter => {
                if self.focused_panel == 0 {
                    self.load_selected_file();
                } else {
                    self.begin_run();
                }
            }
            _ => {}
        }
    }

    fn load_selected_file(&mut self) {
        let Some(path) = self.files.get(self.selected_file).cloned() else {
            self.status = Some("No wordlist files found".to_string());
            return;
        };
        match csv::load_wordlist(&path).and_then(SentenceBank::load) {
            Ok(bank) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                self.status = Some(format!("Loaded {} sentences from {}", bank.len(), name));
                self.engine.load_bank(bank);
                self.focused_panel = 1;
            }
            Err(e) => {
                logger::log(&format!("wordlist load failed: {}", e));
                self.status = Some(e.to_string());
            }
        }
    }

    fn begin_run(&mut self) {
        let Some(n) = self.selected_count() else {
            self.status = Some("Enter a question count first".to_string());
            return;
        };
        match self.engine.start_run(n) {
            Ok(()) => {
                self.banner = None;
                self.highlighted = 0;
                self.status = None;
                self.save_status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn handle_quiz_key(&mut self, key: KeyEvent) {
        if self.banner.is_some() {
            // Any key dismisses the result banner first.
            self.banner = None;
            if key.code == KeyCode::Esc {
                let _ = self.engine.abandon_run();
            }
            return;
        }
        match key.code {
            KeyCode::Esc => {
                let _ = self.engine.abandon_run();
            }
            KeyCode::Left => self.highlighted = self.highlighted.saturating_sub(1),
            KeyCode::Right => {
                let len = self.remaining_len();
                if len > 0 && self.highlighted < len - 1 {
                    self.highlighted += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.remaining_len() == 0 {
                    self.grade();
                } else if self.engine.select(self.highlighted).is_ok() {
                    self.clamp_highlight();
                }
            }
            KeyCode::Char('u') => {
                let _ = self.engine.undo();
                self.clamp_highlight();
            }
            KeyCode::Char('r') => {
                let _ = self.engine.retry();
                self.highlighted = 0;
            }
            KeyCode::Char('g') => self.grade(),
            _ => {}
        }
    }

    fn grade(&mut self) {
        if let Ok(outcome) = self.engine.grade() {
            self.banner = Some(outcome);
            self.highlighted = 0;
        }
    }

    fn remaining_len(&self) -> usize {
        self.engine
            .question()
            .map(|q| q.remaining_tokens.len())
            .unwrap_or(0)
    }

    fn clamp_highlight(&mut self) {
        let len = self.remaining_len();
        if len == 0 {
            self.highlighted = 0;
        } else if self.highlighted >= len {
            self.highlighted = len - 1;
        }
    }

    fn handle_done_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save_history(),
                KeyCode::Char('a') => {
                    self.engine.set_user_name(&self.name_buffer);
                    let _ = self.engine.finish_run();
                    self.banner = None;
                    self.status = None;
                    self.save_status = None;
                }
                KeyCode::Char('f') => {
                    self.engine.set_user_name(&self.name_buffer);
                    let _ = self.engine.finish();
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.name_buffer.push(c),
            KeyCode::Backspace => {
                self.name_buffer.pop();
            }
            _ => {}
        }
    }

    fn save_history(&mut self) {
        self.engine.set_user_name(&self.name_buffer);
        let (filename, bytes) = export_history(self.engine.session(), self.gate.local_now());
        match std::fs::write(&filename, &bytes) {
            Ok(()) => {
                logger::log(&format!("history exported to {}", filename));
                self.save_status = Some(format!("Saved {}", filename));
            }
            Err(e) => self.save_status = Some(format!("Save failed: {}", e)),
        }
    }

    fn handle_finished_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let _ = self.engine.terminate();
                self.name_buffer.clear();
                self.banner = None;
                self.status = None;
                self.save_status = None;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::WordRow;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn bank_of(sentences: &[&str]) -> SentenceBank {
        let rows = sentences
            .iter()
            .enumerate()
            .map(|(i, s)| WordRow {
                word: format!("word{}", i),
                meaning: format!("meaning{}", i),
                example_sentence: s.to_string(),
                translation: format!("translation{}", i),
            })
            .collect();
        SentenceBank::load(rows).unwrap()
    }

    fn app_with(sentences: &[&str]) -> App<StdRng> {
        let mut app = App::with_engine(
            &AppConfig::default(),
            QuizEngine::with_rng(StdRng::seed_from_u64(42)),
        );
        app.engine.load_bank(bank_of(sentences));
        app
    }

    fn start_run(app: &mut App<StdRng>, n: usize) {
        app.engine.start_run(n).unwrap();
    }

    #[test]
    fn test_ctrl_c_quits_in_any_phase() {
        let mut app = app_with(&["a b"]);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);

        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_menu_panel_focus_keys() {
        let mut app = app_with(&["a b"]);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.focused_panel, 1);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.focused_panel, 0);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focused_panel, 1);
    }

    #[test]
    fn test_menu_custom_count_digit_entry() {
        let mut app = app_with(&["a b"]);
        app.focused_panel = 1;
        app.count_choice = app.preset_counts.len();

        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.custom_count, "12");
        assert_eq!(app.selected_count(), Some(12));

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.custom_count, "1");
    }

    #[test]
    fn test_menu_custom_count_caps_length() {
        let mut app = app_with(&["a b"]);
        app.focused_panel = 1;
        app.count_choice = app.preset_counts.len();
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('9')));
        }
        assert_eq!(app.custom_count, "999");
    }

    #[test]
    fn test_menu_count_navigation_stops_at_custom_slot() {
        let mut app = app_with(&["a b"]);
        app.focused_panel = 1;
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.count_choice, app.preset_counts.len());
    }

    #[test]
    fn test_menu_start_without_bank_sets_status() {
        let mut app: App<StdRng> = App::with_engine(
            &AppConfig::default(),
            QuizEngine::with_rng(StdRng::seed_from_u64(1)),
        );
        app.focused_panel = 1;
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine.phase(), Phase::Menu);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_menu_enter_starts_run_with_preset() {
        let mut app = app_with(&["a b", "c d", "e f", "g h", "i j"]);
        app.focused_panel = 1;
        app.count_choice = 0; // 5 questions

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.engine.phase(), Phase::Quiz);
        assert_eq!(app.engine.run().unwrap().total, 5);
    }

    #[test]
    fn test_quiz_enter_selects_highlighted_token() {
        let mut app = app_with(&["I like cats"]);
        start_run(&mut app, 1);

        app.handle_key(key(KeyCode::Right));
        let expected = app.engine.question().unwrap().remaining_tokens[1].clone();
        app.handle_key(key(KeyCode::Enter));

        let q = app.engine.question().unwrap();
        assert_eq!(q.selected_tokens, vec![expected]);
        assert_eq!(q.remaining_tokens.len(), 2);
    }

    #[test]
    fn test_quiz_highlight_stays_in_bounds() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);

        for _ in 0..5 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.highlighted, 1);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.highlighted, 0);

        for _ in 0..5 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.highlighted, 0);
    }

    #[test]
    fn test_quiz_undo_key() {
        let mut app = app_with(&["I like cats"]);
        start_run(&mut app, 1);

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('u')));

        let q = app.engine.question().unwrap();
        assert!(q.selected_tokens.is_empty());
        assert_eq!(q.remaining_tokens.len(), 3);
    }

    #[test]
    fn test_quiz_retry_key_resets_highlight() {
        let mut app = app_with(&["I like cats"]);
        start_run(&mut app, 1);

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('r')));

        assert_eq!(app.highlighted, 0);
        let q = app.engine.question().unwrap();
        assert!(q.selected_tokens.is_empty());
        assert_eq!(q.remaining_tokens.len(), 3);
    }

    #[test]
    fn test_quiz_grade_sets_banner() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);

        app.handle_key(key(KeyCode::Char('g')));

        assert!(app.banner.is_some());
        assert_eq!(app.engine.phase(), Phase::Done);
        assert_eq!(app.engine.session().history.len(), 1);
    }

    #[test]
    fn test_quiz_banner_dismissed_by_next_key() {
        let mut app = app_with(&["a b", "c d"]);
        start_run(&mut app, 2);

        app.handle_key(key(KeyCode::Char('g')));
        assert!(app.banner.is_some());

        // First key only clears the banner, no token selected.
        app.handle_key(key(KeyCode::Enter));
        assert!(app.banner.is_none());
        assert!(app.engine.question().unwrap().selected_tokens.is_empty());
    }

    #[test]
    fn test_quiz_enter_grades_when_all_tokens_placed() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.remaining_len(), 0);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.banner.is_some());
        assert_eq!(app.engine.session().history.len(), 1);
    }

    #[test]
    fn test_quiz_esc_abandons_to_menu() {
        let mut app = app_with(&["a b", "c d"]);
        start_run(&mut app, 2);

        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.engine.phase(), Phase::Menu);
        assert!(app.engine.run().is_none());
    }

    #[test]
    fn test_done_typing_builds_name_buffer() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);
        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.engine.phase(), Phase::Done);

        for c in ['A', 'l', 'i', 'c', 'e'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.name_buffer, "Alice");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.name_buffer, "Alic");
    }

    #[test]
    fn test_done_ctrl_a_runs_again_keeping_history() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);
        app.handle_key(key(KeyCode::Char('g')));
        app.name_buffer = "Alice".to_string();

        app.handle_key(ctrl('a'));

        assert_eq!(app.engine.phase(), Phase::Menu);
        assert_eq!(app.engine.session().history.len(), 1);
        assert_eq!(app.engine.session().user_name, "Alice");
    }

    #[test]
    fn test_done_ctrl_f_finishes_session() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);
        app.handle_key(key(KeyCode::Char('g')));

        app.handle_key(ctrl('f'));

        assert_eq!(app.engine.phase(), Phase::Finished);
    }

    #[test]
    fn test_finished_enter_resets_everything() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);
        app.handle_key(key(KeyCode::Char('g')));
        app.name_buffer = "Alice".to_string();
        app.handle_key(ctrl('f'));

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.engine.phase(), Phase::Menu);
        assert!(app.engine.session().history.is_empty());
        assert_eq!(app.engine.session().cumulative_elapsed_seconds, 0);
        assert!(app.name_buffer.is_empty());
    }

    #[test]
    fn test_finished_q_quits() {
        let mut app = app_with(&["a b"]);
        start_run(&mut app, 1);
        app.handle_key(key(KeyCode::Char('g')));
        app.handle_key(ctrl('f'));

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
