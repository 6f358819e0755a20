use crate::csv::WordRow;
use crate::error::ValidationError;
use crate::models::QuestionRecord;
use rand::Rng;
use rand::seq::SliceRandom;

/// The loaded wordlist. Read-only after load; records carry stable ids so
/// duplicate sentences never get confused during pool bookkeeping.
#[derive(Debug, Clone)]
pub struct SentenceBank {
    records: Vec<QuestionRecord>,
}

impl SentenceBank {
    pub fn load(rows: Vec<WordRow>) -> Result<Self, ValidationError> {
        if rows.is_empty() {
            return Err(ValidationError::EmptyBank);
        }
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(id, row)| QuestionRecord {
                id,
                word: row.word,
                meaning: row.meaning,
                example_sentence: row.example_sentence,
                translation: row.translation,
            })
            .collect();
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Fresh uniform draw without replacement. `n` clamps to `1..=len`; each
    /// call draws independently.
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<QuestionRecord> {
        let n = n.max(1).min(self.records.len());
        self.records.choose_multiple(rng, n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rows(n: usize) -> Vec<WordRow> {
        (0..n)
            .map(|i| WordRow {
                word: format!("word{}", i),
                meaning: format!("meaning{}", i),
                example_sentence: format!("sentence number {}", i),
                translation: format!("translation{}", i),
            })
            .collect()
    }

    #[test]
    fn test_load_assigns_sequential_ids() {
        let bank = SentenceBank::load(rows(3)).unwrap();
        let ids: Vec<_> = bank.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_load_rejects_empty() {
        assert!(matches!(
            SentenceBank::load(Vec::new()),
            Err(ValidationError::EmptyBank)
        ));
    }

    #[test]
    fn test_duplicate_rows_get_distinct_ids() {
        let mut duplicated = rows(1);
        duplicated.push(duplicated[0].clone());
        let bank = SentenceBank::load(duplicated).unwrap();
        assert_eq!(bank.len(), 2);
        assert_ne!(bank.records()[0].id, bank.records()[1].id);
    }

    #[test]
    fn test_sample_draws_without_replacement() {
        let bank = SentenceBank::load(rows(10)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = bank.sample(6, &mut rng);
        assert_eq!(drawn.len(), 6);
        let ids: HashSet<_> = drawn.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_sample_clamps_above_bank_size() {
        let bank = SentenceBank::load(rows(5)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(bank.sample(10, &mut rng).len(), 5);
    }

    #[test]
    fn test_sample_clamps_zero_to_one() {
        let bank = SentenceBank::load(rows(5)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(bank.sample(0, &mut rng).len(), 1);
    }

    #[test]
    fn test_sample_is_a_fresh_draw_each_call() {
        let bank = SentenceBank::load(rows(2)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        // Single-record draws from a two-record bank eventually differ.
        let mut seen = HashSet::new();
        for _ in 0..32 {
            seen.insert(bank.sample(1, &mut rng)[0].id);
        }
        assert_eq!(seen.len(), 2);
    }
}
