use crate::error::ValidationError;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical column names with the localized header aliases legacy wordlist
/// files use, in required order.
const COLUMNS: [(&str, &str); 4] = [
    ("word", "単語"),
    ("meaning", "意味"),
    ("example_sentence", "例文"),
    ("translation", "和訳"),
];

/// One validated wordlist row, before bank ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub word: String,
    pub meaning: String,
    pub example_sentence: String,
    pub translation: String,
}

pub fn find_wordlists(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "csv"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_wordlist(path: &Path) -> Result<Vec<WordRow>, ValidationError> {
    let bytes = fs::read(path)?;
    let content = decode(&bytes)?;
    parse_wordlist(&content)
}

/// Strict UTF-8 first, then Shift_JIS for legacy spreadsheet exports.
pub fn decode(bytes: &[u8]) -> Result<String, ValidationError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.trim_start_matches('\u{feff}').to_string());
    }
    let (text, _, had_errors) = encoding_rs::SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err(ValidationError::Encoding);
    }
    Ok(text.trim_start_matches('\u{feff}').to_owned())
}

pub fn parse_wordlist(content: &str) -> Result<Vec<WordRow>, ValidationError> {
    let mut lines = content.lines();
    let header = lines.next().map(parse_fields).unwrap_or_default();

    let mut indices = [0usize; 4];
    let mut missing = Vec::new();
    for (slot, (name, alias)) in COLUMNS.iter().enumerate() {
        match header.iter().position(|h| {
            let h = h.trim();
            h == *name || h == *alias
        }) {
            Some(i) => indices[slot] = i,
            None => missing.push(*name),
        }
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing.join(", ")));
    }

    let width = indices.iter().copied().max().unwrap_or(0);
    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields(line);
        if fields.len() <= width {
            continue;
        }
        let row = WordRow {
            word: fields[indices[0]].trim().to_string(),
            meaning: fields[indices[1]].trim().to_string(),
            example_sentence: fields[indices[2]].trim().to_string(),
            translation: fields[indices[3]].trim().to_string(),
        };
        // A row without an example sentence has nothing to reorder.
        if row.example_sentence.is_empty() {
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Split one CSV line into fields, honoring quotes and doubled-quote escapes.
pub fn parse_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }
    fields.push(current);
    fields
}
