use crate::gate::AvailabilityGate;
use crate::logger;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "reorder-quiz.json";

/// Optional on-disk overrides for the gate window, expiry and menu presets.
/// A missing file means compiled defaults; a malformed one is logged and
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub wordlist_dir: String,
    pub preset_counts: Vec<usize>,
    pub blackout_start_hour: u32,
    pub blackout_end_hour: u32,
    pub expires_on: NaiveDate,
    pub utc_offset_hours: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wordlist_dir: "wordlists".to_string(),
            preset_counts: vec![5, 10],
            blackout_start_hour: 0,
            blackout_end_hour: 6,
            expires_on: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
            utc_offset_hours: 9,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                logger::log(&format!("ignoring malformed config {:?}: {}", path, e));
                Self::default()
            }
        }
    }

    pub fn gate(&self) -> AvailabilityGate {
        AvailabilityGate {
            blackout_start_hour: self.blackout_start_hour,
            blackout_end_hour: self.blackout_end_hour,
            expires_on: self.expires_on,
            utc_offset_hours: self.utc_offset_hours,
        }
    }
}
