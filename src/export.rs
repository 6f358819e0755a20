use crate::models::SessionState;
use chrono::{DateTime, FixedOffset};

pub const EXPORT_COLUMNS: [&str; 5] = [
    "format",
    "sentence",
    "result",
    "elapsed_seconds",
    "cumulative_time",
];

/// Render whole seconds as "XmYs" for the cumulative-time column.
pub fn human_time(total_seconds: u64) -> String {
    let m = total_seconds / 60;
    let s = total_seconds % 60;
    format!("{}m{}s", m, s)
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize the session history as a downloadable CSV.
///
/// Returns `(filename, bytes)`. The bytes are UTF-8 with a BOM so legacy
/// spreadsheet tools pick the encoding up. The cumulative-time column carries
/// the session total at export time, identical on every row. The history
/// itself is never touched.
pub fn export_history(session: &SessionState, now: DateTime<FixedOffset>) -> (String, Vec<u8>) {
    let timestamp = now.format("%Y%m%d_%H%M%S");
    let name = session.user_name.trim();
    let filename = if name.is_empty() {
        format!("history_{}.csv", timestamp)
    } else {
        format!("{}_{}.csv", name, timestamp)
    };

    let cumulative = human_time(session.cumulative_elapsed_seconds);
    let mut out = String::from("\u{feff}");
    out.push_str(&EXPORT_COLUMNS.join(","));
    out.push('\n');
    for entry in &session.history {
        out.push_str(&csv_field(&entry.format));
        out.push(',');
        out.push_str(&csv_field(&entry.sentence));
        out.push(',');
        out.push_str(entry.result.as_str());
        out.push(',');
        out.push_str(&entry.elapsed_seconds.to_string());
        out.push(',');
        out.push_str(&csv_field(&cumulative));
        out.push('\n');
    }

    (filename, out.into_bytes())
}
