use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate to a display-cell budget, appending "..." when anything is cut.
/// Width-aware so CJK translations don't overflow their panel.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    let mut out = out.trim_end().to_string();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_untouched() {
        assert_eq!(truncate_to_width("short", 20), "short");
    }

    #[test]
    fn test_exact_width_untouched() {
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let result = truncate_to_width("a very long sentence here", 10);
        assert_eq!(result, "a very...");
        assert!(display_width(&result) <= 10);
    }

    #[test]
    fn test_wide_chars_counted_by_cells() {
        // Each CJK char is two cells wide.
        assert_eq!(display_width("私は猫"), 6);
        let result = truncate_to_width("私は猫が好きです", 9);
        assert!(display_width(&result) <= 9);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(truncate_to_width("", 10), "");
    }
}
