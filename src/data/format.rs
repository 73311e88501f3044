//! Text and number formatting for display.

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max` characters followed by an ellipsis.
///
/// Text that already fits is returned unchanged. Counts characters, not
/// bytes, so multi-byte channel names are never split mid-codepoint.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max).collect();
        out.push_str(ELLIPSIS);
        out
    }
}

/// Format an integer with thousands separators (e.g., 1234567 -> "1,234,567").
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a 0..1 ratio as a percentage with one decimal place ("51.2%").
pub fn format_percent_precise(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Format a 0..1 ratio as a whole percentage ("92%").
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("alpha", 15), "alpha");
        assert_eq!(truncate("exactly-twelve", 14), "exactly-twelve");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("a very long channel name", 15), "a very long cha...");
        assert_eq!(truncate("abcdef", 0), "...");
    }

    #[test]
    fn test_truncate_is_idempotent() {
        for text in ["short", "a message that certainly exceeds the limit", "ünïcödé ñame here"] {
            for max in [0, 5, 12, 50] {
                let once = truncate(text, max);
                assert_eq!(truncate(&once, max), once, "{:?} at {}", text, max);
            }
        }
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("ünïcödé", 3), "ünï...");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(100000), "100,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent_precise(0.512), "51.2%");
        assert_eq!(format_percent_precise(0.0), "0.0%");
        assert_eq!(format_percent(0.92), "92%");
        assert_eq!(format_percent(0.875), "88%");
        assert_eq!(format_percent(1.0), "100%");
    }
}
