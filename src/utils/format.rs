use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

/// Format a duration in seconds to "Xh Ym" or "Ym" string
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "now".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", secs)
    }
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Pad to a display width, not a char count. Matters for task names that
/// mix Arabic and Latin script.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_formats() {
        assert_eq!(format_duration_secs(0), "now");
        assert_eq!(format_duration_secs(-5), "now");
        assert_eq!(format_duration_secs(42), "42s");
        assert_eq!(format_duration_secs(60), "1m");
        assert_eq!(format_duration_secs(3661), "1h 1m");
    }

    #[test]
    fn countdown_at_day_boundary() {
        // One second before midnight through to the next midnight
        assert_eq!(format_duration_secs(86_399), "23h 59m");
        assert_eq!(format_duration_secs(86_400), "24h 0m");
    }

    #[test]
    fn time_formats_24h() {
        let t = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_time(t), "23:59");
        let t = NaiveTime::from_hms_opt(5, 3, 0).unwrap();
        assert_eq!(format_time(t), "05:03");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_display("abc", 5), "abc  ");
        assert_eq!(pad_display("abcdef", 3), "abcdef");
        // Arabic letters are single-width but multi-byte
        assert!(pad_display("سجود", 6).len() > 6);
        assert_eq!(UnicodeWidthStr::width(pad_display("سجود", 6).as_str()), 6);
    }

    #[test]
    fn bars_clamp() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(9, 4, 4), "████");
    }
}
