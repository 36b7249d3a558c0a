//! Presentation helpers shared by the browser and the command line

use std::borrow::Cow;
use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Characters of description shown on a list card.
pub const CARD_DESCRIPTION_CHARS: usize = 100;

/// Appended to a truncated description.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to `max_chars` characters plus an ellipsis.
///
/// Counts characters, not bytes. Text that already fits is returned as is.
/// This is display-only; the stored description is never modified.
pub fn truncate_description(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", text.get(..cut).unwrap_or(text))),
        None => Cow::Borrowed(text),
    }
}

/// "January 5, 2024"
pub fn format_date<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%B %-d, %Y").to_string()
}

/// "January 5, 2024, 09:30 AM"
pub fn format_timestamp<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%B %-d, %Y, %I:%M %p").to_string()
}

/// "45 minutes", "1 minute"
pub fn format_duration(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

/// Label for a true/false answer
pub const fn answer_label(is_true: bool) -> &'static str {
    if is_true { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_description("short", 100), "short");
        let exact = "y".repeat(100);
        assert_eq!(truncate_description(&exact, 100), exact.as_str());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "é".repeat(120);
        let truncated = truncate_description(&text, 100);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_date(&at, &Utc), "January 5, 2024");
        assert_eq!(format_timestamp(&at, &Utc), "January 5, 2024, 09:30 AM");
    }

    #[test]
    fn test_format_date_uses_local_zone() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 20, 0, 0).unwrap();
        let tz = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_date(&at, &tz), "January 6, 2024");
    }

    #[test]
    fn test_format_duration_and_answer() {
        assert_eq!(format_duration(1), "1 minute");
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(answer_label(true), "True");
        assert_eq!(answer_label(false), "False");
    }
}
