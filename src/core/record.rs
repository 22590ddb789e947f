//! Log line rendering
//!
//! Each record is a single line: `[YYYY-MM-DD HH:MM:SS] CAPTION - message`.
//! Timestamps are local time with zero-padded fields.

use chrono::{DateTime, Local};

/// Maximum message length in bytes. Longer messages are truncated, never
/// rejected.
pub const MAX_MESSAGE_LEN: usize = 2048;

/// Render the fixed-width prefix written ahead of the message text.
pub fn render_prefix(timestamp: DateTime<Local>, caption: &str) -> String {
    format!("[{}] {} - ", timestamp.format("%Y-%m-%d %H:%M:%S"), caption)
}

/// Truncate a message to [`MAX_MESSAGE_LEN`] bytes on a char boundary.
pub fn truncate_message(message: &str) -> &str {
    if message.len() <= MAX_MESSAGE_LEN {
        return message;
    }
    let mut end = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prefix_layout() {
        let ts = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(render_prefix(ts, "NOTICE"), "[2025-03-07 09:05:02] NOTICE - ");
    }

    #[test]
    fn test_prefix_zero_padding() {
        let ts = Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(render_prefix(ts, "INFO"), "[2025-01-01 00:00:00] INFO - ");
    }

    #[test]
    fn test_truncate_short_message_unchanged() {
        assert_eq!(truncate_message("hello"), "hello");
        assert_eq!(truncate_message(""), "");
    }

    #[test]
    fn test_truncate_at_limit() {
        let message = "x".repeat(MAX_MESSAGE_LEN + 100);
        assert_eq!(truncate_message(&message).len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 3-byte chars do not divide MAX_MESSAGE_LEN evenly
        let message = "€".repeat(MAX_MESSAGE_LEN);
        let truncated = truncate_message(&message);
        assert!(truncated.len() <= MAX_MESSAGE_LEN);
        assert!(message.is_char_boundary(truncated.len()));
        assert!(truncated.chars().all(|c| c == '€'));
    }
}
