// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

const ELLIPSIS: char = '…';

/// Prepares `display_name` for use in the title of a confirmation alert. Control characters are
/// removed and names longer than `max_chars` characters are truncated and end with an ellipsis.
pub fn format_display_name_for_alert_title(display_name: &str, max_chars: usize) -> String {
    let sanitized = strip_control_characters(display_name);

    if sanitized.chars().count() <= max_chars {
        return sanitized;
    }

    let mut truncated = sanitized
        .chars()
        .take(max_chars)
        .collect::<String>()
        .trim_end()
        .to_string();
    truncated.push(ELLIPSIS);
    truncated
}

/// Prepares `display_name` for use in the message of a confirmation alert. Only control
/// characters are removed, the name is never truncated.
pub fn format_display_name_for_alert_message(display_name: &str) -> String {
    strip_control_characters(display_name)
}

fn strip_control_characters(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(
            format_display_name_for_alert_title("Jane\u{0}\n Doe\u{7}", 50),
            "Jane Doe"
        );
        assert_eq!(
            format_display_name_for_alert_message("\tJane\r\nDoe"),
            "JaneDoe"
        );
    }

    #[test]
    fn test_truncates_long_titles() {
        let name = "a".repeat(60);
        let title = format_display_name_for_alert_title(&name, 50);

        assert_eq!(title.chars().count(), 51);
        assert!(title.ends_with('…'));
        assert_eq!(format_display_name_for_alert_message(&name), name);
    }

    #[test]
    fn test_does_not_truncate_names_at_the_limit() {
        let name = "b".repeat(50);
        assert_eq!(format_display_name_for_alert_title(&name, 50), name);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let name = "ü".repeat(10);
        assert_eq!(format_display_name_for_alert_title(&name, 10), name);
        assert_eq!(format_display_name_for_alert_title(&name, 4), "üüüü…");
    }
}
