/// Shorten text for log records, appending `...` when anything was cut.
/// Counts characters, not bytes, so multi-byte input is never split.
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_for_log("I feel fine", 1000), "I feel fine");
    }

    #[test]
    fn test_exact_length_untouched() {
        assert_eq!(truncate_for_log("abcd", 4), "abcd");
    }

    #[test]
    fn test_long_text_cut() {
        assert_eq!(truncate_for_log("abcdef", 4), "abcd...");
    }

    #[test]
    fn test_multibyte_boundary() {
        assert_eq!(truncate_for_log("ñañaña", 3), "ñañ...");
    }
}
