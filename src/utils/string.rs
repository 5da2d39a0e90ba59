/// Truncate a string to maximum character count (UTF-8 safe).
///
/// This function is O(n) where n is the character count, but guarantees
/// correct handling of multi-byte UTF-8 characters.
/// Adds "..." suffix if truncated.
#[inline]
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short() {
        let result = truncate_chars("hello", 10);
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_truncate_chars_exact() {
        let result = truncate_chars("hello", 5);
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_truncate_chars_long() {
        let result = truncate_chars("hello world", 8);
        assert_eq!(result, "hello...");
    }

    #[test]
    fn test_truncate_chars_unicode() {
        // "안녕하세요" = 5 characters
        let result = truncate_chars("안녕하세요 세계", 6);
        assert_eq!(result, "안녕하...");
    }
}
