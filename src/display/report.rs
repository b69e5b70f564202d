//! Report formatting utilities for terminal output

/// Format a separator line of `width` repeated characters
pub fn separator(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
