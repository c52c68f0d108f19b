// Output formatting: terminal display.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Posts are full of multi-byte characters (accents, emoji), so this counts
/// chars rather than slicing bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
