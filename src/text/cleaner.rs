// Punctuation stripping and whitespace collapsing.
//
// Runs after placeholder substitution, so '@' and '#' that survive here
// were not part of a mention/hashtag and are plain noise.

/// Characters replaced by a single space.
pub const PUNCTUATION: &[char] = &[
    '"', '$', '%', '&', '@', '.', ',', ':', ';', '(', ')', '¿', '?', '`', '+', '-', '_', '*',
    '=', '!', '¡', '\\', '/', '#', '{', '}', '[', ']',
];

/// Replace every punctuation character with a space.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect()
}

/// Collapse each run of whitespace into one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
