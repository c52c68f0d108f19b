// Placeholder tokens substituted for recognized social-media patterns.
//
// These are upper-case on purpose: the filter stage lowercases everything
// else, so a placeholder can never collide with a real (lowercased) word.

use std::fmt;

/// A fixed marker that stands in for a recognized pattern (URL, mention, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Url,
    Email,
    Mention,
    Hashtag,
    Number,
    Emoticon,
    Emoji,
}

impl Placeholder {
    /// Every placeholder, in substitution order.
    pub const ALL: [Placeholder; 7] = [
        Placeholder::Url,
        Placeholder::Email,
        Placeholder::Mention,
        Placeholder::Hashtag,
        Placeholder::Number,
        Placeholder::Emoticon,
        Placeholder::Emoji,
    ];

    /// The literal token text, e.g. `URL`.
    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::Url => "URL",
            Placeholder::Email => "EMAIL",
            Placeholder::Mention => "MENTION",
            Placeholder::Hashtag => "HASHTAG",
            Placeholder::Number => "NUMBER",
            Placeholder::Emoticon => "EMOTICON",
            Placeholder::Emoji => "EMOJI",
        }
    }

    /// The replacement inserted into text: the token padded with one space
    /// on each side so it never fuses with neighbouring words.
    pub fn padded(self) -> &'static str {
        match self {
            Placeholder::Url => " URL ",
            Placeholder::Email => " EMAIL ",
            Placeholder::Mention => " MENTION ",
            Placeholder::Hashtag => " HASHTAG ",
            Placeholder::Number => " NUMBER ",
            Placeholder::Emoticon => " EMOTICON ",
            Placeholder::Emoji => " EMOJI ",
        }
    }

    /// Look up a token; matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| p.as_str() == token)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True if `token` is exactly one of the placeholder tokens.
pub fn is_placeholder(token: &str) -> bool {
    Placeholder::from_token(token).is_some()
}
