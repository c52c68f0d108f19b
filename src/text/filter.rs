// Token-level filters: case folding and stopword removal.

use std::collections::HashSet;

use super::placeholder::is_placeholder;

/// Lowercase every token except the placeholder tokens, which stay verbatim.
pub fn lowercase<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .map(|t| {
            if is_placeholder(t) {
                t.to_string()
            } else {
                t.to_lowercase()
            }
        })
        .collect()
}

/// A stopword list with constant-time lookup.
///
/// Matching is exact: the list is not lowercased, and placeholders get no
/// special protection (a list containing `URL` would drop it).
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Drop every token present in the stopword list, keeping order.
pub fn remove_stopwords(tokens: Vec<String>, stopwords: &Stopwords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !stopwords.contains(t))
        .collect()
}
