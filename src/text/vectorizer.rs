// Term-frequency vectorization: the end of the text pipeline.
//
// preprocess -> split on spaces -> lowercase -> drop stopwords -> stem -> count
//
// A Vectorizer owns everything a post needs to become a TermVector, so the
// word lists are loaded once per run and then shared read-only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::{lowercase, remove_stopwords, Stopwords};
use super::normalizer::Normalizer;
use super::preprocess_with;
use super::stemmer::{SnowballStemmer, Stem, StemLanguage};
use crate::error::{Error, Result};

/// Sparse term -> occurrence count mapping for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector {
    counts: HashMap<String, u32>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count of `term`, zero if absent.
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Sum of squared counts.
    pub fn sum_of_squares(&self) -> f64 {
        self.counts.values().map(|&c| c as u64 * c as u64).sum::<u64>() as f64
    }

    /// Terms sorted by descending count, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut terms: Vec<(&str, u32)> = self.iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Turns raw posts into term vectors.
pub struct Vectorizer {
    normalizer: Normalizer,
    stopwords: Stopwords,
    stemmer: Box<dyn Stem>,
}

impl Vectorizer {
    /// Start building a vectorizer. Stopwords, emoticons and emojis are all
    /// required; the stemmer defaults to Spanish Snowball.
    pub fn builder() -> VectorizerBuilder {
        VectorizerBuilder::default()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Placeholder substitution, punctuation stripping and whitespace collapse.
    pub fn preprocess(&self, text: &str) -> String {
        preprocess_with(&self.normalizer, text)
    }

    /// The token sequence that gets counted, in text order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let cleaned = self.preprocess(text);
        // Empty pieces only appear for empty input; they are not terms.
        let words: Vec<&str> = cleaned.split(' ').filter(|w| !w.is_empty()).collect();
        let words = lowercase(&words);
        let words = remove_stopwords(words, &self.stopwords);
        self.stemmer.stem(&words)
    }

    /// Build the term-frequency vector for `text`.
    pub fn term_frequency(&self, text: &str) -> TermVector {
        TermVector::from_tokens(self.tokens(text))
    }
}

impl std::fmt::Debug for Vectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vectorizer")
            .field("rules", &self.normalizer.rules().len())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

/// Collects the word lists and stemming strategy for a [`Vectorizer`].
#[derive(Default)]
pub struct VectorizerBuilder {
    stopwords: Option<Stopwords>,
    emoticons: Option<Vec<String>>,
    emojis: Option<Vec<String>>,
    language: StemLanguage,
    stemmer: Option<Box<dyn Stem>>,
}

impl VectorizerBuilder {
    pub fn stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(Stopwords::new(stopwords));
        self
    }

    pub fn emoticons<I, S>(mut self, emoticons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emoticons = Some(emoticons.into_iter().map(Into::into).collect());
        self
    }

    pub fn emojis<I, S>(mut self, emojis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emojis = Some(emojis.into_iter().map(Into::into).collect());
        self
    }

    /// Language for the default Snowball stemmer.
    pub fn language(mut self, language: StemLanguage) -> Self {
        self.language = language;
        self
    }

    /// Replace the Snowball stemmer with another strategy.
    pub fn stemmer(mut self, stemmer: Box<dyn Stem>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    pub fn build(self) -> Result<Vectorizer> {
        let stopwords = self.stopwords.ok_or(Error::MissingArgument("stopwords"))?;
        let emoticons = self.emoticons.ok_or(Error::MissingArgument("emoticons"))?;
        let emojis = self.emojis.ok_or(Error::MissingArgument("emojis"))?;

        let stemmer = match self.stemmer {
            Some(stemmer) => stemmer,
            None => Box::new(SnowballStemmer::new(self.language)),
        };

        debug!(
            stopwords = stopwords.len(),
            language = %self.language,
            "Built vectorizer"
        );

        Ok(Vectorizer {
            normalizer: Normalizer::new(&emoticons, &emojis),
            stopwords,
            stemmer,
        })
    }
}

/// One-shot vectorization with explicit lists and the default stemmer.
pub fn term_frequency<W, E, J>(text: &str, stopwords: &[W], emoticons: &[E], emojis: &[J]) -> TermVector
where
    W: AsRef<str>,
    E: AsRef<str>,
    J: AsRef<str>,
{
    Vectorizer {
        normalizer: Normalizer::new(emoticons, emojis),
        stopwords: stopwords.iter().map(AsRef::<str>::as_ref).collect(),
        stemmer: Box::new(SnowballStemmer::default()),
    }
    .term_frequency(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    struct Identity;

    impl Stem for Identity {
        fn stem_token(&self, token: &str) -> String {
            token.to_string()
        }
    }

    #[test]
    fn test_counts_stemmed_terms() {
        let tf = term_frequency("el el la la la", &["el"], &NONE, &NONE);
        let stem_la = SnowballStemmer::default().stem_token("la");
        assert_eq!(tf.len(), 1);
        assert_eq!(tf.get(&stem_la), 3);
        assert_eq!(tf.get("el"), 0);
    }

    #[test]
    fn test_empty_text_empty_vector() {
        assert!(term_frequency("", &NONE, &NONE, &NONE).is_empty());
        assert!(term_frequency("  ¡¿...?!  ", &NONE, &NONE, &NONE).is_empty());
        assert!(term_frequency("el la", &["el", "la"], &NONE, &NONE).is_empty());
    }

    #[test]
    fn test_placeholders_counted_verbatim() {
        let vectorizer = Vectorizer::builder()
            .stopwords(NONE)
            .emoticons([":)"])
            .emojis(NONE)
            .stemmer(Box::new(Identity))
            .build()
            .unwrap();
        let tf = vectorizer.term_frequency("@ana mira http://x.co :) :) 12");
        assert_eq!(tf.get("MENTION"), 1);
        assert_eq!(tf.get("URL"), 1);
        assert_eq!(tf.get("EMOTICON"), 2);
        assert_eq!(tf.get("NUMBER"), 1);
        assert_eq!(tf.get("mira"), 1);
        assert_eq!(tf.total(), 6);
    }

    #[test]
    fn test_builder_reports_first_missing_list() {
        let err = Vectorizer::builder()
            .emoticons(NONE)
            .emojis(NONE)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument("stopwords")));

        let err = Vectorizer::builder()
            .stopwords(NONE)
            .emoticons(NONE)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingArgument("emojis")));
    }

    #[test]
    fn test_ranked_order() {
        let tf = TermVector::from_tokens(["b", "a", "c", "c", "a"]);
        assert_eq!(tf.ranked(), vec![("a", 2), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let tf = TermVector::from_tokens(["hola"]);
        assert_eq!(serde_json::to_string(&tf).unwrap(), r#"{"hola":1}"#);

        let parsed: TermVector = serde_json::from_str(r#"{"hola":1,"mundo":3}"#).unwrap();
        assert_eq!(parsed.get("mundo"), 3);
        assert_eq!(parsed.total(), 4);
    }

    #[test]
    fn test_builder_wires_lists() {
        let vectorizer = Vectorizer::builder()
            .stopwords(["el", "la"])
            .emoticons([":)", ""])
            .emojis(["👍"])
            .build()
            .unwrap();
        assert!(vectorizer.stopwords().contains("la"));
        assert_eq!(vectorizer.stopwords().len(), 2);
        // Five pattern rules, one emoticon, one emoji, the emoji ranges.
        assert_eq!(vectorizer.normalizer().rules().len(), 8);
    }
}
