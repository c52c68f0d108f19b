// Stemming: the swap-ready abstraction.
//
// The vectorizer only needs "reduce this token to a root form", so that is
// all the `Stem` trait promises. The default implementation is a Snowball
// stemmer for one fixed language; there is no language detection, and the
// language is picked by configuration rather than inferred per post.

use std::fmt;
use std::str::FromStr;

use rust_stemmers::{Algorithm, Stemmer};

use super::placeholder::is_placeholder;
use crate::error::Error;

/// Trait for reducing a token to its stem.
pub trait Stem: Send + Sync {
    /// Stem a single token.
    fn stem_token(&self, token: &str) -> String;

    /// Stem every token, preserving order.
    fn stem(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| self.stem_token(t)).collect()
    }
}

/// Languages with a Snowball stemmer available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StemLanguage {
    #[default]
    Spanish,
    English,
    Portuguese,
    French,
    Italian,
}

impl StemLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            StemLanguage::Spanish => Algorithm::Spanish,
            StemLanguage::English => Algorithm::English,
            StemLanguage::Portuguese => Algorithm::Portuguese,
            StemLanguage::French => Algorithm::French,
            StemLanguage::Italian => Algorithm::Italian,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StemLanguage::Spanish => "spanish",
            StemLanguage::English => "english",
            StemLanguage::Portuguese => "portuguese",
            StemLanguage::French => "french",
            StemLanguage::Italian => "italian",
        }
    }
}

impl FromStr for StemLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spanish" | "es" => Ok(StemLanguage::Spanish),
            "english" | "en" => Ok(StemLanguage::English),
            "portuguese" | "pt" => Ok(StemLanguage::Portuguese),
            "french" | "fr" => Ok(StemLanguage::French),
            "italian" | "it" => Ok(StemLanguage::Italian),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for StemLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snowball stemmer for a fixed language. Placeholder tokens pass through
/// untouched.
pub struct SnowballStemmer {
    stemmer: Stemmer,
    language: StemLanguage,
}

impl SnowballStemmer {
    pub fn new(language: StemLanguage) -> Self {
        Self {
            stemmer: Stemmer::create(language.algorithm()),
            language,
        }
    }

    pub fn language(&self) -> StemLanguage {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(StemLanguage::default())
    }
}

impl Clone for SnowballStemmer {
    fn clone(&self) -> Self {
        // Stemmer isn't Clone; rebuild it from the language.
        Self::new(self.language)
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stem for SnowballStemmer {
    fn stem_token(&self, token: &str) -> String {
        if is_placeholder(token) {
            return token.to_string();
        }
        self.stemmer.stem(token).into_owned()
    }
}

/// Stem with the default (Spanish) stemmer.
pub fn stem(tokens: &[String]) -> Vec<String> {
    SnowballStemmer::default().stem(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::placeholder::Placeholder;

    #[test]
    fn test_spanish_merges_variants() {
        let stemmer = SnowballStemmer::default();
        assert_eq!(stemmer.stem_token("golpear"), stemmer.stem_token("golpeaba"));
        assert_ne!(stemmer.stem_token("golpear"), "golpear");
    }

    #[test]
    fn test_placeholders_untouched() {
        let stemmer = SnowballStemmer::default();
        for p in Placeholder::ALL {
            assert_eq!(stemmer.stem_token(p.as_str()), p.as_str());
        }
    }

    #[test]
    fn test_deterministic() {
        let tokens = vec!["mujeres".to_string(), "mujer".to_string()];
        assert_eq!(stem(&tokens), stem(&tokens));
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("Spanish".parse::<StemLanguage>().unwrap(), StemLanguage::Spanish);
        assert_eq!("en".parse::<StemLanguage>().unwrap(), StemLanguage::English);
        assert!(matches!(
            "klingon".parse::<StemLanguage>(),
            Err(Error::UnknownLanguage(_))
        ));
    }
}
