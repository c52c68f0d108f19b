// Text pipeline: normalization, filtering, stemming and vectorization.

pub mod cleaner;
pub mod filter;
pub mod normalizer;
pub mod placeholder;
pub mod stemmer;
pub mod vectorizer;

use normalizer::Normalizer;

/// Normalize, strip punctuation, collapse whitespace.
pub fn preprocess<E, J>(text: &str, emoticons: &[E], emojis: &[J]) -> String
where
    E: AsRef<str>,
    J: AsRef<str>,
{
    preprocess_with(&Normalizer::new(emoticons, emojis), text)
}

pub(crate) fn preprocess_with(normalizer: &Normalizer, text: &str) -> String {
    let normalized = normalizer.normalize(text);
    let stripped = cleaner::strip_punctuation(&normalized);
    cleaner::collapse_whitespace(&stripped)
}
