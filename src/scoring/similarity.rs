// Vector-space similarity between two term vectors.
//
// The reference formula divides the dot product by the product of the raw
// sums of squares (no square roots), so it is NOT bounded to [0, 1] and it
// shrinks quickly as vectors get longer:
//
//   sum(a[t] * b[t] for t in a ∩ b) / (sum(a[t]^2) * sum(b[t]^2))
//
// It is kept as the default so scores stay comparable with earlier runs.
// Standard cosine similarity is available alongside it.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::text::vectorizer::TermVector;

/// Which normalization to apply to the dot product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityFormula {
    /// `dot / (|a|^2 * |b|^2)`.
    #[default]
    Reference,
    /// `dot / (|a| * |b|)`, bounded to [0, 1] for count vectors.
    Cosine,
}

impl SimilarityFormula {
    pub fn score(self, a: &TermVector, b: &TermVector) -> Result<f64> {
        match self {
            SimilarityFormula::Reference => similarity(a, b),
            SimilarityFormula::Cosine => cosine_similarity(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimilarityFormula::Reference => "reference",
            SimilarityFormula::Cosine => "cosine",
        }
    }
}

impl FromStr for SimilarityFormula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(SimilarityFormula::Reference),
            "cosine" => Ok(SimilarityFormula::Cosine),
            _ => Err(Error::UnknownFormula(s.to_string())),
        }
    }
}

impl fmt::Display for SimilarityFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of `a[t] * b[t]` over the terms both vectors share.
pub fn dot_product(a: &TermVector, b: &TermVector) -> f64 {
    // Walk the smaller vector and look terms up in the larger.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter(|(term, _)| large.contains(term))
        .map(|(term, count)| count as u64 * large.get(term) as u64)
        .sum::<u64>() as f64
}

fn ensure_non_empty(a: &TermVector, b: &TermVector) -> Result<()> {
    if a.is_empty() {
        return Err(Error::EmptyVector { side: "first" });
    }
    if b.is_empty() {
        return Err(Error::EmptyVector { side: "second" });
    }
    Ok(())
}

/// The reference cosine-like score.
///
/// Fails with [`Error::EmptyVector`] when either vector has no terms, since
/// the denominator would be zero.
pub fn similarity(a: &TermVector, b: &TermVector) -> Result<f64> {
    ensure_non_empty(a, b)?;
    Ok(dot_product(a, b) / (a.sum_of_squares() * b.sum_of_squares()))
}

/// Standard cosine similarity. Same empty-vector policy as [`similarity`].
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64> {
    ensure_non_empty(a, b)?;
    Ok(dot_product(a, b) / (a.sum_of_squares().sqrt() * b.sum_of_squares().sqrt()))
}
