// DeViGeR: gender-based violence language detection for social media posts.
//
// This is the library root. Each module corresponds to a stage of the
// detection pipeline: text normalization and vectorization, similarity
// scoring, corpus loading, and the batch scan that ties them together.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod status;
pub mod text;

pub use error::{Error, Result};
pub use scoring::similarity::{cosine_similarity, similarity, SimilarityFormula};
pub use text::normalizer::normalize;
pub use text::preprocess;
pub use text::vectorizer::{term_frequency, TermVector, Vectorizer};
