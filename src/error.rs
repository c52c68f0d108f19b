// Error types for the detection library.
//
// The binary wraps these in anyhow; library callers get a typed enum so
// they can tell a missing resource list apart from an empty vector.

use std::path::PathBuf;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required word list (stopwords, emoticons or emojis) was not supplied.
    #[error("You must provide a {0} list")]
    MissingArgument(&'static str),

    /// Input that should have been text wasn't (e.g. invalid UTF-8 in a corpus file).
    #[error("{what} must be a string: {detail}")]
    TypeMismatch { what: String, detail: String },

    /// Similarity is undefined when either term vector has no terms.
    #[error("cannot compute similarity: the {side} term vector is empty")]
    EmptyVector { side: &'static str },

    #[error("unknown stemming language: {0}")]
    UnknownLanguage(String),

    #[error("unknown similarity formula: {0} (expected `reference` or `cosine`)")]
    UnknownFormula(String),

    #[error("{}: record {record} is malformed: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        record: usize,
        reason: String,
    },

    #[error("{}: missing column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
