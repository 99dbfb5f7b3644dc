//! Custom error types for the lemmatizer crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only construction can fail; once a [`Lemmatizer`](crate::Lemmatizer)
/// exists, every query is a total function.
#[derive(Debug, Error)]
pub enum LemmaError {
    /// The requested language identifier has no registered dictionary asset.
    #[error("Unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    /// The dictionary asset is not a valid gzip stream, fails to inflate,
    /// or inflates to something that is not UTF-8 text.
    #[error("Corrupt dictionary asset {path}: {reason}")]
    AssetCorrupt { path: String, reason: String },

    /// A dictionary line violates the `lemma<TAB>form` format under the
    /// strict parsing policy.
    #[error("Malformed dictionary line {line}: {reason}")]
    ParseError { line: usize, reason: String },
}

/// A convenience `Result` type alias using the crate's `LemmaError` type.
pub type Result<T> = std::result::Result<T, LemmaError>;
