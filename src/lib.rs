//! # lemmatizer
//!
//! Resolves an inflected word form to its canonical dictionary form (lemma)
//! for a fixed set of languages. Each language ships as a gzip-compressed
//! dictionary asset embedded in the crate, decoded once into an immutable
//! in-memory index when the [`Lemmatizer`] is constructed.
//!
//! Words absent from the dictionary resolve to themselves, so queries never
//! fail; use [`Lemmatizer::in_dict`] or [`Lemmatizer::resolve`] to tell a
//! dictionary hit from that identity fallback.
//!
//! ```
//! use lemmatizer::Lemmatizer;
//!
//! let english = Lemmatizer::new("english")?;
//! assert_eq!(english.lemma("goes"), "go");
//! assert_eq!(english.lemma("Edward"), "Edward");
//! # Ok::<(), lemmatizer::LemmaError>(())
//! ```

pub mod lemma;

// Re-export the main types for convenience
pub use lemma::{
    Dictionary, DictionaryEntry, Language, LemmaError, Lemmatizer, MalformedLines, ParseOptions,
    ParseStats, Registry, Resolution, Result,
};
