//! The query facade bound to one loaded language.

use super::error::Result;
use super::index::Dictionary;
use super::parser::ParseStats;
use super::registry::{Language, Registry};

/// Outcome of a lookup, distinguishing a dictionary hit from the identity
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The word was in the dictionary; this is its first-seen lemma.
    Found(&'a str),
    /// The word was absent and is assumed to already be canonical.
    Guessed(&'a str),
}

impl<'a> Resolution<'a> {
    /// The resolved lemma, whichever way it was produced.
    pub fn lemma(self) -> &'a str {
        match self {
            Resolution::Found(lemma) | Resolution::Guessed(lemma) => lemma,
        }
    }

    /// True for a dictionary hit.
    pub fn is_found(self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Lemma lookup for one language.
///
/// Owns an immutable [`Dictionary`] built once at construction. Queries are
/// pure reads that never fail, so a `Lemmatizer` can be shared across any
/// number of threads without locking. Words absent from the dictionary
/// resolve to themselves: out-of-vocabulary tokens and proper nouns are
/// assumed to already be canonical.
#[derive(Debug)]
pub struct Lemmatizer {
    language: Language,
    dict: Dictionary,
    stats: ParseStats,
}

impl Lemmatizer {
    /// Builds a lemmatizer for a named language from the bundled dictionary
    /// assets, e.g. `Lemmatizer::new("english")`.
    ///
    /// Language names are matched ASCII case-insensitively against the full
    /// names in [`Language`].
    ///
    /// # Errors
    /// - [`UnsupportedLanguage`](super::LemmaError::UnsupportedLanguage) for an unknown name
    /// - [`AssetCorrupt`](super::LemmaError::AssetCorrupt) if the bundled blob fails to inflate to text
    /// - [`ParseError`](super::LemmaError::ParseError) if the inflated text is malformed
    pub fn new(language: &str) -> Result<Self> {
        let language: Language = language.parse()?;
        Registry::bundled().lemmatizer(language)
    }

    pub(crate) fn from_parts(language: Language, dict: Dictionary, stats: ParseStats) -> Self {
        Self {
            language,
            dict,
            stats,
        }
    }

    /// The language this lemmatizer was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of distinct inflected forms in the dictionary.
    pub fn entry_count(&self) -> usize {
        self.dict.len()
    }

    /// Counters from the dictionary parse, including how many malformed
    /// lines were dropped under the tolerant policy.
    pub fn parse_stats(&self) -> ParseStats {
        self.stats
    }

    /// Resolves `word` against the exact-case index.
    pub fn resolve<'a>(&'a self, word: &'a str) -> Resolution<'a> {
        match self.dict.lemmas(word).and_then(|set| set.first()) {
            Some(lemma) => Resolution::Found(lemma),
            None => Resolution::Guessed(word),
        }
    }

    /// Resolves an already-lowercased `word` against the lowercased index.
    ///
    /// The input is not re-folded here. The dictionary was lowercased once
    /// at construction; lowercasing the query is the caller's job.
    pub fn resolve_lower<'a>(&'a self, word: &'a str) -> Resolution<'a> {
        match self.dict.lemmas_lower(word).and_then(|set| set.first()) {
            Some(lemma) => Resolution::Found(lemma),
            None => Resolution::Guessed(word),
        }
    }

    /// The canonical form of `word`, or `word` itself when absent.
    ///
    /// A form with several candidate lemmas resolves to the one seen first
    /// in the dictionary source; [`Self::lemmas`] exposes the full set.
    pub fn lemma<'a>(&'a self, word: &'a str) -> &'a str {
        self.resolve(word).lemma()
    }

    /// Like [`Self::lemma`], for input the caller has already lowercased.
    pub fn lemma_lower<'a>(&'a self, word: &'a str) -> &'a str {
        self.resolve_lower(word).lemma()
    }

    /// Every candidate lemma for `word` in first-seen order, or a singleton
    /// of `word` itself when absent. Never empty.
    pub fn lemmas<'a>(&'a self, word: &'a str) -> Vec<&'a str> {
        match self.dict.lemmas(word) {
            Some(set) => set.iter().map(String::as_str).collect(),
            None => vec![word],
        }
    }

    /// True iff `word` appears in the dictionary exactly as written.
    pub fn in_dict(&self, word: &str) -> bool {
        self.dict.contains(word)
    }
}
