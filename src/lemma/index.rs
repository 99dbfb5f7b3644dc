//! The immutable lookup index built from parsed entries.

use std::collections::HashMap;

use log::debug;

use super::parser::DictionaryEntry;

/// The complete lookup index for one language.
///
/// Two maps are built in a single pass over the entry list and never touched
/// again: an exact-case map keyed by the inflected form as written in the
/// source data, and a lowercased map keyed by the form's lowercase spelling,
/// whose value is the pooled candidate set of every form sharing that
/// spelling. All candidate ordering derives from the entry list's first-seen
/// order, never from map iteration, so lookups are reproducible across loads
/// of the same asset.
#[derive(Debug)]
pub struct Dictionary {
    exact: HashMap<String, Vec<String>>,
    lowered: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// Builds both maps from parser output.
    pub fn build(entries: Vec<DictionaryEntry>) -> Self {
        let mut exact = HashMap::with_capacity(entries.len());
        let mut lowered: HashMap<String, Vec<String>> = HashMap::with_capacity(entries.len());

        for entry in entries {
            let key = entry.form.to_lowercase();
            match lowered.get_mut(&key) {
                Some(pooled) => {
                    // Case variants of one spelling pool their candidates.
                    for lemma in &entry.lemmas {
                        if !pooled.iter().any(|l| l == lemma) {
                            pooled.push(lemma.clone());
                        }
                    }
                }
                None => {
                    lowered.insert(key, entry.lemmas.clone());
                }
            }
            // The parser already merged duplicate forms, so this never
            // overwrites an existing entry.
            exact.insert(entry.form, entry.lemmas);
        }

        debug!(
            "Built index: {} exact keys, {} lowercased keys",
            exact.len(),
            lowered.len()
        );
        Self { exact, lowered }
    }

    /// Candidate lemmas for `form`, exact-case.
    pub fn lemmas(&self, form: &str) -> Option<&[String]> {
        self.exact.get(form).map(Vec::as_slice)
    }

    /// Candidate lemmas for an already-lowercased key.
    pub fn lemmas_lower(&self, key: &str) -> Option<&[String]> {
        self.lowered.get(key).map(Vec::as_slice)
    }

    /// Exact-case membership test.
    pub fn contains(&self, form: &str) -> bool {
        self.exact.contains_key(form)
    }

    /// Number of distinct inflected forms.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
