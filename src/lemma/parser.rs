//! Line-oriented dictionary parsing.
//!
//! A dictionary is plain text with one `lemma<TAB>inflected-form` pair per
//! line. Repeated forms merge into a single entry carrying every candidate
//! lemma in first-seen order.

use std::collections::HashMap;

use log::{debug, warn};

use super::error::{LemmaError, Result};

/// Field separator between the lemma and the inflected form.
const FIELD_SEPARATOR: char = '\t';

/// Policy for lines that do not match the `lemma<TAB>form` shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLines {
    /// Reject the whole asset, naming the first offending line. Bundled
    /// assets are compiled offline and must be clean, so a malformed line
    /// means the asset itself is bad.
    #[default]
    Fail,
    /// Drop offending lines and count them in [`ParseStats`]. For operators
    /// rebuilding assets from noisy source data.
    Skip,
}

/// Options controlling dictionary parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub malformed_lines: MalformedLines,
}

/// Counters reported by a successful parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Distinct inflected forms kept.
    pub entries: usize,
    /// Well-formed `lemma<TAB>form` pairs read, duplicates included.
    pub pairs: usize,
    /// Malformed lines dropped under [`MalformedLines::Skip`].
    pub skipped: usize,
}

/// One inflected form with its candidate lemmas in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub form: String,
    pub lemmas: Vec<String>,
}

/// Parses dictionary text into merged entries.
///
/// Both columns keep their source casing; nothing is normalized here. Blank
/// lines are ignored and a trailing `\r` is stripped, so assets built with
/// either newline convention parse the same. Entry order is the order forms
/// first appear in the text, and within an entry lemma order is first-seen
/// with exact duplicates discarded.
///
/// # Errors
/// Under [`MalformedLines::Fail`], returns [`LemmaError::ParseError`] for
/// the first line with a missing separator or an empty field.
pub fn parse(text: &str, options: ParseOptions) -> Result<(Vec<DictionaryEntry>, ParseStats)> {
    let mut entries: Vec<DictionaryEntry> = Vec::new();
    let mut by_form: HashMap<String, usize> = HashMap::new();
    let mut stats = ParseStats::default();

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        let (lemma, form) = match split_line(line) {
            Some(pair) => pair,
            None => match options.malformed_lines {
                MalformedLines::Fail => {
                    return Err(LemmaError::ParseError {
                        line: idx + 1,
                        reason: format!("expected `lemma\\tform`, got {:?}", line),
                    });
                }
                MalformedLines::Skip => {
                    stats.skipped += 1;
                    continue;
                }
            },
        };

        stats.pairs += 1;
        match by_form.get(form) {
            Some(&at) => {
                let lemmas = &mut entries[at].lemmas;
                if !lemmas.iter().any(|l| l == lemma) {
                    lemmas.push(lemma.to_string());
                }
            }
            None => {
                by_form.insert(form.to_string(), entries.len());
                entries.push(DictionaryEntry {
                    form: form.to_string(),
                    lemmas: vec![lemma.to_string()],
                });
            }
        }
    }

    if stats.skipped > 0 {
        warn!("Skipped {} malformed dictionary lines", stats.skipped);
    }
    stats.entries = entries.len();
    debug!("Parsed {} pairs into {} entries", stats.pairs, stats.entries);
    Ok((entries, stats))
}

/// Splits one line into `(lemma, form)`, requiring exactly two non-empty
/// fields.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (lemma, form) = line.split_once(FIELD_SEPARATOR)?;
    if lemma.is_empty() || form.is_empty() || form.contains(FIELD_SEPARATOR) {
        return None;
    }
    Some((lemma, form))
}
