use regex::Regex;

use mustalah_core::{Language, TermMatch};

use crate::index::TermIndex;

/// Characters of surrounding text captured on each side of a match.
const CONTEXT_CHARS: usize = 50;

/// Whole-word pattern for a literal term: the occurrence must not be a
/// substring of a larger word. Arabic and French both concatenate prefixes
/// and suffixes onto stems, so "دفاع" (defense) must not match inside
/// "دفاعي" (defensive). `\b` is Unicode-aware, which covers Arabic script.
pub(crate) fn boundary_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(term)))
}

/// Snippet of up to `CONTEXT_CHARS` characters on each side of the byte
/// span `start..end`, clipped at the string bounds.
pub(crate) fn context_window(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[from..to]
}

impl TermIndex {
    /// Scan `text` for whole-word occurrences of every indexed term of the
    /// given language.
    ///
    /// Matching is case-sensitive for Latin script and codepoint-exact for
    /// Arabic: no diacritic normalization or ligature folding is applied.
    /// That is a deliberate, documented limitation of the engine.
    ///
    /// Each occurrence yields its own [`TermMatch`] with its own context
    /// window. Terms are visited in index insertion order and occurrences
    /// left to right, so scanning the same text twice yields identical
    /// results; nothing is mutated.
    pub fn scan(&self, text: &str, language: Language) -> Vec<TermMatch> {
        let mut matches = Vec::new();
        for entry in &self.partition(language).entries {
            let record = &self.records[entry.record];
            for m in entry.pattern.find_iter(text) {
                tracing::debug!(
                    term = record.term(language),
                    offset = m.start(),
                    "found glossary term"
                );
                matches.push(TermMatch {
                    term: record.term(language).to_string(),
                    definition: record.definition(language).to_string(),
                    category: record.category.clone(),
                    offset: m.start(),
                    context: context_window(text, m.start(), m.end()).to_string(),
                });
            }
        }
        matches
    }
}
