use std::collections::HashMap;

use regex::Regex;

use mustalah_core::{Language, TermRecord};

use crate::error::GlossaryError;
use crate::matcher::boundary_pattern;

/// One scannable term of a language partition: the record it belongs to and
/// its precompiled whole-word pattern.
pub(crate) struct TermEntry {
    pub(crate) record: usize,
    pub(crate) pattern: Regex,
}

/// The per-language half of the index. `entries` keeps index insertion
/// order; `by_term` resolves exact lookups. When the same surface form
/// occurs on several rows the later row wins, so `entries` only carries the
/// surviving key for each term.
pub(crate) struct Partition {
    pub(crate) by_term: HashMap<String, usize>,
    pub(crate) entries: Vec<TermEntry>,
}

impl Partition {
    fn build(
        records: &[TermRecord],
        by_term: HashMap<String, usize>,
        language: Language,
    ) -> Result<Self, GlossaryError> {
        let mut entries = Vec::with_capacity(by_term.len());
        for (idx, record) in records.iter().enumerate() {
            let term = record.term(language);
            if by_term.get(term) != Some(&idx) {
                // superseded by a later row with the same surface form
                continue;
            }
            let pattern = boundary_pattern(term).map_err(|source| GlossaryError::Pattern {
                term: term.to_string(),
                source,
            })?;
            entries.push(TermEntry {
                record: idx,
                pattern,
            });
        }
        Ok(Self { by_term, entries })
    }
}

/// Immutable in-memory glossary index.
///
/// Built once per glossary file and never mutated afterwards; any number of
/// callers can read it without coordination. Supplying a new glossary path
/// means building a fresh index, there is no incremental update.
pub struct TermIndex {
    pub(crate) records: Vec<TermRecord>,
    by_id: HashMap<String, usize>,
    categories: HashMap<String, Vec<usize>>,
    arabic: Partition,
    french: Partition,
}

impl TermIndex {
    pub(crate) fn from_records(records: Vec<TermRecord>) -> Result<Self, GlossaryError> {
        let mut by_id = HashMap::new();
        let mut categories: HashMap<String, Vec<usize>> = HashMap::new();
        let mut arabic_by_term = HashMap::new();
        let mut french_by_term = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            by_id.insert(record.id.clone(), idx);
            categories.entry(record.category.clone()).or_default().push(idx);
            arabic_by_term.insert(record.arabic_term.clone(), idx);
            french_by_term.insert(record.french_term.clone(), idx);
        }

        let arabic = Partition::build(&records, arabic_by_term, Language::Arabic)?;
        let french = Partition::build(&records, french_by_term, Language::French)?;

        Ok(Self {
            records,
            by_id,
            categories,
            arabic,
            french,
        })
    }

    pub(crate) fn partition(&self, language: Language) -> &Partition {
        match language {
            Language::Arabic => &self.arabic,
            Language::French => &self.french,
        }
    }

    /// Number of entries in the primary (id-keyed) store.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Record by its opaque id.
    pub fn get(&self, id: &str) -> Option<&TermRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Exact-match definition lookup. `None` means the term is not in the
    /// glossary, which is an expected case rather than an error. The
    /// definition itself may be empty.
    pub fn definition(&self, term: &str, language: Language) -> Option<&str> {
        let &idx = self.partition(language).by_term.get(term)?;
        Some(self.records[idx].definition(language))
    }

    /// All records of a category in table order. Unknown categories yield
    /// an empty list.
    pub fn category_terms(&self, category: &str) -> Vec<&TermRecord> {
        self.categories
            .get(category)
            .map(|ids| ids.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }

    /// Records sharing the term's category, excluding the term itself.
    /// Empty if the term is unknown.
    pub fn related_terms(&self, term: &str, language: Language) -> Vec<&TermRecord> {
        let Some(&idx) = self.partition(language).by_term.get(term) else {
            return Vec::new();
        };
        let category = &self.records[idx].category;
        self.categories
            .get(category)
            .into_iter()
            .flatten()
            .map(|&i| &self.records[i])
            .filter(|record| record.term(language) != term)
            .collect()
    }

    /// Case-insensitive substring match of the topic against each record's
    /// term, definition and category name; matching on any one field
    /// qualifies. Results follow index insertion order, one entry per
    /// record no matter how many fields matched.
    pub fn suggest_for_topic(&self, topic: &str, language: Language) -> Vec<&TermRecord> {
        let needle = topic.to_lowercase();
        self.partition(language)
            .entries
            .iter()
            .map(|entry| &self.records[entry.record])
            .filter(|record| {
                record.term(language).to_lowercase().contains(&needle)
                    || record.definition(language).to_lowercase().contains(&needle)
                    || record.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_index;

    #[test]
    fn test_definition_exact_match() {
        let index = sample_index();
        assert_eq!(
            index.definition("الاستخبارات", Language::Arabic),
            Some("جمع وتحليل المعلومات")
        );
        assert_eq!(
            index.definition("Intelligence", Language::French),
            Some("Collection and analysis of information")
        );
        assert_eq!(index.definition("مصطلح_غير_موجود", Language::Arabic), None);
        // no fuzzy matching: a prefix of an indexed term is not a hit
        assert_eq!(index.definition("Intellig", Language::French), None);
    }

    #[test]
    fn test_category_terms_ordered() {
        let index = sample_index();
        let ops = index.category_terms("Operations");
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].arabic_term, "الاستخبارات");
        assert_eq!(ops[1].arabic_term, "تكتيك");
        assert!(ops.iter().all(|r| r.category == "Operations"));

        assert!(index.category_terms("فئة_غير_موجودة").is_empty());
    }

    #[test]
    fn test_related_terms_excludes_self() {
        let index = sample_index();
        let related = index.related_terms("الاستخبارات", Language::Arabic);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].arabic_term, "تكتيك");

        let related_fr = index.related_terms("Intelligence", Language::French);
        assert_eq!(related_fr.len(), 1);
        assert_eq!(related_fr[0].french_term, "Tactique");

        assert!(index.related_terms("unknown", Language::French).is_empty());
    }

    #[test]
    fn test_suggest_for_topic() {
        let index = sample_index();
        let suggestions = index.suggest_for_topic("الاستخبارات", Language::Arabic);
        assert!(suggestions.iter().any(|r| r.arabic_term == "الاستخبارات"));

        // category name matches too, and casing is ignored
        let by_category = index.suggest_for_topic("operations", Language::French);
        assert_eq!(by_category.len(), 2);

        // one entry per record even when several fields match the topic
        let multi = index.suggest_for_topic("Intelligence", Language::French);
        assert_eq!(
            multi
                .iter()
                .filter(|r| r.french_term == "Intelligence")
                .count(),
            1
        );
    }

    #[test]
    fn test_get_by_id() {
        let index = sample_index();
        assert_eq!(index.get("3").unwrap().french_term, "Tactique");
        assert!(index.get("99").is_none());
    }
}
