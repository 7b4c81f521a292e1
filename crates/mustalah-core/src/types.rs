use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One validated glossary entry.
///
/// `id`, `arabic_term` and `french_term` are guaranteed non-empty; rows
/// missing any of them are rejected at load time. `id` is opaque text: the
/// source table is numeric in principle but malformed exports produce
/// non-numeric and duplicate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub id: String,
    pub arabic_term: String,
    pub french_term: String,
    pub arabic_def: String,
    pub french_def: String,
    pub category: String,
    pub subcategory: String,
}

impl TermRecord {
    /// Surface form in the given language.
    pub fn term(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.arabic_term,
            Language::French => &self.french_term,
        }
    }

    /// Definition in the given language. May be empty.
    pub fn definition(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.arabic_def,
            Language::French => &self.french_def,
        }
    }
}

/// One whole-word occurrence of a glossary term in scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatch {
    pub term: String,
    pub definition: String,
    pub category: String,
    /// Byte offset of the occurrence in the scanned text.
    pub offset: usize,
    /// Up to 50 characters of surrounding text on each side, clipped at the
    /// string bounds.
    pub context: String,
}

/// One find-and-replace operation applied to a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub found: String,
    pub replaced_with: String,
    pub count: usize,
}

/// Outcome report of a check-and-replace pass.
///
/// The shape is deliberately either/or: when at least one replacement was
/// applied the report carries only the corrections; when nothing was
/// replaced it carries the glossary terms already present in the text. The
/// caller gets "what was fixed" or "what is already there", never both
/// merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementReport {
    Corrections(Vec<Correction>),
    Present(Vec<TermMatch>),
}

impl ReplacementReport {
    pub fn corrections(&self) -> &[Correction] {
        match self {
            ReplacementReport::Corrections(c) => c,
            ReplacementReport::Present(_) => &[],
        }
    }

    pub fn present(&self) -> &[TermMatch] {
        match self {
            ReplacementReport::Corrections(_) => &[],
            ReplacementReport::Present(m) => m,
        }
    }
}
