use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use mustalah_core::Language;

#[derive(Serialize, Deserialize)]
pub struct GlossaryConfig {
    /// Path to the semicolon-delimited term table
    pub path: PathBuf,
    /// Language used when the caller does not specify one
    pub default_language: Language,
    /// Cap on related-term and topic-suggestion listings shown to the user
    pub max_related_terms: usize,
}

impl GlossaryConfig {
    pub fn new() -> Self {
        let path = env::var("GLOSSARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/glossary_sample.csv"));

        let default_language = env::var("GLOSSARY_LANGUAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Language::Arabic);

        let max_related_terms = env::var("MAX_RELATED_TERMS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        GlossaryConfig {
            path,
            default_language,
            max_related_terms,
        }
    }
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self::new()
    }
}
