use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Glossary language. Every term record carries both surface forms; queries
/// and scans select one partition through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::French => "french",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown language '{0}', expected 'arabic' or 'french'")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arabic" | "ar" => Ok(Language::Arabic),
            "french" | "fr" => Ok(Language::French),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}
