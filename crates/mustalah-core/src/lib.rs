pub mod language;
pub mod types;

pub use self::language::Language;
pub use self::types::{Correction, ReplacementReport, TermMatch, TermRecord};
