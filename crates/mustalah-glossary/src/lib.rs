pub mod error;
pub mod index;
pub mod loader;
pub mod matcher;
pub mod replace;

pub use self::error::GlossaryError;
pub use self::index::TermIndex;
pub use self::loader::load;
pub use mustalah_core::{Correction, Language, ReplacementReport, TermMatch, TermRecord};

#[cfg(test)]
pub(crate) mod test_util;
