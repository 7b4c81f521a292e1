use std::path::PathBuf;

/// Fatal glossary loading failures.
///
/// Row-level problems (missing essential fields, wrong column counts) are
/// not represented here: they are logged and skipped, and loading
/// continues. A load that succeeds with zero terms is a valid empty index,
/// not an error.
#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("glossary file not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied reading glossary file: {0}")]
    PermissionDenied(PathBuf),

    #[error("glossary file is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("malformed glossary data: {0}")]
    MalformedFormat(#[from] csv::Error),

    #[error("failed to compile search pattern for term '{term}'")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
