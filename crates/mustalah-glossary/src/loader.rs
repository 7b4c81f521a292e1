use std::fs;
use std::io;
use std::path::Path;

use csv::StringRecord;

use mustalah_core::TermRecord;

use crate::error::GlossaryError;
use crate::index::TermIndex;

/// Expected columns of the source table. Any extra columns are ignored;
/// rows are keyed by these names (primary path) or by their position in the
/// recovered header (fallback path).
const COL_NUM: &str = "Num";
const COL_ARABIC_TERM: &str = "MOTS_AR";
const COL_FRENCH_TERM: &str = "MOTS_fr";
const COL_ARABIC_DEF: &str = "DESIGNATION";
const COL_FRENCH_DEF: &str = "DESIGNATION_fr";
const COL_CATEGORY: &str = "chairdappartenance";
const COL_SUBCATEGORY: &str = "Sous_Chapitre";

const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Load a semicolon-delimited glossary table into a [`TermIndex`].
///
/// The delimiter is `;` because the table's free-text fields routinely
/// contain commas. Fatal failures ([`GlossaryError::NotFound`],
/// [`GlossaryError::PermissionDenied`], [`GlossaryError::EmptyFile`],
/// [`GlossaryError::MalformedFormat`]) leave no usable index behind.
/// Individual bad rows are logged and skipped; a file with a valid header
/// but no accepted rows loads as a legitimate empty glossary.
pub fn load(path: impl AsRef<Path>) -> Result<TermIndex, GlossaryError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading terminology glossary");

    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GlossaryError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => GlossaryError::PermissionDenied(path.to_path_buf()),
        _ => GlossaryError::Io(e),
    })?;
    if raw.is_empty() {
        return Err(GlossaryError::EmptyFile(path.to_path_buf()));
    }

    parse(&raw, path)
}

pub(crate) fn parse(raw: &str, path: &Path) -> Result<TermIndex, GlossaryError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(raw.as_bytes());
    let headers = reader.headers()?.clone();

    let mut accepted: Vec<TermRecord> = Vec::new();
    let mut skipped = 0usize;

    if headers.iter().any(|h| h == COL_NUM) {
        let columns = Columns::from_iter(headers.iter());
        for (i, result) in reader.records().enumerate() {
            let row = result?;
            // header is line 1, data rows are 1-indexed after it
            let line = i as u64 + 2;
            match columns.extract(&row, line) {
                Some(record) => accepted.push(record),
                None => skipped += 1,
            }
        }
    } else {
        // The header row was not recognized (no `Num` field). Recover the
        // field names by splitting the first line on `;` and re-parse every
        // data line positionally against that recovered header.
        tracing::warn!(
            path = %path.display(),
            "header row is malformed (no 'Num' field), re-parsing positionally"
        );
        let header_line = raw.lines().next().unwrap_or_default();
        let names: Vec<&str> = header_line.split(';').map(str::trim).collect();
        let columns = Columns::from_iter(names.iter().copied());

        let body = raw.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
        let mut body_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes());
        for (i, result) in body_reader.records().enumerate() {
            let row = result?;
            let line = i as u64 + 2;
            if row.len() < names.len() {
                tracing::warn!(
                    line,
                    expected = names.len(),
                    got = row.len(),
                    "skipping row with unexpected number of columns"
                );
                skipped += 1;
                continue;
            }
            match columns.extract(&row, line) {
                Some(record) => accepted.push(record),
                None => skipped += 1,
            }
        }
    }

    if accepted.is_empty() {
        tracing::warn!(
            path = %path.display(),
            "no terminology loaded: the file contains headers but no valid data rows"
        );
    } else {
        tracing::info!(
            terms = accepted.len(),
            skipped,
            path = %path.display(),
            "terminology glossary loaded"
        );
    }

    TermIndex::from_records(accepted)
}

/// Positions of the named columns within a header. Missing columns stay
/// `None` and read back as empty fields.
struct Columns {
    num: Option<usize>,
    arabic_term: Option<usize>,
    french_term: Option<usize>,
    arabic_def: Option<usize>,
    french_def: Option<usize>,
    category: Option<usize>,
    subcategory: Option<usize>,
}

impl Columns {
    fn from_iter<'a>(names: impl Iterator<Item = &'a str>) -> Self {
        let mut columns = Columns {
            num: None,
            arabic_term: None,
            french_term: None,
            arabic_def: None,
            french_def: None,
            category: None,
            subcategory: None,
        };
        for (i, name) in names.enumerate() {
            let slot = match name.trim() {
                COL_NUM => &mut columns.num,
                COL_ARABIC_TERM => &mut columns.arabic_term,
                COL_FRENCH_TERM => &mut columns.french_term,
                COL_ARABIC_DEF => &mut columns.arabic_def,
                COL_FRENCH_DEF => &mut columns.french_def,
                COL_CATEGORY => &mut columns.category,
                COL_SUBCATEGORY => &mut columns.subcategory,
                _ => continue,
            };
            // duplicate header names: the later column wins
            *slot = Some(i);
        }
        columns
    }

    /// Build a validated record from one data row, or reject it. Rejection
    /// is logged with the approximate line number and never aborts the
    /// load.
    fn extract(&self, row: &StringRecord, line: u64) -> Option<TermRecord> {
        let field = |col: Option<usize>| col.and_then(|i| row.get(i)).unwrap_or("").trim();

        let num = field(self.num);
        let arabic_term = field(self.arabic_term);
        let french_term = field(self.french_term);
        if num.is_empty() || arabic_term.is_empty() || french_term.is_empty() {
            tracing::warn!(
                line,
                "skipping row with missing essential fields (Num, MOTS_AR, MOTS_fr)"
            );
            return None;
        }

        let category = field(self.category);
        Some(TermRecord {
            id: num.to_string(),
            arabic_term: arabic_term.to_string(),
            french_term: french_term.to_string(),
            arabic_def: field(self.arabic_def).to_string(),
            french_def: field(self.french_def).to_string(),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            subcategory: field(self.subcategory).to_string(),
        })
    }
}
