//! # Collection Module
//!
//! Reads a collection export and turns it into [`CollectionRecord`]s, the input of
//! the conversion pipeline.
//!
//! The export is a comma separated file with a header row. Quoting follows a simple
//! dialect: a `"` toggles the quoted state and a comma inside quotes is literal text.
//! Doubled quotes (`""`) are not an escape sequence, so a title containing a quote
//! character cannot be represented faithfully.
//!
//! Artist and title are looked up through configurable header aliases (see
//! [`FieldAliases`]); every other column is kept verbatim in
//! [`CollectionRecord::raw_fields`] for display.

mod parser;
mod record;

use std::path::Path;

use tracing::debug;

pub use parser::{DELIMITER, ParsedCollection, QUOTE, RawRow, parse, parse_line};
pub use record::{CollectionRecord, FieldAliases, lookup_field, normalize};

use crate::{common, error::ConvertError};

/// Parses export text into records.
pub fn parse_collection(text: &str, aliases: &FieldAliases) -> Vec<CollectionRecord> {
    normalize(&parse(text).rows, aliases)
}

/// Reads and parses a `.csv` export from disk.
///
/// # Errors
///
/// - [`ConvertError::FileNotFound`] if the path does not name a file
/// - [`ConvertError::NotCsv`] if the extension is not `csv` (any case)
/// - [`ConvertError::Input`] if the file cannot be read as UTF-8 text
pub async fn read_collection_file(path: &Path) -> Result<ParsedCollection, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::FileNotFound(path.to_path_buf()));
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(ConvertError::NotCsv(path.to_path_buf()));
    }

    let text = async_fs::read_to_string(path)
        .await
        .map_err(|e| ConvertError::Input {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let parsed = parse(&text);
    debug!(
        path = %path.display(),
        columns = parsed.headers.len(),
        rows = parsed.rows.len(),
        "collection parsed"
    );
    Ok(parsed)
}

/// Headers worth showing in a preview, in file order.
pub fn preview_headers(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .filter(|header| {
            let header = header.to_lowercase();
            common::PREVIEW_FIELDS
                .iter()
                .any(|key| header.contains(key))
        })
        .cloned()
        .collect()
}
