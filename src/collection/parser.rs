use std::collections::BTreeMap;

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

/// One data row keyed by its (trimmed) header name.
pub type RawRow = BTreeMap<String, String>;

/// Header row plus data rows of a collection export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCollection {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Splits a single line into raw field values.
///
/// A quote toggles the quoted state and is dropped; a delimiter inside a quoted span
/// is kept as text. Doubled quotes are not treated as an escaped quote, so `""`
/// simply toggles twice.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    values.push(current);
    values
}

/// Parses a whole export. The first non-blank line is the header row.
///
/// Blank lines produce no row. Values are trimmed, columns missing from a short row
/// become empty strings and values beyond the header width are ignored.
pub fn parse(text: &str) -> ParsedCollection {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return ParsedCollection::default();
    };

    let headers: Vec<String> = parse_line(header_line)
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let rows = lines
        .map(|line| {
            let values = parse_line(line);
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).map(|v| v.trim()).unwrap_or_default();
                    (header.clone(), value.to_string())
                })
                .collect::<RawRow>()
        })
        .collect();

    ParsedCollection { headers, rows }
}
