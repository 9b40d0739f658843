use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{collection::parser::RawRow, common, config};

/// A normalized collection entry. Artist and title may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    artist: String,
    title: String,
    raw_fields: BTreeMap<String, String>,
}

impl CollectionRecord {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            raw_fields: BTreeMap::new(),
        }
    }

    pub fn with_fields(
        artist: impl Into<String>,
        title: impl Into<String>,
        raw_fields: BTreeMap<String, String>,
    ) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            raw_fields,
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn raw_fields(&self) -> &BTreeMap<String, String> {
        &self.raw_fields
    }

    /// Case-insensitive lookup of an original column.
    pub fn field(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.raw_fields
            .iter()
            .find(|(header, _)| header.to_lowercase() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Both artist and title are present, so a catalog query makes sense.
    pub fn is_searchable(&self) -> bool {
        !self.artist.is_empty() && !self.title.is_empty()
    }

    /// `Artist - Title` with `Unknown` standing in for missing parts.
    pub fn label(&self) -> String {
        let artist = if self.artist.is_empty() { "Unknown" } else { &self.artist };
        let title = if self.title.is_empty() { "Unknown" } else { &self.title };
        format!("{} - {}", artist, title)
    }
}

/// Header names accepted for the artist and title columns, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    pub artist: Vec<String>,
    pub title: Vec<String>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            artist: common::DEFAULT_ARTIST_FIELDS.iter().map(|f| f.to_string()).collect(),
            title: common::DEFAULT_TITLE_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl FieldAliases {
    pub fn from_env() -> Self {
        Self {
            artist: config::artist_fields(),
            title: config::title_fields(),
        }
    }
}

/// Returns the first non-empty value whose header matches an alias, trying aliases
/// in order and ignoring case.
pub fn lookup_field(row: &RawRow, aliases: &[String]) -> String {
    for alias in aliases {
        let alias = alias.to_lowercase();
        let hit = row
            .iter()
            .find(|(header, value)| !value.is_empty() && header.to_lowercase() == alias);
        if let Some((_, value)) = hit {
            return value.clone();
        }
    }
    String::new()
}

/// One record per row, in row order.
pub fn normalize(rows: &[RawRow], aliases: &FieldAliases) -> Vec<CollectionRecord> {
    rows.iter()
        .map(|row| {
            CollectionRecord::with_fields(
                lookup_field(row, &aliases.artist),
                lookup_field(row, &aliases.title),
                row.clone(),
            )
        })
        .collect()
}
