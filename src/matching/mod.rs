//! # Matching Module
//!
//! Decides, for one [`CollectionRecord`], which catalog entry it corresponds to and
//! which track URIs that contributes to the playlist.
//!
//! ## Track mode
//!
//! A single quoted search (`track:"<title>" artist:"<artist>"`). The first result
//! wins and its own URI is the only track added.
//!
//! ## Album mode
//!
//! 1. **Exact tier**: quoted album search; the first result wins.
//! 2. **Broad tier**, only when the exact tier found nothing: punctuation is stripped
//!    from the title and a free-text search over title and artist is issued. The
//!    first result whose artist list contains the record's artist (or is contained
//!    in it, ignoring case) wins. Without such a result the record stays unmatched.
//! 3. The winning album's tracks are looked up and all of them are added.
//!
//! Records with an empty artist or title are never searched.

mod heuristics;
mod resolver;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use heuristics::{artist_name_matches, candidate_matches_artist, clean_title, select_by_artist};
pub use resolver::MatchResolver;

use crate::{
    catalog::{SearchCandidate, SearchKind},
    collection::CollectionRecord,
};

/// Granularity of the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Each record is a single track
    Track,
    /// Each record is a release; all of its tracks are added
    Album,
}

impl MatchMode {
    pub fn kind(&self) -> SearchKind {
        match self {
            MatchMode::Track => SearchKind::Track,
            MatchMode::Album => SearchKind::Album,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().as_str())
    }
}

/// Why a record did not produce a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum UnmatchedReason {
    MissingFields,
    NoCandidates,
    NoArtistMatch,
    SearchFailed(String),
    LookupFailed(String),
}

impl fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedReason::MissingFields => f.write_str("missing artist or title"),
            UnmatchedReason::NoCandidates => f.write_str("no results"),
            UnmatchedReason::NoArtistMatch => f.write_str("no result by this artist"),
            UnmatchedReason::SearchFailed(e) => write!(f, "search failed: {}", e),
            UnmatchedReason::LookupFailed(e) => write!(f, "track lookup failed: {}", e),
        }
    }
}

/// The verdict for one record. Created once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched {
        record: CollectionRecord,
        candidate: SearchCandidate,
        track_uris: Vec<String>,
    },
    Unmatched {
        record: CollectionRecord,
        reason: UnmatchedReason,
    },
}

impl MatchOutcome {
    pub fn matched(record: &CollectionRecord, candidate: SearchCandidate, track_uris: Vec<String>) -> Self {
        MatchOutcome::Matched {
            record: record.clone(),
            candidate,
            track_uris,
        }
    }

    pub fn unmatched(record: &CollectionRecord, reason: UnmatchedReason) -> Self {
        MatchOutcome::Unmatched {
            record: record.clone(),
            reason,
        }
    }

    pub fn record(&self) -> &CollectionRecord {
        match self {
            MatchOutcome::Matched { record, .. } | MatchOutcome::Unmatched { record, .. } => record,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn track_uris(&self) -> &[String] {
        match self {
            MatchOutcome::Matched { track_uris, .. } => track_uris,
            MatchOutcome::Unmatched { .. } => &[],
        }
    }
}
