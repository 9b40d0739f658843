use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::SearchCandidate,
    matching::{MatchMode, MatchOutcome, UnmatchedReason},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedItem {
    pub artist: String,
    pub title: String,
    pub candidate: SearchCandidate,
    pub track_count: usize,
}

impl MatchedItem {
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedItem {
    pub artist: String,
    pub title: String,
    pub reason: UnmatchedReason,
}

impl UnmatchedItem {
    /// `Artist - Title`, with `Unknown` for missing parts.
    pub fn label(&self) -> String {
        let artist = if self.artist.is_empty() { "Unknown" } else { &self.artist };
        let title = if self.title.is_empty() { "Unknown" } else { &self.title };
        format!("{} - {}", artist, title)
    }
}

/// Final result of a run, in input order. Serialized as the stored run report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// `None` for dry runs, which never create a playlist.
    pub playlist_id: Option<String>,
    pub playlist_name: String,
    pub mode: MatchMode,
    pub total_count: usize,
    pub added_count: usize,
    pub matched: Vec<MatchedItem>,
    pub unmatched: Vec<UnmatchedItem>,
    pub finished_at: DateTime<Utc>,
}

impl ConversionSummary {
    pub fn from_outcomes(
        playlist_id: Option<String>,
        playlist_name: &str,
        mode: MatchMode,
        outcomes: &[MatchOutcome],
        added_count: usize,
    ) -> Self {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for outcome in outcomes {
            match outcome {
                MatchOutcome::Matched {
                    record,
                    candidate,
                    track_uris,
                } => matched.push(MatchedItem {
                    artist: record.artist().to_string(),
                    title: record.title().to_string(),
                    candidate: candidate.clone(),
                    track_count: track_uris.len(),
                }),
                MatchOutcome::Unmatched { record, reason } => unmatched.push(UnmatchedItem {
                    artist: record.artist().to_string(),
                    title: record.title().to_string(),
                    reason: reason.clone(),
                }),
            }
        }

        Self {
            playlist_id,
            playlist_name: playlist_name.to_string(),
            mode,
            total_count: outcomes.len(),
            added_count,
            matched,
            unmatched,
            finished_at: Utc::now(),
        }
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    pub fn unmatched_labels(&self) -> Vec<String> {
        self.unmatched.iter().map(UnmatchedItem::label).collect()
    }

    /// Albums that were found, only meaningful in album mode.
    pub fn matched_albums(&self) -> Vec<String> {
        match self.mode {
            MatchMode::Album => self.matched.iter().map(|m| m.candidate.label()).collect(),
            MatchMode::Track => Vec::new(),
        }
    }
}
