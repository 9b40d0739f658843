//! Seams between the conversion pipeline and the remote catalog.
//!
//! The pipeline only talks to these traits. [`crate::spotify::SpotifyClient`] is the
//! production implementation; tests substitute in-memory fakes. Cross-cutting
//! behaviour such as retries belongs in a wrapper that implements the same trait.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{SearchFailure, SpotifyError};

/// Which catalog entity a search is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Track,
    Album,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub provider_id: String,
    pub uri: String,
    pub artist_names: Vec<String>,
    pub display_title: String,
}

impl SearchCandidate {
    /// `Artist A, Artist B - Title`
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist_names.join(", "), self.display_title)
    }
}

/// Search and lookup operations. Each call issues exactly one request.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Field-scoped, quoted search for `title` by `artist`, best match first.
    async fn search_exact(
        &self,
        kind: SearchKind,
        title: &str,
        artist: &str,
    ) -> Result<Vec<SearchCandidate>, SearchFailure>;

    /// Free-text search over an already cleaned title and the artist.
    async fn search_broad(
        &self,
        kind: SearchKind,
        cleaned_title: &str,
        artist: &str,
    ) -> Result<Vec<SearchCandidate>, SearchFailure>;

    /// Track URIs of an album, first page only.
    async fn lookup_tracks(&self, provider_id: &str) -> Result<Vec<String>, SearchFailure>;
}

/// Playlist operations used by the runner and the writer.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    /// Creates a playlist owned by `owner_id` and returns its id.
    async fn create_playlist(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<String, SpotifyError>;

    /// Appends `uris` to the end of the playlist.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), SpotifyError>;
}
