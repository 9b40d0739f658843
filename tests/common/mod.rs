#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use discofy::{
    catalog::{CatalogSearch, PlaylistApi, SearchCandidate, SearchKind},
    collection::CollectionRecord,
    error::{SearchFailure, SpotifyError},
    matching::MatchMode,
    pipeline::{Pacer, ProgressSink},
};

type SearchKey = (SearchKind, String, String);
type SearchResult = Result<Vec<SearchCandidate>, SearchFailure>;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Exact(SearchKind, String, String),
    Broad(SearchKind, String, String),
    Lookup(String),
}

/// In-memory catalog. Unknown queries return no candidates.
#[derive(Default)]
pub struct FakeCatalog {
    exact: HashMap<SearchKey, SearchResult>,
    broad: HashMap<SearchKey, SearchResult>,
    tracks: HashMap<String, Result<Vec<String>, SearchFailure>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(mut self, kind: SearchKind, title: &str, artist: &str, candidates: Vec<SearchCandidate>) -> Self {
        self.exact
            .insert((kind, title.to_string(), artist.to_string()), Ok(candidates));
        self
    }

    pub fn with_exact_failure(mut self, kind: SearchKind, title: &str, artist: &str) -> Self {
        self.exact.insert(
            (kind, title.to_string(), artist.to_string()),
            Err(SearchFailure::new("exact search", title, "503 Service Unavailable")),
        );
        self
    }

    pub fn with_broad(mut self, kind: SearchKind, cleaned_title: &str, artist: &str, candidates: Vec<SearchCandidate>) -> Self {
        self.broad.insert(
            (kind, cleaned_title.to_string(), artist.to_string()),
            Ok(candidates),
        );
        self
    }

    pub fn with_broad_failure(mut self, kind: SearchKind, cleaned_title: &str, artist: &str) -> Self {
        self.broad.insert(
            (kind, cleaned_title.to_string(), artist.to_string()),
            Err(SearchFailure::new("broad search", cleaned_title, "connection reset")),
        );
        self
    }

    pub fn with_tracks(mut self, album_id: &str, uris: &[&str]) -> Self {
        self.tracks.insert(
            album_id.to_string(),
            Ok(uris.iter().map(|u| u.to_string()).collect()),
        );
        self
    }

    pub fn with_lookup_failure(mut self, album_id: &str) -> Self {
        self.tracks.insert(
            album_id.to_string(),
            Err(SearchFailure::new("track lookup", album_id, "404 Not Found")),
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn broad_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Broad(..)))
            .count()
    }
}

#[async_trait]
impl CatalogSearch for FakeCatalog {
    async fn search_exact(&self, kind: SearchKind, title: &str, artist: &str) -> SearchResult {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Exact(kind, title.to_string(), artist.to_string()));
        self.exact
            .get(&(kind, title.to_string(), artist.to_string()))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn search_broad(&self, kind: SearchKind, cleaned_title: &str, artist: &str) -> SearchResult {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Broad(kind, cleaned_title.to_string(), artist.to_string()));
        self.broad
            .get(&(kind, cleaned_title.to_string(), artist.to_string()))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn lookup_tracks(&self, provider_id: &str) -> Result<Vec<String>, SearchFailure> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Lookup(provider_id.to_string()));
        self.tracks
            .get(provider_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Records created playlists and insertion batches.
#[derive(Default)]
pub struct FakePlaylists {
    pub fail_create: bool,
    /// 1-based index of the insertion call that fails.
    pub fail_on_batch: Option<usize>,
    created: Mutex<Vec<(String, String, String, bool)>>,
    attempts: Mutex<usize>,
    batches: Mutex<Vec<Vec<String>>>,
}

impl FakePlaylists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn failing_batch(batch: usize) -> Self {
        Self {
            fail_on_batch: Some(batch),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<(String, String, String, bool)> {
        self.created.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches().iter().map(Vec::len).collect()
    }
}

#[async_trait]
impl PlaylistApi for FakePlaylists {
    async fn create_playlist(&self, owner_id: &str, name: &str, description: &str, public: bool) -> Result<String, SpotifyError> {
        if self.fail_create {
            return Err(SpotifyError::Status {
                status: 403,
                body: "Insufficient client scope".to_string(),
            });
        }
        self.created.lock().unwrap().push((
            owner_id.to_string(),
            name.to_string(),
            description.to_string(),
            public,
        ));
        Ok("playlist-1".to_string())
    }

    async fn add_tracks(&self, _playlist_id: &str, uris: &[String]) -> Result<(), SpotifyError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if self.fail_on_batch == Some(attempt) {
            return Err(SpotifyError::Status {
                status: 500,
                body: "Internal server error".to_string(),
            });
        }
        self.batches.lock().unwrap().push(uris.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub updates: Vec<(f64, String)>,
}

impl ProgressSink for RecordingProgress {
    fn progress(&mut self, percent: f64, status: &str) {
        self.updates.push((percent, status.to_string()));
    }
}

/// Never waits; remembers the mode of every pause. Clones share the log, so a
/// copy can be handed to the runner and inspected afterwards.
#[derive(Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<MatchMode>>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<MatchMode> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&mut self, mode: MatchMode) {
        self.pauses.lock().unwrap().push(mode);
    }
}

pub fn record(artist: &str, title: &str) -> CollectionRecord {
    CollectionRecord::new(artist, title)
}

pub fn candidate(id: &str, artists: &[&str], title: &str) -> SearchCandidate {
    SearchCandidate {
        provider_id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        artist_names: artists.iter().map(|a| a.to_string()).collect(),
        display_title: title.to_string(),
    }
}

pub fn album(id: &str, artists: &[&str], title: &str) -> SearchCandidate {
    SearchCandidate {
        provider_id: id.to_string(),
        uri: format!("spotify:album:{}", id),
        artist_names: artists.iter().map(|a| a.to_string()).collect(),
        display_title: title.to_string(),
    }
}

pub fn uris(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("spotify:track:{}{}", prefix, i))
        .collect()
}
