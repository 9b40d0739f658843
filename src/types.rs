use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<TrackObject>>,
    pub albums: Option<Paging<AlbumObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub total_tracks: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct MatchedTableRow {
    pub record: String,
    pub matched: String,
    pub tracks: usize,
}

#[derive(Tabled)]
pub struct UnmatchedTableRow {
    pub record: String,
    pub reason: String,
}

#[derive(Tabled)]
pub struct ReportTableRow {
    pub finished: String,
    pub playlist: String,
    pub name: String,
    pub mode: String,
    pub matched: usize,
    pub unmatched: usize,
    pub added: usize,
}
