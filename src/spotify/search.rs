use async_trait::async_trait;
use tracing::debug;

use crate::{
    catalog::{CatalogSearch, SearchCandidate, SearchKind},
    common,
    error::SearchFailure,
    spotify::SpotifyClient,
    types::{AlbumObject, AlbumTrack, ArtistRef, Paging, SearchResponse, TrackObject},
};

/// `track:"<title>" artist:"<artist>"` or `album:"<title>" artist:"<artist>"`.
pub fn exact_query(kind: SearchKind, title: &str, artist: &str) -> String {
    format!(
        "{kind}:\"{title}\" artist:\"{artist}\"",
        kind = kind,
        title = title,
        artist = artist
    )
}

/// Free text: the cleaned title followed by the artist.
pub fn broad_query(cleaned_title: &str, artist: &str) -> String {
    format!("{} {}", cleaned_title, artist).trim().to_string()
}

fn artist_names(artists: &[ArtistRef]) -> Vec<String> {
    artists.iter().map(|a| a.name.clone()).collect()
}

impl From<TrackObject> for SearchCandidate {
    fn from(track: TrackObject) -> Self {
        SearchCandidate {
            provider_id: track.id.unwrap_or_else(|| track.uri.clone()),
            uri: track.uri,
            artist_names: artist_names(&track.artists),
            display_title: track.name,
        }
    }
}

impl From<AlbumObject> for SearchCandidate {
    fn from(album: AlbumObject) -> Self {
        SearchCandidate {
            provider_id: album.id,
            uri: album.uri,
            artist_names: artist_names(&album.artists),
            display_title: album.name,
        }
    }
}

fn candidates(kind: SearchKind, response: SearchResponse) -> Vec<SearchCandidate> {
    match kind {
        SearchKind::Track => response
            .tracks
            .map(|page| page.items.into_iter().map(SearchCandidate::from).collect())
            .unwrap_or_default(),
        SearchKind::Album => response
            .albums
            .map(|page| page.items.into_iter().map(SearchCandidate::from).collect())
            .unwrap_or_default(),
    }
}

impl SpotifyClient {
    async fn search(
        &self,
        operation: &'static str,
        kind: SearchKind,
        query: &str,
        limit: u32,
    ) -> Result<Vec<SearchCandidate>, SearchFailure> {
        debug!(operation, kind = %kind, query, limit, "searching catalog");
        let request = self.get("/search").query(&[
            ("q", query.to_string()),
            ("type", kind.to_string()),
            ("limit", limit.to_string()),
        ]);

        let response = Self::send_json::<SearchResponse>(request)
            .await
            .map_err(|e| e.into_search_failure(operation, query))?;

        Ok(candidates(kind, response))
    }
}

#[async_trait]
impl CatalogSearch for SpotifyClient {
    async fn search_exact(
        &self,
        kind: SearchKind,
        title: &str,
        artist: &str,
    ) -> Result<Vec<SearchCandidate>, SearchFailure> {
        let query = exact_query(kind, title, artist);
        self.search("exact search", kind, &query, common::EXACT_SEARCH_LIMIT)
            .await
    }

    async fn search_broad(
        &self,
        kind: SearchKind,
        cleaned_title: &str,
        artist: &str,
    ) -> Result<Vec<SearchCandidate>, SearchFailure> {
        let query = broad_query(cleaned_title, artist);
        self.search("broad search", kind, &query, common::BROAD_SEARCH_LIMIT)
            .await
    }

    async fn lookup_tracks(&self, provider_id: &str) -> Result<Vec<String>, SearchFailure> {
        debug!(album = provider_id, "looking up album tracks");
        let request = self
            .get(&format!("/albums/{}/tracks", provider_id))
            .query(&[("limit", common::ALBUM_TRACK_LIMIT.to_string())]);

        let page = Self::send_json::<Paging<AlbumTrack>>(request)
            .await
            .map_err(|e| e.into_search_failure("track lookup", provider_id))?;

        Ok(page.items.into_iter().map(|track| track.uri).collect())
    }
}
