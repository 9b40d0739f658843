//! # Spotify Integration Module
//!
//! Implements the catalog and playlist seams of [`crate::catalog`] on top of the
//! Spotify Web API.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (matching, writing)
//!          ↓
//! catalog::{CatalogSearch, PlaylistApi}
//!          ↓
//! SpotifyClient
//!     ├── search    (GET /search, GET /albums/{id}/tracks)
//!     ├── playlist  (POST /users/{id}/playlists, POST /playlists/{id}/tracks)
//!     └── user      (GET /me)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! The client is handed a ready bearer token and attaches it to every request. It
//! does not obtain, refresh or store tokens.
//!
//! ## Error Handling
//!
//! Search and lookup calls return [`SearchFailure`] for transport errors, non-success
//! statuses and undecodable bodies, so the matcher can treat them as "nothing found".
//! Account and playlist calls return [`SpotifyError`]. No request is retried.
//!
//! ## Endpoints
//!
//! - `GET /search` - exact and broad searches, scoped to `track` or `album`
//! - `GET /albums/{id}/tracks` - first page of an album's tracks
//! - `GET /me` - owner of the new playlist when no user id is configured
//! - `POST /users/{user_id}/playlists` - create the playlist
//! - `POST /playlists/{playlist_id}/tracks` - add up to 100 tracks per call

mod playlist;
mod search;
mod user;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use search::{broad_query, exact_query};

use crate::{
    config,
    error::{ConvertError, SearchFailure, SpotifyError},
};

/// Authorized access to the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Builds a client from configuration; `token` overrides `SPOTIFY_ACCESS_TOKEN`.
    pub fn from_env(token: Option<String>) -> Result<Self, ConvertError> {
        let token = match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => token,
            None => config::access_token()?,
        };
        Ok(Self::new(config::spotify_apiurl(), token))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(&self.token)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(&self.token)
    }

    /// Sends a request and decodes a successful JSON body.
    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, SpotifyError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Status {
                status: status.as_u16(),
                body: error_message(&body),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Pulls `error.message` out of a Spotify error body, or returns the body as is.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json["error"]["message"]
                .as_str()
                .or_else(|| json["error_description"].as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

impl SpotifyError {
    fn into_search_failure(self, operation: &'static str, query: &str) -> SearchFailure {
        SearchFailure::new(operation, query, self.to_string())
    }
}
