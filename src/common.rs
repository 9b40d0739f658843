//! Limits and defaults shared by the catalog client, the pipeline and the CLI.

use std::time::Duration;

pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Candidates requested by a quoted, field-scoped search.
pub const EXACT_SEARCH_LIMIT: u32 = 5;

/// Candidates requested by the free-text fallback search.
pub const BROAD_SEARCH_LIMIT: u32 = 20;

/// Single page of album tracks; longer albums are truncated.
pub const ALBUM_TRACK_LIMIT: u32 = 50;

/// Maximum number of URIs Spotify accepts per playlist insertion.
pub const MAX_PLAYLIST_BATCH: usize = 100;

pub const DEFAULT_TRACK_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_ALBUM_DELAY: Duration = Duration::from_millis(250);

/// Share of the progress bar given to the matching phase; writing gets the rest.
pub const MATCHING_PHASE_WEIGHT: f64 = 0.9;

pub const DEFAULT_ARTIST_FIELDS: &[&str] = &["artist", "Artist"];
pub const DEFAULT_TITLE_FIELDS: &[&str] = &["title", "Title"];

/// Header fragments shown by the collection preview.
pub const PREVIEW_FIELDS: &[&str] = &["artist", "title", "label", "format", "catalog#"];

pub const DEFAULT_PLAYLIST_NAME: &str = "My Discogs Collection";
pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Converted from Discogs collection";
