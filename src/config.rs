//! Configuration management for discofy.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the Spotify
//! credentials handed to the tool and the tuning knobs of the conversion pipeline.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (for the values that have one)
//! 2. Environment variables
//! 3. `.env` file in the local data directory, then in the working directory
//! 4. Application defaults from [`crate::common`]

use std::{env, path::PathBuf, time::Duration};

use crate::{common, error::ConvertError};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `discofy` data directory if it doesn't exist and loads
/// `discofy/.env` from it. When that file is missing a `.env` in the working
/// directory is tried instead; a missing file is not an error since every value
/// can also come from the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/discofy/.env`
/// - macOS: `~/Library/Application Support/discofy/.env`
/// - Windows: `%LOCALAPPDATA%/discofy/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Root of everything discofy stores locally.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("discofy");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to the public endpoint. Overriding it is
/// mostly useful for pointing the client at a local test server.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| common::SPOTIFY_API_URL.to_string())
}

/// Returns the bearer token used for every Spotify request.
///
/// The token has to carry the `playlist-modify-private` (and, for public
/// playlists, `playlist-modify-public`) scope. How it is obtained is up to the user.
pub fn access_token() -> Result<String, ConvertError> {
    match env::var("SPOTIFY_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(ConvertError::Config(
            "SPOTIFY_ACCESS_TOKEN must be set (or pass --token)".to_string(),
        )),
    }
}

/// Returns the Spotify user that will own the playlist, if configured.
///
/// When unset the user is looked up through the `/me` endpoint.
pub fn spotify_user() -> Option<String> {
    env::var("SPOTIFY_USER_ID")
        .ok()
        .filter(|user| !user.trim().is_empty())
}

/// Pause after each record in track mode (`DISCOFY_TRACK_DELAY_MS`).
pub fn track_delay() -> Duration {
    parse_millis(env::var("DISCOFY_TRACK_DELAY_MS").ok(), common::DEFAULT_TRACK_DELAY)
}

/// Pause after each record in album mode (`DISCOFY_ALBUM_DELAY_MS`).
pub fn album_delay() -> Duration {
    parse_millis(env::var("DISCOFY_ALBUM_DELAY_MS").ok(), common::DEFAULT_ALBUM_DELAY)
}

/// Playlist insertion batch size (`DISCOFY_BATCH_SIZE`), capped at the API maximum.
pub fn batch_size() -> usize {
    parse_batch_size(env::var("DISCOFY_BATCH_SIZE").ok())
}

/// Header aliases accepted for the artist column (`DISCOFY_ARTIST_FIELDS`).
pub fn artist_fields() -> Vec<String> {
    parse_field_list(
        env::var("DISCOFY_ARTIST_FIELDS").ok(),
        common::DEFAULT_ARTIST_FIELDS,
    )
}

/// Header aliases accepted for the title column (`DISCOFY_TITLE_FIELDS`).
pub fn title_fields() -> Vec<String> {
    parse_field_list(
        env::var("DISCOFY_TITLE_FIELDS").ok(),
        common::DEFAULT_TITLE_FIELDS,
    )
}

/// Parses a millisecond count, keeping `default` for missing or garbage values.
pub fn parse_millis(value: Option<String>, default: Duration) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

/// Parses a batch size; zero and garbage fall back to the API maximum.
pub fn parse_batch_size(value: Option<String>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|size| *size > 0)
        .map(|size| size.min(common::MAX_PLAYLIST_BATCH))
        .unwrap_or(common::MAX_PLAYLIST_BATCH)
}

/// Parses a comma separated alias list.
pub fn parse_field_list(value: Option<String>, default: &[&str]) -> Vec<String> {
    let parsed: Vec<String> = value
        .map(|v| {
            v.split(',')
                .map(|field| field.trim().to_string())
                .filter(|field| !field.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if parsed.is_empty() {
        default.iter().map(|field| field.to_string()).collect()
    } else {
        parsed
    }
}
