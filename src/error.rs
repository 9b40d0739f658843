//! Error types for discofy
//!
//! Error strategy:
//! - Per-record errors (search, lookup): recoverable, the record becomes unmatched
//! - Input, setup and batch-write errors: fatal, the run stops
//!
//! Only [`ConvertError`] ever reaches the caller of a run.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::RunState;

/// A catalog search or lookup that did not produce a usable response.
///
/// Never propagated out of a run; the matcher treats it like an empty result.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{operation} failed for '{query}': {reason}")]
pub struct SearchFailure {
    pub operation: &'static str,
    pub query: String,
    pub reason: String,
}

impl SearchFailure {
    pub fn new(operation: &'static str, query: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            operation,
            query: query.into(),
            reason: reason.into(),
        }
    }
}

/// Failures of the account and playlist endpoints.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spotify responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Spotify rejected the request: {0}")]
    Rejected(String),
}

/// Errors that end a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    // =========================================================================
    // Input errors - the run never starts
    // =========================================================================
    #[error("Collection file not found: '{0}'\n  Tip: Check the path exists and is readable")]
    FileNotFound(PathBuf),

    #[error("'{0}' is not a CSV file\n  Tip: Export your collection from Discogs as CSV")]
    NotCsv(PathBuf),

    #[error("Cannot read collection file '{path}': {reason}")]
    Input { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    // =========================================================================
    // Setup errors - the run is aborted before any matching
    // =========================================================================
    #[error("Failed to fetch user information: {0}")]
    UserInfo(#[source] SpotifyError),

    #[error("Failed to create playlist '{name}': {source}")]
    CreatePlaylist {
        name: String,
        #[source]
        source: SpotifyError,
    },

    #[error("This conversion already ran (state: {0:?}); start a new one")]
    RunnerReused(RunState),

    // =========================================================================
    // Write errors - matching completed, the playlist may hold earlier batches
    // =========================================================================
    #[error("Failed to add tracks to playlist (batch {batch} of {batches}): {source}")]
    BatchWrite {
        batch: usize,
        batches: usize,
        #[source]
        source: SpotifyError,
    },
}

impl ConvertError {
    /// Input errors are reported before any remote call was made.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::FileNotFound(_)
                | ConvertError::NotCsv(_)
                | ConvertError::Input { .. }
                | ConvertError::Config(_)
        )
    }

    /// Setup errors abort the run before matching starts.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            ConvertError::UserInfo(_)
                | ConvertError::CreatePlaylist { .. }
                | ConvertError::RunnerReused(_)
        )
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
