//! Discogs Collection to Spotify Playlist Library
//!
//! This library turns a collection export (a CSV file with artist/title columns, as
//! produced by Discogs) into a Spotify playlist. Every record is matched against the
//! Spotify catalog, the resulting track URIs are written to a freshly created
//! playlist, and a summary of matched and unmatched records is produced.
//!
//! # Modules
//!
//! - `catalog` - Catalog and playlist seams consumed by the pipeline
//! - `cli` - Command-line interface implementations
//! - `collection` - CSV parsing and record normalization
//! - `common` - Catalog API limits and defaults
//! - `config` - Configuration management and environment variables
//! - `error` - Error types
//! - `management` - Persistence of run summaries
//! - `matching` - Tiered matching of records against the catalog
//! - `pipeline` - Run orchestration, pacing, progress and playlist writing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use discofy::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> discofy::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod collection;
pub mod common;
pub mod config;
pub mod error;
pub mod management;
pub mod matching;
pub mod pipeline;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Used where the concrete error does not matter to the caller, such as
/// persisting and loading run summaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Reading collection from {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} tracks to the playlist", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used from the command layer for failures that end the run: input errors,
/// setup errors and batch-write errors. Library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Conversion failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Could not save run summary: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
