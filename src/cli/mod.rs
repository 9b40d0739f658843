//! # CLI Module
//!
//! User-facing commands of discofy. Each command reads its inputs, calls into the
//! library modules and reports back through the output macros, tables and a
//! progress bar.
//!
//! ## Commands
//!
//! - [`convert`] - Matches a collection export against Spotify and writes a playlist
//! - [`preview`] - Shows the first records of an export as they will be matched
//! - [`report`] - Lists stored run summaries or replays one of them
//!
//! ## Usage Patterns
//!
//! ```bash
//! discofy preview collection.csv                      # Check the export parses
//! discofy convert collection.csv --mode album         # Whole releases
//! discofy convert collection.csv --mode track --dry-run
//! discofy report                                      # Past conversions
//! ```
//!
//! ## Error Handling
//!
//! Input, setup and playlist-write failures end the program with a message.
//! Records that cannot be matched are listed in the results, never fatal.

mod convert;
mod preview;
mod progress;
mod report;

pub use convert::{ConvertOptions, convert, default_playlist_name};
pub use preview::preview;
pub use progress::BarProgress;
pub use report::{print_summary, report};
