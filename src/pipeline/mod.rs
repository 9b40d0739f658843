//! # Pipeline Module
//!
//! Orchestrates one conversion run.
//!
//! ```text
//! Idle ──▶ Running ──▶ Completed
//!             │
//!             ├──▶ Aborted   (playlist could not be created)
//!             └──▶ Failed    (a playlist batch could not be written)
//! ```
//!
//! While running, records are resolved one after another in input order. After each
//! record the [`Pacer`] decides how long to wait before the next catalog call, and
//! the [`ProgressSink`] receives the share of work done. Matching owns the first
//! 90% of the progress range, writing the playlist the rest.
//!
//! Every record yields exactly one [`crate::matching::MatchOutcome`]; failures of
//! individual records are folded into the unmatched list and never stop the run.

mod pacing;
mod progress;
mod runner;
mod summary;
mod writer;

pub use pacing::{FixedDelay, NoPacing, Pacer, TokenBucket};
pub use progress::{NoProgress, ProgressSink};
pub use runner::{PipelineRunner, PlaylistSettings, PlaylistTarget, RunContext, RunState};
pub use summary::{ConversionSummary, MatchedItem, UnmatchedItem};
pub use writer::PlaylistWriter;
