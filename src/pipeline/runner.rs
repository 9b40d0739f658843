use tracing::{debug, info, warn};

use crate::{
    catalog::{CatalogSearch, PlaylistApi},
    collection::CollectionRecord,
    common,
    error::ConvertError,
    matching::{MatchMode, MatchOutcome, MatchResolver, UnmatchedReason},
    pipeline::{
        pacing::{FixedDelay, Pacer},
        progress::ProgressSink,
        summary::ConversionSummary,
        writer::PlaylistWriter,
    },
};

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    /// Setup failed (playlist creation); nothing was matched.
    Aborted,
    /// Matching finished but writing the playlist failed.
    Failed,
}

/// The playlist a run writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTarget {
    pub playlist_id: String,
}

/// What the new playlist should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSettings {
    pub name: String,
    pub description: String,
    pub public: bool,
}

/// Per-run accumulator, owned by the runner while the run lasts.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    outcomes: Vec<MatchOutcome>,
    track_uris: Vec<String>,
    total: usize,
}

impl RunContext {
    pub fn new(total: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(total),
            track_uris: Vec::new(),
            total,
        }
    }

    pub fn push(&mut self, outcome: MatchOutcome) {
        self.track_uris.extend_from_slice(outcome.track_uris());
        self.outcomes.push(outcome);
    }

    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of records processed, 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed() as f64 / self.total as f64
        }
    }

    pub fn outcomes(&self) -> &[MatchOutcome] {
        &self.outcomes
    }

    pub fn track_uris(&self) -> &[String] {
        &self.track_uris
    }
}

/// Drives a conversion: create the playlist, match every record in order, write the
/// collected tracks.
pub struct PipelineRunner<'a> {
    catalog: &'a dyn CatalogSearch,
    playlists: &'a dyn PlaylistApi,
    pacer: Box<dyn Pacer + 'a>,
    mode: MatchMode,
    max_batch_size: usize,
    matching_weight: f64,
    state: RunState,
}

impl<'a> PipelineRunner<'a> {
    pub fn new(catalog: &'a dyn CatalogSearch, playlists: &'a dyn PlaylistApi, mode: MatchMode) -> Self {
        Self {
            catalog,
            playlists,
            pacer: Box::new(FixedDelay::default()),
            mode,
            max_batch_size: common::MAX_PLAYLIST_BATCH,
            matching_weight: common::MATCHING_PHASE_WEIGHT,
            state: RunState::Idle,
        }
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'a) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn with_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    /// Share of the progress range used by matching, clamped to `0.0..=1.0`.
    pub fn with_matching_weight(mut self, weight: f64) -> Self {
        self.matching_weight = weight.clamp(0.0, 1.0);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Runs a full conversion for `owner_id`.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::CreatePlaylist`] before any record is matched (state `Aborted`)
    /// - [`ConvertError::BatchWrite`] after matching (state `Failed`)
    ///
    /// - [`ConvertError::RunnerReused`] when this runner already ran (state unchanged)
    ///
    /// Per-record failures never surface here; they end up in the unmatched list.
    /// A runner is single-use: `Completed`, `Aborted` and `Failed` are terminal.
    pub async fn run(
        &mut self,
        owner_id: &str,
        settings: &PlaylistSettings,
        records: &[CollectionRecord],
        progress: &mut dyn ProgressSink,
    ) -> Result<ConversionSummary, ConvertError> {
        self.start()?;

        let target = match self
            .playlists
            .create_playlist(owner_id, &settings.name, &settings.description, settings.public)
            .await
        {
            Ok(playlist_id) => PlaylistTarget { playlist_id },
            Err(source) => {
                self.state = RunState::Aborted;
                return Err(ConvertError::CreatePlaylist {
                    name: settings.name.clone(),
                    source,
                });
            }
        };
        info!(playlist = %target.playlist_id, "playlist created");
        progress.progress(0.0, &format!("Created playlist: {}", settings.name));

        let context = self.match_records(records, progress).await;

        let added = if context.track_uris().is_empty() {
            0
        } else {
            let writer = PlaylistWriter::new(self.playlists, self.max_batch_size);
            match writer
                .write(
                    &target.playlist_id,
                    context.track_uris(),
                    self.matching_weight * 100.0,
                    progress,
                )
                .await
            {
                Ok(added) => added,
                Err(e) => {
                    self.state = RunState::Failed;
                    return Err(e);
                }
            }
        };

        self.state = RunState::Completed;
        progress.progress(100.0, "Conversion complete!");

        Ok(ConversionSummary::from_outcomes(
            Some(target.playlist_id),
            &settings.name,
            self.mode,
            context.outcomes(),
            added,
        ))
    }

    /// Matches every record without touching any playlist.
    ///
    /// # Errors
    ///
    /// [`ConvertError::RunnerReused`] when this runner already ran.
    pub async fn dry_run(
        &mut self,
        playlist_name: &str,
        records: &[CollectionRecord],
        progress: &mut dyn ProgressSink,
    ) -> Result<ConversionSummary, ConvertError> {
        self.start()?;
        let context = self.match_records(records, progress).await;
        self.state = RunState::Completed;
        progress.progress(100.0, "Dry run complete!");

        Ok(ConversionSummary::from_outcomes(
            None,
            playlist_name,
            self.mode,
            context.outcomes(),
            0,
        ))
    }

    fn start(&mut self) -> Result<(), ConvertError> {
        if self.state != RunState::Idle {
            return Err(ConvertError::RunnerReused(self.state));
        }
        self.state = RunState::Running;
        Ok(())
    }

    /// Resolves records strictly in order, one at a time, pacing after each one
    /// that reached the catalog.
    async fn match_records(
        &mut self,
        records: &[CollectionRecord],
        progress: &mut dyn ProgressSink,
    ) -> RunContext {
        let mut context = RunContext::new(records.len());
        let resolver = MatchResolver::new(self.catalog, self.mode);

        for record in records {
            let outcome = match resolver.resolve(record).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(record = %record.label(), error = %e, "record failed, marking unmatched");
                    MatchOutcome::unmatched(record, UnmatchedReason::LookupFailed(e.to_string()))
                }
            };
            debug!(record = %record.label(), matched = outcome.is_matched(), "record resolved");
            context.push(outcome);

            let percent = context.fraction() * self.matching_weight * 100.0;
            progress.progress(percent, &format!("Searching: {}", record.label()));

            if record.is_searchable() {
                self.pacer.pause(self.mode).await;
            }
        }

        context
    }
}
