use tracing::debug;

use crate::{
    catalog::PlaylistApi, common, error::ConvertError, pipeline::progress::ProgressSink,
};

/// Appends track URIs to a playlist in bounded, ordered batches.
pub struct PlaylistWriter<'a> {
    api: &'a dyn PlaylistApi,
    max_batch_size: usize,
}

impl<'a> PlaylistWriter<'a> {
    /// `max_batch_size` is clamped to `1..=MAX_PLAYLIST_BATCH`.
    pub fn new(api: &'a dyn PlaylistApi, max_batch_size: usize) -> Self {
        Self {
            api,
            max_batch_size: max_batch_size.clamp(1, common::MAX_PLAYLIST_BATCH),
        }
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Number of insertion calls needed for `count` URIs.
    pub fn batch_count(&self, count: usize) -> usize {
        count.div_ceil(self.max_batch_size)
    }

    /// Writes every URI, duplicates included, and returns how many were added.
    ///
    /// Before each batch, progress is reported at
    /// `start_percent + offset / len * (100 - start_percent)`, where `offset` is the
    /// number of URIs already written. The first failing batch ends the write;
    /// batches before it stay in the playlist.
    pub async fn write(
        &self,
        playlist_id: &str,
        uris: &[String],
        start_percent: f64,
        progress: &mut dyn ProgressSink,
    ) -> Result<usize, ConvertError> {
        let batches = self.batch_count(uris.len());
        let mut written = 0usize;

        for (index, batch) in uris.chunks(self.max_batch_size).enumerate() {
            let percent = start_percent + (written as f64 / uris.len() as f64) * (100.0 - start_percent);
            progress.progress(percent, "Adding tracks to playlist...");

            debug!(playlist = playlist_id, batch = index + 1, batches, size = batch.len(), "adding tracks");
            self.api
                .add_tracks(playlist_id, batch)
                .await
                .map_err(|source| ConvertError::BatchWrite {
                    batch: index + 1,
                    batches,
                    source,
                })?;

            written += batch.len();
        }

        Ok(written)
    }
}
