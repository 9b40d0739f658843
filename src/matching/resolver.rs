use tracing::{debug, warn};

use crate::{
    catalog::{CatalogSearch, SearchCandidate, SearchKind},
    collection::CollectionRecord,
    error::SearchFailure,
    matching::{MatchMode, MatchOutcome, UnmatchedReason, heuristics},
};

/// Resolves one record at a time against the catalog.
///
/// Search failures are logged and handled like an empty result. The only error
/// returned is a failed album track lookup, which the caller turns into an
/// unmatched outcome.
pub struct MatchResolver<'a> {
    catalog: &'a dyn CatalogSearch,
    mode: MatchMode,
}

impl<'a> MatchResolver<'a> {
    pub fn new(catalog: &'a dyn CatalogSearch, mode: MatchMode) -> Self {
        Self { catalog, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub async fn resolve(&self, record: &CollectionRecord) -> Result<MatchOutcome, SearchFailure> {
        if !record.is_searchable() {
            debug!(record = %record.label(), "missing artist or title, not searching");
            return Ok(MatchOutcome::unmatched(record, UnmatchedReason::MissingFields));
        }

        match self.mode {
            MatchMode::Track => Ok(self.resolve_track(record).await),
            MatchMode::Album => self.resolve_album(record).await,
        }
    }

    async fn resolve_track(&self, record: &CollectionRecord) -> MatchOutcome {
        let candidates = match self
            .catalog
            .search_exact(SearchKind::Track, record.title(), record.artist())
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(record = %record.label(), error = %e, "track search failed");
                return MatchOutcome::unmatched(record, UnmatchedReason::SearchFailed(e.to_string()));
            }
        };

        match candidates.into_iter().next() {
            Some(candidate) => {
                let track_uris = vec![candidate.uri.clone()];
                MatchOutcome::matched(record, candidate, track_uris)
            }
            None => MatchOutcome::unmatched(record, UnmatchedReason::NoCandidates),
        }
    }

    async fn resolve_album(&self, record: &CollectionRecord) -> Result<MatchOutcome, SearchFailure> {
        let candidate = match self.select_album(record).await {
            Ok(candidate) => candidate,
            Err(reason) => return Ok(MatchOutcome::unmatched(record, reason)),
        };

        let track_uris = self.catalog.lookup_tracks(&candidate.provider_id).await?;
        debug!(
            record = %record.label(),
            album = %candidate.label(),
            tracks = track_uris.len(),
            "album matched"
        );
        Ok(MatchOutcome::matched(record, candidate, track_uris))
    }

    /// Exact album search first, then the free-text fallback guarded by artist name.
    async fn select_album(&self, record: &CollectionRecord) -> Result<SearchCandidate, UnmatchedReason> {
        let mut failure = None;

        match self
            .catalog
            .search_exact(SearchKind::Album, record.title(), record.artist())
            .await
        {
            Ok(candidates) => {
                if let Some(first) = candidates.into_iter().next() {
                    return Ok(first);
                }
            }
            Err(e) => {
                warn!(record = %record.label(), error = %e, "exact album search failed");
                failure = Some(e.to_string());
            }
        }

        let cleaned = heuristics::clean_title(record.title());
        if cleaned.is_empty() {
            return Err(failure
                .map(UnmatchedReason::SearchFailed)
                .unwrap_or(UnmatchedReason::NoCandidates));
        }

        debug!(record = %record.label(), query = %cleaned, "falling back to broad search");
        let candidates = match self
            .catalog
            .search_broad(SearchKind::Album, &cleaned, record.artist())
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(record = %record.label(), error = %e, "broad album search failed");
                return Err(UnmatchedReason::SearchFailed(e.to_string()));
            }
        };

        if candidates.is_empty() {
            return Err(failure
                .map(UnmatchedReason::SearchFailed)
                .unwrap_or(UnmatchedReason::NoCandidates));
        }

        heuristics::select_by_artist(candidates, record.artist()).ok_or(UnmatchedReason::NoArtistMatch)
    }
}
