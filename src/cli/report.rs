use tabled::Table;

use crate::{
    info,
    management::ReportManager,
    matching::MatchMode,
    pipeline::ConversionSummary,
    success,
    types::{MatchedTableRow, ReportTableRow, UnmatchedTableRow},
    warning,
};

/// Lists stored runs, or replays one of them.
pub async fn report(playlist_id: Option<String>) {
    let manager = ReportManager::new();

    match playlist_id {
        Some(id) => match manager.load(&id).await {
            Ok(summary) => print_summary(&summary),
            Err(e) => warning!("No stored report for playlist {}. Err: {}", id, e),
        },
        None => match manager.list().await {
            Ok(summaries) if summaries.is_empty() => {
                info!("No conversions stored in {}", manager.dir().display())
            }
            Ok(summaries) => {
                let rows: Vec<ReportTableRow> = summaries
                    .into_iter()
                    .map(|s| ReportTableRow {
                        finished: s.finished_at.format("%Y-%m-%d %H:%M").to_string(),
                        matched: s.matched_count(),
                        unmatched: s.unmatched_count(),
                        added: s.added_count,
                        mode: s.mode.to_string(),
                        name: s.playlist_name,
                        playlist: s.playlist_id.unwrap_or_default(),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
            Err(e) => warning!("Failed to read stored reports. Err: {}", e),
        },
    }
}

/// Prints the outcome of a run: counts, matched records and what was not found.
pub fn print_summary(summary: &ConversionSummary) {
    info!(
        "Conversion results for \"{name}\" ({mode} mode)",
        name = summary.playlist_name,
        mode = summary.mode
    );

    if !summary.matched.is_empty() {
        let rows: Vec<MatchedTableRow> = summary
            .matched
            .iter()
            .map(|m| MatchedTableRow {
                record: m.label(),
                matched: m.candidate.label(),
                tracks: m.track_count,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if !summary.unmatched.is_empty() {
        let rows: Vec<UnmatchedTableRow> = summary
            .unmatched
            .iter()
            .map(|u| UnmatchedTableRow {
                record: u.label(),
                reason: u.reason.to_string(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    let found = match summary.mode {
        MatchMode::Track => "Tracks found",
        MatchMode::Album => "Albums found",
    };
    info!("{}: {}", found, summary.matched_count());
    info!("Not found: {}", summary.unmatched_count());
    info!("Total processed: {}", summary.total_count);

    if summary.playlist_id.is_some() && summary.added_count > 0 {
        success!(
            "Successfully created playlist with {} tracks!",
            summary.added_count
        );
    }
}
