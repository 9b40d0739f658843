use std::path::Path;

use tabled::builder::Builder;

use crate::{
    collection::{self, FieldAliases},
    error, info, warning,
};

/// Shows the first `rows` records with the columns relevant for matching.
pub async fn preview(file: &Path, rows: usize) {
    let parsed = match collection::read_collection_file(file).await {
        Ok(parsed) => parsed,
        Err(e) => error!("{}", e),
    };

    if parsed.rows.is_empty() {
        warning!("No data found in {}", file.display());
        return;
    }

    let mut headers = collection::preview_headers(&parsed.headers);
    if headers.is_empty() {
        headers = parsed.headers.clone();
    }

    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in parsed.rows.iter().take(rows) {
        builder.push_record(
            headers
                .iter()
                .map(|header| row.get(header).cloned().unwrap_or_default()),
        );
    }

    info!(
        "Collection preview (showing first {} records)",
        rows.min(parsed.rows.len())
    );
    println!("{}", builder.build());

    let records = collection::normalize(&parsed.rows, &FieldAliases::from_env());
    let incomplete = records.iter().filter(|r| !r.is_searchable()).count();
    info!("Total records: {}", records.len());
    if incomplete > 0 {
        warning!(
            "{} records have no artist or title and will not be searched",
            incomplete
        );
    }
}
