use std::path::PathBuf;

use chrono::Local;

use crate::{
    cli::{progress::BarProgress, report::print_summary},
    collection::{self, FieldAliases},
    common, config, error, info,
    management::ReportManager,
    matching::MatchMode,
    pipeline::{FixedDelay, PipelineRunner, PlaylistSettings},
    spotify::SpotifyClient,
    success, warning,
};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub file: PathBuf,
    pub mode: MatchMode,
    pub name: Option<String>,
    pub description: Option<String>,
    pub public: bool,
    pub token: Option<String>,
    pub dry_run: bool,
}

/// `My Discogs Collection (2024-05-01)`
pub fn default_playlist_name() -> String {
    format!(
        "{} ({})",
        common::DEFAULT_PLAYLIST_NAME,
        Local::now().format("%Y-%m-%d")
    )
}

pub async fn convert(opts: ConvertOptions) {
    let parsed = match collection::read_collection_file(&opts.file).await {
        Ok(parsed) => parsed,
        Err(e) => error!("{}", e),
    };

    let records = collection::normalize(&parsed.rows, &FieldAliases::from_env());
    if records.is_empty() {
        warning!("No records found in {}", opts.file.display());
        return;
    }
    info!(
        "Loaded {} records from {}",
        records.len(),
        opts.file.display()
    );

    let client = match SpotifyClient::from_env(opts.token) {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let settings = PlaylistSettings {
        name: opts
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(default_playlist_name),
        description: opts
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| common::DEFAULT_PLAYLIST_DESCRIPTION.to_string()),
        public: opts.public,
    };

    let mut runner = PipelineRunner::new(&client, &client, opts.mode)
        .with_pacer(FixedDelay::from_env())
        .with_batch_size(config::batch_size());
    let mut progress = BarProgress::new();

    if opts.dry_run {
        match runner.dry_run(&settings.name, &records, &mut progress).await {
            Ok(summary) => {
                progress.finish();
                print_summary(&summary);
            }
            Err(e) => {
                progress.abandon();
                error!("Dry run failed: {}", e)
            }
        }
        return;
    }

    let owner = match client.resolve_owner().await {
        Ok(owner) => owner,
        Err(e) => {
            progress.abandon();
            error!("Failed to connect to Spotify: {}", e)
        }
    };
    if let Some(display_name) = &owner.display_name {
        success!("Connected as {}", display_name);
    }

    match runner.run(&owner.id, &settings, &records, &mut progress).await {
        Ok(summary) => {
            progress.finish();
            print_summary(&summary);
            match ReportManager::new().persist(&summary).await {
                Ok(path) => info!("Summary saved to {}", path.display()),
                Err(e) => warning!("Could not save run summary: {}", e),
            }
        }
        Err(e) => {
            progress.abandon();
            error!("Conversion failed: {}", e)
        }
    }
}
