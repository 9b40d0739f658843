use std::path::{Path, PathBuf};

use futures::StreamExt;

use crate::{Res, config, pipeline::ConversionSummary};

/// Stores run summaries as JSON, one file per playlist.
pub struct ReportManager {
    dir: PathBuf,
}

impl Default for ReportManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportManager {
    /// Reports under the local data directory (`discofy/reports`).
    pub fn new() -> Self {
        Self {
            dir: config::data_dir().join("reports"),
        }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn persist(&self, summary: &ConversionSummary) -> Res<PathBuf> {
        let Some(playlist_id) = summary.playlist_id.as_deref() else {
            return Err("dry runs have no playlist and are not stored".into());
        };

        async_fs::create_dir_all(&self.dir).await?;
        let path = self.report_path(playlist_id);
        let json = serde_json::to_string_pretty(summary)?;
        async_fs::write(&path, json).await?;
        Ok(path)
    }

    pub async fn load(&self, playlist_id: &str) -> Res<ConversionSummary> {
        let content = async_fs::read_to_string(self.report_path(playlist_id)).await?;
        let summary: ConversionSummary = serde_json::from_str(&content)?;
        Ok(summary)
    }

    /// All readable reports, newest first. Unparseable files are skipped.
    pub async fn list(&self) -> Res<Vec<ConversionSummary>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        let mut entries = async_fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next().await {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Ok(content) = async_fs::read_to_string(&path).await else {
                continue;
            };
            if let Ok(summary) = serde_json::from_str::<ConversionSummary>(&content) {
                summaries.push(summary);
            }
        }

        summaries.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));
        Ok(summaries)
    }

    fn report_path(&self, playlist_id: &str) -> PathBuf {
        let file_name: String = playlist_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}
