use std::path::PathBuf;

use chrono::{Duration, Utc};
use discofy::catalog::SearchCandidate;
use discofy::collection::CollectionRecord;
use discofy::management::ReportManager;
use discofy::matching::{MatchMode, MatchOutcome, UnmatchedReason};
use discofy::pipeline::ConversionSummary;

// Fresh directory per test so parallel tests don't see each other's reports
fn report_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("discofy-reports-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn summary(playlist_id: Option<&str>, name: &str) -> ConversionSummary {
    let found = CollectionRecord::new("Boards of Canada", "Geogaddi");
    let lost = CollectionRecord::new("Unknown Artist", "White Label");
    let outcomes = vec![
        MatchOutcome::matched(
            &found,
            SearchCandidate {
                provider_id: "geo".to_string(),
                uri: "spotify:album:geo".to_string(),
                artist_names: vec!["Boards of Canada".to_string()],
                display_title: "Geogaddi".to_string(),
            },
            vec!["spotify:track:g1".to_string(), "spotify:track:g2".to_string()],
        ),
        MatchOutcome::unmatched(&lost, UnmatchedReason::NoArtistMatch),
    ];

    ConversionSummary::from_outcomes(playlist_id.map(str::to_string), name, MatchMode::Album, &outcomes, 2)
}

#[tokio::test]
async fn test_persist_and_load() {
    let manager = ReportManager::at(report_dir("roundtrip"));
    let original = summary(Some("pl-1"), "Vinyl");

    let path = manager.persist(&original).await.unwrap();
    assert!(path.is_file());
    assert_eq!(path.file_name().unwrap(), "pl-1.json");

    let loaded = manager.load("pl-1").await.unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loaded.matched_albums(), vec!["Boards of Canada - Geogaddi"]);
}

#[tokio::test]
async fn test_dry_run_summary_is_not_persisted() {
    let dir = report_dir("dry");
    let manager = ReportManager::at(&dir);

    assert!(manager.persist(&summary(None, "Dry")).await.is_err());
    assert!(!dir.exists());
}

#[tokio::test]
async fn test_list_newest_first() {
    let manager = ReportManager::at(report_dir("list"));

    let mut older = summary(Some("old"), "Older");
    older.finished_at = Utc::now() - Duration::days(1);
    let newer = summary(Some("new"), "Newer");

    manager.persist(&older).await.unwrap();
    manager.persist(&newer).await.unwrap();
    // Stray files are ignored
    std::fs::write(manager.dir().join("notes.txt"), "hello").unwrap();
    std::fs::write(manager.dir().join("broken.json"), "{").unwrap();

    let names: Vec<String> = manager
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.playlist_name)
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn test_list_without_directory_is_empty() {
    let manager = ReportManager::at(report_dir("missing"));
    assert!(manager.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_unknown_playlist_fails() {
    let manager = ReportManager::at(report_dir("unknown"));
    assert!(manager.load("nope").await.is_err());
}

#[tokio::test]
async fn test_playlist_id_is_sanitized_for_file_names() {
    let manager = ReportManager::at(report_dir("sanitize"));

    let path = manager.persist(&summary(Some("../escape"), "Odd")).await.unwrap();

    assert_eq!(path.parent(), Some(manager.dir()));
    assert_eq!(path.file_name().unwrap(), "___escape.json");
    assert_eq!(manager.load("../escape").await.unwrap().playlist_name, "Odd");
}
