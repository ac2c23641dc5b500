//! Integration tests for the export simulator
//!
//! Tests the export pipeline including:
//! - Document shape of playlist and track exports
//! - Filename sanitization
//! - Busy-state guard for overlapping exports

use jams_core::types::{Playlist, Song};
use jams_export::{Exporter, ExporterConfig, ExportError, PlaylistExport, TrackExport};
use std::time::Duration;

fn test_playlist() -> Playlist {
    Playlist::new(
        "Road Trip",
        vec![Song::from_link("http://a"), Song::from_link("http://b")],
    )
}

#[tokio::test]
async fn playlist_export_writes_the_documented_json() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Exporter::with_config(ExporterConfig::new(dir.path()).without_delay());

    let playlist = test_playlist();
    let receipt = exporter
        .export_playlist(&playlist, Some("alice"))
        .await
        .expect("Failed to export playlist");

    assert_eq!(receipt.filename, "Road_Trip_export.json");
    assert!(receipt.path.exists());

    let raw = std::fs::read_to_string(&receipt.path).unwrap();
    let document: PlaylistExport = serde_json::from_str(&raw).unwrap();

    assert_eq!(document.playlist.name, "Road Trip");
    assert_eq!(document.playlist.song_count, 2);
    assert_eq!(document.songs.len(), 2);
    assert_eq!(document.songs[0].link, "http://a");
    assert!(document.songs[0].metadata.exported);
    assert_eq!(document.songs[0].metadata.format, "simulated");
    assert_eq!(document.metadata.version, "1.0");
    assert_eq!(document.metadata.exported_by, "alice");
    assert_eq!(document.metadata.platform, "Aux Jams");

    // Field names are part of the external contract
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value["playlist"]["songCount"].is_number());
    assert!(value["metadata"]["exportedBy"].is_string());
}

#[tokio::test]
async fn anonymous_export_is_attributed_to_guest() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Exporter::with_config(ExporterConfig::new(dir.path()).without_delay());

    let receipt = exporter
        .export_playlist(&test_playlist(), None)
        .await
        .unwrap();

    let raw = std::fs::read_to_string(&receipt.path).unwrap();
    let document: PlaylistExport = serde_json::from_str(&raw).unwrap();
    assert_eq!(document.metadata.exported_by, "guest");
}

#[tokio::test]
async fn track_export_writes_the_documented_json() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Exporter::with_config(ExporterConfig::new(dir.path()).without_delay());

    let song = Song::from_link("http://a");
    let receipt = exporter.export_track(&song).await.unwrap();

    assert_eq!(receipt.filename, "Song_from_http___a_export.json");

    let raw = std::fs::read_to_string(&receipt.path).unwrap();
    let document: TrackExport = serde_json::from_str(&raw).unwrap();

    assert_eq!(document.track.title, "Song from http://a");
    assert_eq!(document.track.artist, "Unknown");
    assert_eq!(document.metadata.quality, "high");
    assert!(document.metadata.includes_lyrics);
    assert!(document.metadata.includes_artwork);
}

#[tokio::test]
async fn overlapping_exports_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ExporterConfig::new(dir.path()).without_delay();
    config.playlist_delay = Duration::from_millis(50);
    let exporter = Exporter::with_config(config);

    let playlist = test_playlist();
    let (first, second) = tokio::join!(
        exporter.export_playlist(&playlist, None),
        exporter.export_playlist(&playlist, None),
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(ExportError::Busy)));

    // The guard is released once the pending export finishes
    assert!(!exporter.is_exporting());
    exporter.export_playlist(&playlist, None).await.unwrap();
}

#[tokio::test]
async fn missing_output_directory_surfaces_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let exporter = Exporter::with_config(ExporterConfig::new(missing).without_delay());

    let err = exporter
        .export_playlist(&test_playlist(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));

    // An error must release the busy guard
    assert!(!exporter.is_exporting());
}
