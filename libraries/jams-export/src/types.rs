//! Export document shapes
//!
//! These structs define the JSON documents the simulator writes. Field
//! names are part of the external contract, so everything serializes in
//! `camelCase`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Document version stamped into every export
pub const EXPORT_VERSION: &str = "1.0";

/// Simulated format label
pub const EXPORT_FORMAT: &str = "simulated";

/// Simulated quality label
pub const EXPORT_QUALITY: &str = "high";

/// Full playlist export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistExport {
    pub playlist: PlaylistSummary,
    pub songs: Vec<SongExport>,
    pub metadata: ExportMetadata,
}

/// Playlist header of an export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub name: String,
    pub song_count: usize,
    pub created_at: DateTime<Utc>,
    pub exported_at: DateTime<Utc>,
}

/// One song entry in a playlist export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongExport {
    pub title: String,
    pub artist: String,
    pub link: String,
    pub metadata: SongExportMetadata,
}

/// Per-song simulated transcoding metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongExportMetadata {
    pub exported: bool,
    pub format: String,
    pub quality: String,
}

impl Default for SongExportMetadata {
    fn default() -> Self {
        Self {
            exported: true,
            format: EXPORT_FORMAT.to_string(),
            quality: EXPORT_QUALITY.to_string(),
        }
    }
}

/// Document-level metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub version: String,
    pub exported_by: String,
    pub platform: String,
}

/// Single-track export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackExport {
    pub track: TrackSummary,
    pub metadata: TrackExportMetadata,
}

/// Track header of a single-track export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub title: String,
    pub artist: String,
    pub exported_at: DateTime<Utc>,
}

/// Single-track simulated metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackExportMetadata {
    pub format: String,
    pub quality: String,
    pub includes_lyrics: bool,
    pub includes_artwork: bool,
}

impl Default for TrackExportMetadata {
    fn default() -> Self {
        Self {
            format: EXPORT_FORMAT.to_string(),
            quality: EXPORT_QUALITY.to_string(),
            includes_lyrics: true,
            includes_artwork: true,
        }
    }
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Name of the written file (`<sanitized>_export.json`)
    pub filename: String,
    /// Full path of the written file
    pub path: PathBuf,
}
