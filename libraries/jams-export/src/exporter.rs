//! Simulated export pipeline
//!
//! No real transcoding happens here: the exporter sleeps a configured
//! artificial delay, builds the documented JSON descriptor, and writes it
//! into the download directory. One export at a time; a second call while
//! one is pending fails fast instead of queueing.

use crate::error::{ExportError, Result};
use crate::types::{
    ExportMetadata, ExportReceipt, PlaylistExport, PlaylistSummary, SongExport,
    SongExportMetadata, TrackExport, TrackExportMetadata, TrackSummary, EXPORT_VERSION,
};
use chrono::Utc;
use jams_core::types::{Playlist, Song};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Platform label stamped into export documents
pub const PLATFORM: &str = "Aux Jams";

/// Exporter configuration
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Directory the export files are written into
    pub out_dir: PathBuf,
    /// Artificial delay for playlist exports
    pub playlist_delay: Duration,
    /// Artificial delay for single-track exports
    pub track_delay: Duration,
}

impl ExporterConfig {
    /// Default configuration for an output directory
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            playlist_delay: Duration::from_secs(2),
            track_delay: Duration::from_secs(1),
        }
    }

    /// Remove the artificial delays (for tests)
    pub fn without_delay(mut self) -> Self {
        self.playlist_delay = Duration::ZERO;
        self.track_delay = Duration::ZERO;
        self
    }
}

/// Simulated playlist/track exporter with a busy-state guard
pub struct Exporter {
    config: ExporterConfig,
    busy: AtomicBool,
}

impl Exporter {
    /// Create an exporter writing into `out_dir` with the default delays
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(ExporterConfig::new(out_dir))
    }

    /// Create an exporter from an explicit configuration
    pub fn with_config(config: ExporterConfig) -> Self {
        Self {
            config,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an export is currently pending
    pub fn is_exporting(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Export a playlist as a downloadable JSON document.
    ///
    /// `exported_by` defaults to `"guest"` when no username is available.
    pub async fn export_playlist(
        &self,
        playlist: &Playlist,
        exported_by: Option<&str>,
    ) -> Result<ExportReceipt> {
        let _guard = self.claim()?;
        tokio::time::sleep(self.config.playlist_delay).await;

        let document = PlaylistExport {
            playlist: PlaylistSummary {
                name: playlist.name.clone(),
                song_count: playlist.song_count(),
                created_at: playlist.created_at,
                exported_at: Utc::now(),
            },
            songs: playlist
                .songs
                .iter()
                .map(|song| SongExport {
                    title: song.title.clone(),
                    artist: song.artist.clone(),
                    link: song.link.clone(),
                    metadata: SongExportMetadata::default(),
                })
                .collect(),
            metadata: ExportMetadata {
                version: EXPORT_VERSION.to_string(),
                exported_by: exported_by.unwrap_or("guest").to_string(),
                platform: PLATFORM.to_string(),
            },
        };

        let receipt = self.write_document(&playlist.name, &document)?;
        tracing::info!(
            playlist = %playlist.id,
            filename = %receipt.filename,
            "exported playlist"
        );
        Ok(receipt)
    }

    /// Export a single track as a downloadable JSON document
    pub async fn export_track(&self, song: &Song) -> Result<ExportReceipt> {
        let _guard = self.claim()?;
        tokio::time::sleep(self.config.track_delay).await;

        let document = TrackExport {
            track: TrackSummary {
                title: song.title.clone(),
                artist: song.artist.clone(),
                exported_at: Utc::now(),
            },
            metadata: TrackExportMetadata::default(),
        };

        let receipt = self.write_document(&song.title, &document)?;
        tracing::info!(song = %song.id, filename = %receipt.filename, "exported track");
        Ok(receipt)
    }

    /// Claim the busy flag for one export; released when the guard drops
    fn claim(&self) -> Result<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ExportError::Busy)?;
        Ok(BusyGuard(&self.busy))
    }

    fn write_document<T: serde::Serialize>(&self, name: &str, document: &T) -> Result<ExportReceipt> {
        let raw = serde_json::to_vec_pretty(document)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        let filename = format!("{}_export.json", sanitize_filename(name));
        let path = self.config.out_dir.join(&filename);
        std::fs::write(&path, raw)?;

        Ok(ExportReceipt { filename, path })
    }
}

/// Released on drop, including on error paths
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Strip a display name down to a safe filename stem: every character
/// outside ASCII alphanumerics becomes an underscore
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
