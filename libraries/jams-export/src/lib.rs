//! Aux Jams Export
//!
//! Simulated export pipeline: given a playlist or track, build the
//! documented JSON descriptor and "download" it by writing it into a
//! configured output directory. A fixed artificial delay mimics the
//! latency of real transcoding; no real audio work happens.
//!
//! Operations are attempt-once with no retries, and a busy-state guard
//! rejects overlapping exports.

mod error;
mod exporter;
mod types;

pub use error::{ExportError, Result};
pub use exporter::{sanitize_filename, Exporter, ExporterConfig, PLATFORM};
pub use types::{
    ExportMetadata, ExportReceipt, PlaylistExport, PlaylistSummary, SongExport,
    SongExportMetadata, TrackExport, TrackExportMetadata, TrackSummary, EXPORT_FORMAT,
    EXPORT_QUALITY, EXPORT_VERSION,
};
