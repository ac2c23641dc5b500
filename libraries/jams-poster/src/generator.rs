//! Simulated poster generation
//!
//! Produces placeholder SVG previews from album metadata and a template
//! choice; no real rendering pipeline exists. The generated poster is
//! retained so a later export call can write its placeholder file.

use crate::error::{PosterError, Result};
use crate::types::{AlbumInfo, Poster, PosterFormat, PosterTemplate};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// Poster maker configuration
#[derive(Debug, Clone)]
pub struct PosterConfig {
    /// Directory poster exports are written into
    pub out_dir: PathBuf,
    /// Artificial generation delay
    pub delay: Duration,
}

impl PosterConfig {
    /// Default configuration for an output directory
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            delay: Duration::from_secs(3),
        }
    }

    /// Remove the artificial delay (for tests)
    pub fn without_delay(mut self) -> Self {
        self.delay = Duration::ZERO;
        self
    }
}

/// Outcome of a successful poster export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterReceipt {
    /// Name of the written file (`<sanitized>_poster.<ext>`)
    pub filename: String,
    /// Full path of the written file
    pub path: PathBuf,
    /// Format label that was requested
    pub format: PosterFormat,
}

/// Simulated poster generator with a busy-state guard and last-poster
/// retention
pub struct PosterMaker {
    config: PosterConfig,
    busy: AtomicBool,
    last: Mutex<Option<Poster>>,
}

impl PosterMaker {
    /// Create a poster maker writing exports into `out_dir`
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(PosterConfig::new(out_dir))
    }

    /// Create a poster maker from an explicit configuration
    pub fn with_config(config: PosterConfig) -> Self {
        Self {
            config,
            busy: AtomicBool::new(false),
            last: Mutex::new(None),
        }
    }

    /// Whether a generation is currently pending
    pub fn is_generating(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// The most recently generated poster, if any
    pub fn last_poster(&self) -> Option<Poster> {
        self.last.lock().unwrap().clone()
    }

    /// Generate a placeholder poster for the album with the chosen
    /// template
    pub async fn generate(&self, album: AlbumInfo, template: PosterTemplate) -> Result<Poster> {
        let _guard = self.claim()?;
        tokio::time::sleep(self.config.delay).await;

        let svg = render_svg(&album, template);
        let poster = Poster {
            id: Uuid::new_v4().to_string(),
            template,
            album_data: album,
            generated_at: Utc::now(),
            preview_url: format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)),
        };

        *self.last.lock().unwrap() = Some(poster.clone());
        tracing::info!(
            poster = %poster.id,
            template = template.as_str(),
            "generated poster"
        );
        Ok(poster)
    }

    /// Export the last generated poster as a placeholder file in the
    /// requested format
    pub fn export(&self, format: PosterFormat) -> Result<PosterReceipt> {
        let poster = self.last_poster().ok_or(PosterError::NoPoster)?;

        let content = format!(
            "Poster Export: {} - {}",
            poster.album_data.title,
            format.label()
        );
        let filename = format!(
            "{}_poster.{}",
            sanitize_filename(&poster.album_data.title),
            format.extension()
        );
        let path = self.config.out_dir.join(&filename);
        std::fs::write(&path, content)?;

        tracing::info!(filename = %filename, "exported poster placeholder");
        Ok(PosterReceipt {
            filename,
            path,
            format,
        })
    }

    fn claim(&self) -> Result<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| PosterError::Busy)?;
        Ok(BusyGuard(&self.busy))
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Placeholder preview: dark card, art rect, title/artist lines, template
/// caption in the template's primary color
fn render_svg(album: &AlbumInfo, template: PosterTemplate) -> String {
    let info = template.info();
    format!(
        r##"<svg width="300" height="400" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#1f2937"/>
  <rect x="20" y="20" width="260" height="200" fill="#374151" rx="10"/>
  <text x="150" y="250" text-anchor="middle" fill="white" font-family="Arial" font-size="16">{title}</text>
  <text x="150" y="270" text-anchor="middle" fill="#9ca3af" font-family="Arial" font-size="12">{artist}</text>
  <text x="150" y="350" text-anchor="middle" fill="{accent}" font-family="Arial" font-size="10">{name} Template</text>
</svg>"##,
        title = xml_escape(&album.title),
        artist = xml_escape(&album.artist),
        accent = info.colors[0],
        name = info.name,
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_maker(dir: &std::path::Path) -> PosterMaker {
        PosterMaker::with_config(PosterConfig::new(dir).without_delay())
    }

    #[tokio::test]
    async fn generate_produces_a_data_url_preview() {
        let dir = tempfile::tempdir().unwrap();
        let maker = test_maker(dir.path());

        let poster = maker
            .generate(
                AlbumInfo::new("Blue Train", "John Coltrane"),
                PosterTemplate::Vintage,
            )
            .await
            .expect("Failed to generate poster");

        assert_eq!(poster.template, PosterTemplate::Vintage);
        assert!(poster.preview_url.starts_with("data:image/svg+xml;base64,"));

        let encoded = poster
            .preview_url
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let svg = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(svg.contains("Blue Train"));
        assert!(svg.contains("John Coltrane"));
        assert!(svg.contains("Vintage Template"));
        assert!(svg.contains("#d97706"));
    }

    #[tokio::test]
    async fn generate_retains_the_last_poster() {
        let dir = tempfile::tempdir().unwrap();
        let maker = test_maker(dir.path());

        assert!(maker.last_poster().is_none());

        let poster = maker
            .generate(AlbumInfo::new("A", "B"), PosterTemplate::Pinterest)
            .await
            .unwrap();
        assert_eq!(maker.last_poster().unwrap().id, poster.id);
    }

    #[tokio::test]
    async fn export_without_a_poster_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let maker = test_maker(dir.path());

        let err = maker.export(PosterFormat::Png).unwrap_err();
        assert!(matches!(err, PosterError::NoPoster));
    }

    #[tokio::test]
    async fn export_writes_a_placeholder_in_the_requested_format() {
        let dir = tempfile::tempdir().unwrap();
        let maker = test_maker(dir.path());

        maker
            .generate(AlbumInfo::new("Blue Train", "John Coltrane"), PosterTemplate::Modern)
            .await
            .unwrap();

        let receipt = maker.export(PosterFormat::Pdf).unwrap();
        assert_eq!(receipt.filename, "Blue_Train_poster.pdf");

        let content = std::fs::read_to_string(&receipt.path).unwrap();
        assert_eq!(content, "Poster Export: Blue Train - PDF");
    }

    #[tokio::test]
    async fn overlapping_generations_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PosterConfig::new(dir.path()).without_delay();
        config.delay = Duration::from_millis(50);
        let maker = PosterMaker::with_config(config);

        let album = AlbumInfo::new("A", "B");
        let (first, second) = tokio::join!(
            maker.generate(album.clone(), PosterTemplate::Collage),
            maker.generate(album.clone(), PosterTemplate::Collage),
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(PosterError::Busy)));
        assert!(!maker.is_generating());
    }
}
