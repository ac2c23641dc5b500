/// Song domain type
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song created from a pasted link.
///
/// Title and artist are derived placeholders; no real metadata resolution
/// happens in this core. Songs are immutable once created, except through
/// deletion of their parent playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier (within its playlist)
    pub id: SongId,

    /// The pasted source link
    pub link: String,

    /// Placeholder title derived from the link
    pub title: String,

    /// Placeholder artist
    pub artist: String,

    /// When the song was added (only stamped for aux additions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Song {
    /// Build a song from a pasted link with placeholder metadata
    pub fn from_link(link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            id: SongId::generate(),
            title: format!("Song from {link}"),
            artist: "Unknown".to_string(),
            link,
            added_at: None,
        }
    }

    /// Build a song from a link and stamp its addition time
    pub fn from_link_stamped(link: impl Into<String>) -> Self {
        let mut song = Self::from_link(link);
        song.added_at = Some(Utc::now());
        song
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_derives_placeholder_metadata() {
        let song = Song::from_link("http://example.com/track/1");
        assert_eq!(song.title, "Song from http://example.com/track/1");
        assert_eq!(song.artist, "Unknown");
        assert!(song.added_at.is_none());
    }

    #[test]
    fn stamped_song_records_addition_time() {
        let song = Song::from_link_stamped("http://a");
        assert!(song.added_at.is_some());
    }
}
