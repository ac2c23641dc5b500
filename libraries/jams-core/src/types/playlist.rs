/// Playlist domain types
use crate::types::{PlaylistId, Song};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed id of the singleton aux playlist
pub const AUX_PLAYLIST_ID: &str = "aux-main";

/// Fixed name of the singleton aux playlist
pub const AUX_PLAYLIST_NAME: &str = "Pass the Aux";

/// An ordered, user-created collection of songs.
///
/// Insertion order is the user-visible order. A playlist is owned
/// exclusively by one identity's storage namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier (within its namespace)
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Songs in user-visible order
    pub songs: Vec<Song>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new playlist with a generated id
    pub fn new(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            songs,
            created_at: Utc::now(),
        }
    }

    /// Create the singleton aux playlist seeded with its first song
    pub fn aux(first_song: Song) -> Self {
        Self {
            id: PlaylistId::new(AUX_PLAYLIST_ID),
            name: AUX_PLAYLIST_NAME.to_string(),
            songs: vec![first_song],
            created_at: Utc::now(),
        }
    }

    /// Number of songs in the playlist
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }
}
