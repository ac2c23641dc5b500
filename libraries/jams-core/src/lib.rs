//! Aux Jams Core
//!
//! Platform-agnostic core types, traits, and error handling for the Aux
//! Jams persistence core.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Identity`, `Song`, `Playlist`, id newtypes
//! - **Storage Seam**: the synchronous [`KeyValueStore`] trait, the
//!   browser-local-storage analogue the stores persist into
//! - **Error Handling**: unified [`JamsError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use jams_core::types::{Identity, Playlist, Profile, Song};
//!
//! // Create a registered identity
//! let user = Identity::registered(Profile::new("alice", "hunter2"));
//!
//! // Build a playlist from pasted links
//! let songs = vec![Song::from_link("http://a"), Song::from_link("http://b")];
//! let playlist = Playlist::new("Road Trip", songs);
//! assert_eq!(playlist.song_count(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{JamsError, Result};
pub use storage::KeyValueStore;

pub use types::{
    Identity, Playlist, PlaylistId, Profile, Song, SongId, UserId, AUX_PLAYLIST_ID,
    AUX_PLAYLIST_NAME, GUEST_ID, GUEST_USERNAME,
};
