mod identity;
mod ids;
mod playlist;
mod song;

pub use identity::{Identity, Profile, GUEST_ID, GUEST_USERNAME};
pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{Playlist, AUX_PLAYLIST_ID, AUX_PLAYLIST_NAME};
pub use song::Song;
