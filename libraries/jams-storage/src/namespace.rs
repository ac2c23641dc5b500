//! Storage key derivation
//!
//! Every persisted record lives under a key derived here. Playlist data is
//! namespaced per identity so switching identity atomically switches the
//! whole visible collection on reload.

use jams_core::types::Identity;

/// Key holding the persisted identity record
pub const IDENTITY_KEY: &str = "aux-jams.user";

/// Key holding the persisted guest flag ("true"/"false")
pub const GUEST_FLAG_KEY: &str = "aux-jams.guest";

const NAMESPACE_PREFIX: &str = "aux-jams.playlists";

/// Derive the namespace key holding an identity's playlist record.
///
/// Guests share one fixed namespace; registered users get one keyed by
/// their id.
pub fn namespace_key(identity: &Identity) -> String {
    if identity.is_guest {
        format!("{NAMESPACE_PREFIX}.guest")
    } else {
        format!("{NAMESPACE_PREFIX}.{}", identity.id)
    }
}
