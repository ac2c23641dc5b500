/// Identity domain types
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed sentinel id used by the guest identity
pub const GUEST_ID: &str = "guest";

/// Display name used by the guest identity
pub const GUEST_USERNAME: &str = "Guest";

/// The active user context determining the storage namespace.
///
/// Exactly one identity is active at a time (or none, when the session is
/// anonymous). Registered identities carry a generated id; the guest
/// identity uses the fixed [`GUEST_ID`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub username: String,

    /// Stored credential; the design has no real verification step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Whether this is the guest sentinel identity
    #[serde(default)]
    pub is_guest: bool,

    /// Account creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Create a registered (non-guest) identity with a freshly generated id
    pub fn registered(profile: Profile) -> Self {
        Self {
            id: UserId::generate(),
            username: profile.username,
            password: Some(profile.password),
            avatar: profile.avatar,
            is_guest: false,
            created_at: Some(Utc::now()),
        }
    }

    /// The fixed guest identity
    pub fn guest() -> Self {
        Self {
            id: UserId::new(GUEST_ID),
            username: GUEST_USERNAME.to_string(),
            password: None,
            avatar: None,
            is_guest: true,
            created_at: None,
        }
    }
}

/// Profile data supplied on signup or guest conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Requested display name
    pub username: String,

    /// Requested password
    pub password: String,

    /// Optional avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Profile {
    /// Create a profile without an avatar
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_identity_uses_sentinel_id() {
        let guest = Identity::guest();
        assert_eq!(guest.id.as_str(), GUEST_ID);
        assert!(guest.is_guest);
        assert!(guest.created_at.is_none());
    }

    #[test]
    fn registered_identity_generates_fresh_id() {
        let a = Identity::registered(Profile::new("alice", "hunter2"));
        let b = Identity::registered(Profile::new("alice", "hunter2"));
        assert_ne!(a.id, b.id);
        assert!(!a.is_guest);
        assert!(a.created_at.is_some());
    }
}
