//! Session lifecycle and identity persistence
//!
//! The session store owns the active identity (registered, guest, or none)
//! and the persisted guest flag. It is the single writer of the identity
//! record; playlist namespaces are derived from whatever identity is
//! active here.

use crate::namespace::{namespace_key, GUEST_FLAG_KEY, IDENTITY_KEY};
use jams_core::types::{Identity, Profile};
use jams_core::{JamsError, KeyValueStore, Result};

/// Minimum accepted password length for signup and guest conversion
const MIN_PASSWORD_LEN: usize = 4;

/// Session state over a shared key-value backend.
///
/// All lifecycle transitions persist before returning; storage failures
/// propagate to the caller instead of being swallowed.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    identity: Option<Identity>,
    is_guest: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an anonymous session without touching the backend
    pub fn new(store: S) -> Self {
        Self {
            store,
            identity: None,
            is_guest: false,
        }
    }

    /// Restore session state from the backend.
    ///
    /// A persisted guest flag takes precedence over a persisted identity
    /// record: it reinstalls the guest sentinel even when a stale identity
    /// record is present.
    pub fn load(store: S) -> Result<Self> {
        let saved: Option<Identity> = store.get_json(IDENTITY_KEY)?;
        let guest_flag = matches!(store.get(GUEST_FLAG_KEY)?.as_deref(), Some("true"));

        let (identity, is_guest) = if guest_flag {
            (Some(Identity::guest()), true)
        } else {
            (saved, false)
        };

        Ok(Self {
            store,
            identity,
            is_guest,
        })
    }

    /// The active identity, if any
    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether the active identity is the guest sentinel
    pub fn is_guest(&self) -> bool {
        self.is_guest
    }

    /// Storage namespace key for the active identity, if any
    pub fn namespace(&self) -> Option<String> {
        self.identity.as_ref().map(namespace_key)
    }

    /// Replace the active identity with the supplied record verbatim.
    ///
    /// No credential verification happens here; this design has no server
    /// to verify against.
    pub fn login(&mut self, identity: Identity) -> Result<()> {
        self.store.set_json(IDENTITY_KEY, &identity)?;
        self.store.set(GUEST_FLAG_KEY, "false")?;

        tracing::info!(user = %identity.id, "logged in");
        self.identity = Some(identity);
        self.is_guest = false;
        Ok(())
    }

    /// Create and install a new registered identity from the profile
    pub fn signup(&mut self, profile: Profile) -> Result<Identity> {
        validate_profile(&profile)?;

        let identity = Identity::registered(profile);
        self.store.set_json(IDENTITY_KEY, &identity)?;
        self.store.set(GUEST_FLAG_KEY, "false")?;

        tracing::info!(user = %identity.id, username = %identity.username, "signed up");
        self.identity = Some(identity.clone());
        self.is_guest = false;
        Ok(identity)
    }

    /// Install the fixed guest identity and persist the guest flag
    pub fn enter_guest_mode(&mut self) -> Result<Identity> {
        let guest = Identity::guest();
        self.store.set_json(IDENTITY_KEY, &guest)?;
        self.store.set(GUEST_FLAG_KEY, "true")?;

        tracing::info!("entered guest mode");
        self.identity = Some(guest.clone());
        self.is_guest = true;
        Ok(guest)
    }

    /// Clear the session and remove the persisted identity records.
    ///
    /// Playlist namespaces are left intact for later re-entry.
    pub fn logout(&mut self) -> Result<()> {
        self.store.remove(IDENTITY_KEY)?;
        self.store.remove(GUEST_FLAG_KEY)?;

        tracing::info!("logged out");
        self.identity = None;
        self.is_guest = false;
        Ok(())
    }

    /// Convert the active guest session into a registered account.
    ///
    /// The guest's playlist namespace is migrated (copied, then removed)
    /// to the new identity's namespace so converted accounts keep their
    /// playlists and aux queue. The new id is freshly generated, so the
    /// target namespace is empty in practice; an existing record there is
    /// overwritten.
    pub fn convert_guest_to_account(&mut self, profile: Profile) -> Result<Identity> {
        let Some(guest) = self.identity.as_ref().filter(|i| i.is_guest).cloned() else {
            return Err(JamsError::invalid_input("no guest session to convert"));
        };
        validate_profile(&profile)?;

        let identity = Identity::registered(profile);

        let guest_ns = namespace_key(&guest);
        let account_ns = namespace_key(&identity);
        if let Some(record) = self.store.get(&guest_ns)? {
            if self.store.get(&account_ns)?.is_some() {
                tracing::warn!(namespace = %account_ns, "overwriting existing namespace record during guest conversion");
            }
            self.store.set(&account_ns, &record)?;
            self.store.remove(&guest_ns)?;
            tracing::info!(from = %guest_ns, to = %account_ns, "migrated guest playlist data");
        }

        self.store.set_json(IDENTITY_KEY, &identity)?;
        self.store.set(GUEST_FLAG_KEY, "false")?;

        tracing::info!(user = %identity.id, "converted guest to account");
        self.identity = Some(identity.clone());
        self.is_guest = false;
        Ok(identity)
    }
}

/// Reject unusable profiles before anything is written
fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.username.trim().is_empty() {
        return Err(JamsError::invalid_input("username must not be empty"));
    }
    if profile.password.len() < MIN_PASSWORD_LEN {
        return Err(JamsError::invalid_input(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_rejected() {
        let err = validate_profile(&Profile::new("alice", "abc")).unwrap_err();
        assert!(matches!(err, JamsError::InvalidInput(_)));
    }

    #[test]
    fn blank_username_is_rejected() {
        let err = validate_profile(&Profile::new("   ", "hunter2")).unwrap_err();
        assert!(matches!(err, JamsError::InvalidInput(_)));
    }
}
