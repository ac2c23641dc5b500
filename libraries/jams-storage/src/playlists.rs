//! Playlist collection and aux queue persistence
//!
//! One namespace record per identity holds the whole playlist collection
//! plus the nullable aux queue. Every mutator validates, applies the
//! change in memory, and writes the record through before returning; there
//! is no write-behind buffering.

use crate::namespace::namespace_key;
use jams_core::types::{Identity, Playlist, PlaylistId, Song};
use jams_core::{JamsError, KeyValueStore, Result};
use serde::{Deserialize, Serialize};

/// Persisted shape of one identity's namespace record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamespaceRecord {
    #[serde(default)]
    playlists: Vec<Playlist>,
    #[serde(default)]
    aux_playlist: Option<Playlist>,
}

/// Per-identity playlist store over a shared key-value backend.
///
/// Constructed for one identity; [`switch_identity`](Self::switch_identity)
/// reloads from the new namespace before any further reads, so a store
/// never serves another identity's data.
pub struct PlaylistStore<S: KeyValueStore> {
    store: S,
    namespace: String,
    playlists: Vec<Playlist>,
    aux_playlist: Option<Playlist>,
}

impl<S: KeyValueStore> PlaylistStore<S> {
    /// Open the playlist store for an identity, loading its namespace
    /// record
    pub fn for_identity(store: S, identity: &Identity) -> Result<Self> {
        let namespace = namespace_key(identity);
        let record: NamespaceRecord = store.get_json(&namespace)?.unwrap_or_default();

        tracing::debug!(
            namespace = %namespace,
            playlists = record.playlists.len(),
            "loaded namespace record"
        );

        Ok(Self {
            store,
            namespace,
            playlists: record.playlists,
            aux_playlist: record.aux_playlist,
        })
    }

    /// Point the store at a different identity and reload its namespace.
    ///
    /// Discards the previous identity's in-memory state entirely.
    pub fn switch_identity(&mut self, identity: &Identity) -> Result<()> {
        let namespace = namespace_key(identity);
        let record: NamespaceRecord = self.store.get_json(&namespace)?.unwrap_or_default();

        tracing::debug!(namespace = %namespace, "switched playlist namespace");
        self.namespace = namespace;
        self.playlists = record.playlists;
        self.aux_playlist = record.aux_playlist;
        Ok(())
    }

    /// Playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// The aux queue; `None` means no collaborative session is in progress
    pub fn aux_playlist(&self) -> Option<&Playlist> {
        self.aux_playlist.as_ref()
    }

    /// Create a playlist from a name and a batch of pasted links.
    ///
    /// Blank links are dropped; a blank name or an all-blank link batch is
    /// rejected before anything is mutated or persisted.
    pub fn create_playlist(&mut self, name: &str, links: &[impl AsRef<str>]) -> Result<Playlist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JamsError::invalid_input("playlist name must not be empty"));
        }

        let songs: Vec<Song> = links
            .iter()
            .map(|link| link.as_ref().trim())
            .filter(|link| !link.is_empty())
            .map(Song::from_link)
            .collect();
        if songs.is_empty() {
            return Err(JamsError::invalid_input(
                "playlist needs at least one non-empty link",
            ));
        }

        let playlist = Playlist::new(name, songs);
        self.playlists.push(playlist.clone());
        self.persist()?;

        tracing::info!(
            playlist = %playlist.id,
            songs = playlist.song_count(),
            "created playlist"
        );
        Ok(playlist)
    }

    /// Remove the playlist with the given id; absent ids are a no-op
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != id);
        if self.playlists.len() == before {
            return Ok(());
        }

        self.persist()?;
        tracing::info!(playlist = %id, "deleted playlist");
        Ok(())
    }

    /// Append a song to the aux queue, creating the singleton on first use
    pub fn add_to_aux(&mut self, link: &str) -> Result<Song> {
        let link = link.trim();
        if link.is_empty() {
            return Err(JamsError::invalid_input("link must not be empty"));
        }

        let song = Song::from_link_stamped(link);
        match self.aux_playlist.as_mut() {
            Some(aux) => aux.songs.push(song.clone()),
            None => self.aux_playlist = Some(Playlist::aux(song.clone())),
        }
        self.persist()?;

        tracing::debug!(song = %song.id, "added song to aux queue");
        Ok(song)
    }

    /// Discard the aux queue entirely; the playlist collection is untouched
    pub fn clear_aux(&mut self) -> Result<()> {
        self.aux_playlist = None;
        self.persist()?;

        tracing::info!("cleared aux queue");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let record = NamespaceRecord {
            playlists: self.playlists.clone(),
            aux_playlist: self.aux_playlist.clone(),
        };
        self.store.set_json(&self.namespace, &record)
    }
}
