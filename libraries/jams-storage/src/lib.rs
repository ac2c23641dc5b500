//! Aux Jams Storage
//!
//! Per-identity persistence layer for the Aux Jams playlist core.
//!
//! This crate provides the session and playlist stores over a synchronous
//! key-value backend (the browser-local-storage analogue), plus the two
//! backend implementations and the namespace key derivation.
//!
//! # Architecture
//!
//! - **Write-Through**: every mutator persists before returning
//! - **Namespaced**: each identity's playlists live under one derived key;
//!   switching identity swaps the whole visible collection on reload
//! - **Single-Writer**: no cross-handle coordination; two stores writing
//!   the same backend concurrently is out of scope
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jams_core::types::Profile;
//! use jams_storage::{MemoryStore, PlaylistStore, SessionStore};
//!
//! # fn example() -> jams_core::Result<()> {
//! let backend = Arc::new(MemoryStore::new());
//!
//! let mut session = SessionStore::new(backend.clone());
//! let user = session.signup(Profile::new("alice", "hunter2"))?;
//!
//! let mut playlists = PlaylistStore::for_identity(backend, &user)?;
//! playlists.create_playlist("Road Trip", &["http://a", "http://b"])?;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod kv;
pub mod namespace;
pub mod playlists;
pub mod session;

pub use error::StorageError;
pub use kv::{FileStore, MemoryStore};
pub use namespace::{namespace_key, GUEST_FLAG_KEY, IDENTITY_KEY};
pub use playlists::PlaylistStore;
pub use session::SessionStore;
