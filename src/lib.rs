//! Personal media link shelf: resolves pasted YouTube and Spotify links into
//! embeddable references and keeps an annotated, persisted list of them.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::entry::{EntryId, PlaylistEntry};
pub use domain::media::{MediaReference, Provider, SpotifyKind};
pub use domain::playlist::{EntryCounts, EntryFilter, PlaylistCollection};
pub use infrastructure::storage::{FileStorage, MemoryStorage, STORAGE_KEY, SnapshotStorage};
pub use services::error::{ExportError, ImportError, ResolveError, StorageError};
pub use services::link_resolver::resolve;
pub use services::playlist_store::PlaylistStore;
