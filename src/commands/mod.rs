pub mod add;
pub mod edit;
pub mod list;
pub mod resolve;
pub mod transfer;

use linkshelf::SnapshotStorage;
use linkshelf::PlaylistStore;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No entry with id {0}")]
    UnknownEntry(String),
    #[error("Nothing saved yet")]
    EmptyPlaylist,
}

/// Tells the user when the last change stayed in memory only.
pub fn warn_if_unsaved<S: SnapshotStorage>(store: &PlaylistStore<S>) {
    if let Some(e) = store.last_storage_error() {
        eprintln!("⚠️ Change applied but not saved: {e}");
    }
}
