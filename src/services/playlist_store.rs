use crate::domain::entry::{EntryId, PlaylistEntry};
use crate::domain::playlist::{EntryCounts, EntryFilter, PlaylistCollection};
use crate::infrastructure::storage::SnapshotStorage;
use crate::services::error::{ExportError, ImportError, ResolveError, StorageError};
use crate::services::link_resolver;
use crate::services::snapshot;

/// Owns the collection and writes it through to storage after every change.
///
/// Lookups by id that miss are no-ops: the host may race a delete against a
/// pending edit.
pub struct PlaylistStore<S: SnapshotStorage> {
    collection: PlaylistCollection,
    storage: S,
    last_storage_error: Option<StorageError>,
}

impl<S: SnapshotStorage> PlaylistStore<S> {
    /// Loads whatever the storage holds. Missing, unreadable or corrupt data
    /// gives an empty collection.
    pub fn open(storage: S) -> Self {
        let collection = match storage.load() {
            Ok(Some(data)) => snapshot::decode(&data).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt stored playlist: {e}");
                PlaylistCollection::new()
            }),
            Ok(None) => PlaylistCollection::new(),
            Err(e) => {
                tracing::warn!("Could not load stored playlist: {e}");
                PlaylistCollection::new()
            }
        };
        tracing::debug!("Opened playlist with {} entries", collection.len());

        Self {
            collection,
            storage,
            last_storage_error: None,
        }
    }

    /// Resolves the link and prepends a new entry; on failure nothing changes.
    pub fn add(
        &mut self,
        raw_url: &str,
        display_name: &str,
        note: &str,
    ) -> Result<PlaylistEntry, ResolveError> {
        let media = link_resolver::resolve(raw_url)?;
        let entry = PlaylistEntry::new(raw_url.trim(), media, display_name.trim(), note.trim());
        tracing::info!(
            "Added {} {} as {}",
            entry.media().provider().as_str(),
            entry.media().external_id(),
            entry.id()
        );

        self.collection.prepend(entry.clone());
        self.persist();
        Ok(entry)
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &EntryId) -> bool {
        let Some(entry) = self.collection.remove(id) else {
            return false;
        };
        tracing::debug!("Removed {}", entry.id());
        self.persist();
        true
    }

    /// Returns the new favourite state, or `None` when the id is unknown.
    pub fn toggle_favorite(&mut self, id: &EntryId) -> Option<bool> {
        let favorite = self.collection.get_mut(id)?.toggle_favorite();
        tracing::debug!("Set favorite={favorite} on {id}");
        self.persist();
        Some(favorite)
    }

    pub fn update_note(&mut self, id: &EntryId, note: &str) -> bool {
        let Some(entry) = self.collection.get_mut(id) else {
            return false;
        };
        entry.set_note(note.trim().to_string());
        tracing::debug!("Updated note on {id}");
        self.persist();
        true
    }

    pub fn update_name(&mut self, id: &EntryId, name: &str) -> bool {
        let Some(entry) = self.collection.get_mut(id) else {
            return false;
        };
        entry.set_display_name(name.trim().to_string());
        tracing::debug!("Renamed {id}");
        self.persist();
        true
    }

    pub fn filter(&self, filter: EntryFilter) -> Vec<PlaylistEntry> {
        self.collection.filtered(filter)
    }

    pub fn get(&self, id: &EntryId) -> Option<&PlaylistEntry> {
        self.collection.get(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.collection.iter()
    }

    pub fn counts(&self) -> EntryCounts {
        self.collection.counts()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn export_snapshot(&self) -> Result<String, ExportError> {
        snapshot::encode(&self.collection)
    }

    /// Replaces the whole collection with the decoded snapshot. No merge and
    /// no de-duplication against current entries.
    pub fn import_snapshot(&mut self, data: &str) -> Result<usize, ImportError> {
        let imported = snapshot::decode(data)?;
        let count = imported.len();
        self.collection = imported;
        tracing::info!("Imported {count} entries");
        self.persist();
        Ok(count)
    }

    /// The error from the most recent save, cleared by the next good one.
    pub fn last_storage_error(&self) -> Option<&StorageError> {
        self.last_storage_error.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // Best effort: a failed save never undoes the in-memory change.
    fn persist(&mut self) {
        let result = snapshot::encode(&self.collection)
            .map_err(|e| StorageError::Unavailable(e.to_string()))
            .and_then(|data| self.storage.save(&data));

        match result {
            Ok(()) => self.last_storage_error = None,
            Err(e) => {
                tracing::warn!("Failed to save playlist: {e}");
                self.last_storage_error = Some(e);
            }
        }
    }
}
