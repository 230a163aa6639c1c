use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::media::MediaReference;

const UNTITLED: &str = "Untitled";

/// Opaque identifier of a playlist entry.
///
/// Fresh ids are UUIDv7 (millisecond timestamp plus random bits). Imported ids
/// are kept verbatim, whatever shape they have.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One curated link: the resolved media plus the user's annotations.
///
/// `id`, `source_url`, `media` and `created_at` are fixed at construction;
/// only `display_name`, `note` and `favorite` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    id: EntryId,
    source_url: String,
    media: MediaReference,
    display_name: String,
    note: String,
    favorite: bool,
    created_at: DateTime<Utc>,
}

impl PlaylistEntry {
    pub fn new(
        source_url: impl Into<String>,
        media: MediaReference,
        display_name: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            source_url: source_url.into(),
            media,
            display_name: display_name.into(),
            note: note.into(),
            favorite: false,
            created_at: Utc::now(),
        }
    }

    /// Rebuilds an entry from stored fields, keeping its id and timestamp.
    pub(crate) fn restore(
        id: EntryId,
        source_url: String,
        media: MediaReference,
        display_name: String,
        note: String,
        favorite: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_url,
            media,
            display_name,
            note,
            favorite,
            created_at,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn media(&self) -> &MediaReference {
        &self.media
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Name to show for the entry: the display name, falling back to the
    /// title hint and then to "Untitled".
    pub fn label(&self) -> &str {
        if !self.display_name.trim().is_empty() {
            &self.display_name
        } else if !self.media.title_hint().trim().is_empty() {
            self.media.title_hint()
        } else {
            UNTITLED
        }
    }

    pub(crate) fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    pub(crate) fn set_note(&mut self, note: String) {
        self.note = note;
    }

    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }
}

impl fmt::Display for PlaylistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.favorite { "*" } else { " " };
        write!(f, "{star} {} {}", self.media.provider(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::SpotifyKind;

    #[test]
    fn new_entry_starts_unfavorited() {
        let entry = PlaylistEntry::new(
            "https://youtu.be/dQw4w9WgXcQ",
            MediaReference::youtube("dQw4w9WgXcQ"),
            "Our Song",
            "",
        );
        assert!(!entry.is_favorite());
        assert_eq!(entry.label(), "Our Song");
        assert!(!entry.id().as_str().is_empty());
    }

    #[test]
    fn generated_ids_differ() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn blank_name_falls_back_to_title_hint() {
        let entry = PlaylistEntry::new(
            "https://open.spotify.com/album/xyz",
            MediaReference::spotify(SpotifyKind::Album, "xyz"),
            "   ",
            "",
        );
        assert_eq!(entry.label(), "Spotify album");
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut entry = PlaylistEntry::new("u", MediaReference::youtube("abcdef"), "", "");
        assert!(entry.toggle_favorite());
        assert!(!entry.toggle_favorite());
    }
}
