use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use super::entry::{EntryId, PlaylistEntry};
use super::media::Provider;

/// Which entries a listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    FavoritesOnly,
    Provider(Provider),
}

impl EntryFilter {
    pub fn matches(self, entry: &PlaylistEntry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::FavoritesOnly => entry.is_favorite(),
            EntryFilter::Provider(provider) => entry.media().provider() == provider,
        }
    }
}

impl FromStr for EntryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(EntryFilter::All),
            "favorites" | "favourites" | "fav" => Ok(EntryFilter::FavoritesOnly),
            other => other
                .parse::<Provider>()
                .map(EntryFilter::Provider)
                .map_err(|_| format!("unknown filter `{other}`")),
        }
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryFilter::All => f.write_str("all"),
            EntryFilter::FavoritesOnly => f.write_str("favorites"),
            EntryFilter::Provider(provider) => f.write_str(provider.as_str()),
        }
    }
}

/// Totals per filter, for tab badges and the like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryCounts {
    pub all: usize,
    pub favorites: usize,
    pub youtube: usize,
    pub spotify: usize,
}

/// Entries in insertion order, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistCollection {
    entries: VecDeque<PlaylistEntry>,
}

impl PlaylistCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, entry: PlaylistEntry) {
        self.entries.push_front(entry);
    }

    pub fn remove(&mut self, id: &EntryId) -> Option<PlaylistEntry> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        self.entries.remove(index)
    }

    pub fn get(&self, id: &EntryId) -> Option<&PlaylistEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: &EntryId) -> Option<&mut PlaylistEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.entries.iter()
    }

    pub fn filtered(&self, filter: EntryFilter) -> Vec<PlaylistEntry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> EntryCounts {
        self.entries.iter().fold(EntryCounts::default(), |mut acc, e| {
            acc.all += 1;
            if e.is_favorite() {
                acc.favorites += 1;
            }
            match e.media().provider() {
                Provider::YouTube => acc.youtube += 1,
                Provider::Spotify => acc.spotify += 1,
            }
            acc
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PlaylistEntry> for PlaylistCollection {
    fn from_iter<I: IntoIterator<Item = PlaylistEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
