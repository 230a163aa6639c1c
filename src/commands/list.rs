use linkshelf::EntryFilter;

use crate::commands::CommandError;
use crate::{Error, Store};

/// Show the saved entries, newest first
pub fn list(store: &Store, filter: EntryFilter) -> Result<(), Error> {
    if store.is_empty() {
        return Err(CommandError::EmptyPlaylist.into());
    }

    let entries = store.filter(filter);
    for (i, entry) in entries.iter().enumerate() {
        println!("`{}.` {entry}  ({})", i + 1, entry.id());
        if !entry.note().is_empty() {
            println!("      {}", entry.note());
        }
    }

    let counts = store.counts();
    println!(
        "{} shown ({filter}) | {} total, {} favorites, {} YouTube, {} Spotify",
        entries.len(),
        counts.all,
        counts.favorites,
        counts.youtube,
        counts.spotify
    );
    Ok(())
}
