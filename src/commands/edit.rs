use linkshelf::EntryId;

use crate::commands::{CommandError, warn_if_unsaved};
use crate::{Error, Store};

pub fn remove(store: &mut Store, id: &str) -> Result<(), Error> {
    let id = EntryId::from(id);
    if !store.remove(&id) {
        return Err(CommandError::UnknownEntry(id.to_string()).into());
    }
    println!("Removed `{id}`");
    warn_if_unsaved(store);
    Ok(())
}

pub fn favorite(store: &mut Store, id: &str) -> Result<(), Error> {
    let id = EntryId::from(id);
    let favorite = store
        .toggle_favorite(&id)
        .ok_or_else(|| CommandError::UnknownEntry(id.to_string()))?;
    if favorite {
        println!("⭐ Marked `{id}` as favorite");
    } else {
        println!("Unmarked `{id}`");
    }
    warn_if_unsaved(store);
    Ok(())
}

pub fn rename(store: &mut Store, id: &str, name: &str) -> Result<(), Error> {
    let id = EntryId::from(id);
    if !store.update_name(&id, name) {
        return Err(CommandError::UnknownEntry(id.to_string()).into());
    }
    println!("Renamed `{id}`");
    warn_if_unsaved(store);
    Ok(())
}

pub fn note(store: &mut Store, id: &str, text: &str) -> Result<(), Error> {
    let id = EntryId::from(id);
    if !store.update_note(&id, text) {
        return Err(CommandError::UnknownEntry(id.to_string()).into());
    }
    println!("Updated note on `{id}`");
    warn_if_unsaved(store);
    Ok(())
}
