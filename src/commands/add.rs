use crate::commands::resolve::describe;
use crate::commands::warn_if_unsaved;
use crate::{Error, Store};

/// Add a YouTube or Spotify link to the list
pub fn add(store: &mut Store, url: &str, name: &str, note: &str) -> Result<(), Error> {
    let entry = store.add(url, name, note)?;

    println!("Added {} as `{}`", entry.label(), entry.id());
    println!("{}", describe(entry.media()));
    warn_if_unsaved(store);
    Ok(())
}
