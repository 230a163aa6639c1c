use std::fs;
use std::path::Path;

use crate::commands::warn_if_unsaved;
use crate::{Error, Store};

/// Write the whole list as JSON, to a file or stdout
pub fn export(store: &Store, output: Option<&Path>) -> Result<(), Error> {
    let snapshot = store.export_snapshot()?;
    match output {
        Some(path) => {
            fs::write(path, snapshot)?;
            eprintln!("Exported {} entries to {}", store.len(), path.display());
        }
        None => println!("{snapshot}"),
    }
    Ok(())
}

/// Replace the whole list with the contents of an exported file
pub fn import(store: &mut Store, path: &Path) -> Result<(), Error> {
    let data = fs::read_to_string(path)?;
    let count = store.import_snapshot(&data)?;
    println!("Imported {count} entries from {}", path.display());
    warn_if_unsaved(store);
    Ok(())
}
