use linkshelf::{MediaReference, resolve as resolve_link};

use crate::Error;

pub fn describe(media: &MediaReference) -> String {
    let mut out = format!(
        "{} {}\n  id:    {}\n",
        media.provider(),
        media.title_hint(),
        media.external_id()
    );
    if let Some(kind) = media.subtype() {
        out.push_str(&format!("  kind:  {kind}\n"));
    }
    out.push_str(&format!("  embed: {}", media.embed_url()));
    out
}

/// Show what a link resolves to without touching the saved list
pub fn resolve(url: &str) -> Result<(), Error> {
    let media = resolve_link(url)?;
    println!("{}", describe(&media));
    Ok(())
}
