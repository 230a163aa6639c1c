//! JSON snapshot of a whole collection, shared by persistence and
//! user-facing export/import.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entry::{EntryId, PlaylistEntry};
use crate::domain::media::{MediaReference, Provider, SpotifyKind};
use crate::domain::playlist::PlaylistCollection;
use crate::services::error::{ExportError, ImportError};
use crate::services::link_resolver;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    id: String,
    source_url: String,
    provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtype: Option<SpotifyKind>,
    external_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    embed_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title_hint: String,
    #[serde(default, deserialize_with = "null_as_default")]
    display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    note: String,
    #[serde(default, deserialize_with = "null_as_default")]
    favorite: bool,
    created_at: DateTime<Utc>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&PlaylistEntry> for EntryRecord {
    fn from(entry: &PlaylistEntry) -> Self {
        let media = entry.media();
        Self {
            id: entry.id().to_string(),
            source_url: entry.source_url().to_string(),
            provider: media.provider(),
            subtype: media.subtype(),
            external_id: media.external_id().to_string(),
            embed_url: media.embed_url().to_string(),
            title_hint: media.title_hint().to_string(),
            display_name: entry.display_name().to_string(),
            note: entry.note().to_string(),
            favorite: entry.is_favorite(),
            created_at: entry.created_at(),
        }
    }
}

impl EntryRecord {
    /// The stored `embedUrl`/`titleHint` are ignored; both are rebuilt from
    /// the provider fields.
    fn into_entry(self) -> Result<PlaylistEntry, String> {
        if self.id.is_empty() {
            return Err("empty id".into());
        }
        if self.external_id.is_empty() {
            return Err("empty externalId".into());
        }
        if !link_resolver::is_valid_external_id(self.provider, &self.external_id) {
            return Err("malformed externalId".into());
        }

        let media = match self.provider {
            Provider::YouTube => MediaReference::youtube(&self.external_id),
            Provider::Spotify => {
                let kind = self.subtype.ok_or("spotify entry without subtype")?;
                MediaReference::spotify(kind, &self.external_id)
            }
        };

        Ok(PlaylistEntry::restore(
            EntryId::from(self.id),
            self.source_url,
            media,
            self.display_name,
            self.note,
            self.favorite,
            self.created_at,
        ))
    }
}

pub fn encode(collection: &PlaylistCollection) -> Result<String, ExportError> {
    let records: Vec<EntryRecord> = collection.iter().map(EntryRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn decode(data: &str) -> Result<PlaylistCollection, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(data).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

    let serde_json::Value::Array(items) = value else {
        return Err(ImportError::InvalidFormat(
            "expected a list of entries".to_string(),
        ));
    };

    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let record: EntryRecord = serde_json::from_value(item)
                .map_err(|e| ImportError::InvalidFormat(format!("entry {index}: {e}")))?;
            let entry = record
                .into_entry()
                .map_err(|reason| ImportError::InvalidFormat(format!("entry {index}: {reason}")))?;
            if !seen.insert(entry.id().clone()) {
                return Err(ImportError::InvalidFormat(format!(
                    "entry {index}: duplicate id {}",
                    entry.id()
                )));
            }
            Ok(entry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"[{
        "id": "e1",
        "sourceUrl": "https://open.spotify.com/show/pod1",
        "provider": "spotify",
        "subtype": "show",
        "externalId": "pod1",
        "embedUrl": "https://evil.example/embed",
        "titleHint": "whatever",
        "displayName": "Pod",
        "note": null,
        "favorite": true,
        "createdAt": "2024-03-01T12:00:00Z"
    }]"#;

    #[test]
    fn stored_embed_url_is_rebuilt() {
        let collection = decode(RECORD).unwrap();
        let entry = collection.iter().next().unwrap();
        assert_eq!(entry.media().embed_url(), "https://open.spotify.com/embed/show/pod1");
        assert_eq!(entry.media().title_hint(), "Spotify show");
        assert_eq!(entry.note(), "");
        assert!(entry.is_favorite());
    }

    #[test]
    fn missing_optional_fields_default() {
        let data = r#"[{
            "id": "e2",
            "sourceUrl": "https://youtu.be/dQw4w9WgXcQ",
            "provider": "youtube",
            "externalId": "dQw4w9WgXcQ",
            "createdAt": "2024-03-01T12:00:00Z"
        }]"#;
        let collection = decode(data).unwrap();
        let entry = collection.iter().next().unwrap();
        assert_eq!(entry.display_name(), "");
        assert!(!entry.is_favorite());
        assert_eq!(entry.media().subtype(), None);
    }

    #[test]
    fn object_top_level_is_rejected() {
        assert!(matches!(decode(r#"{"entries": []}"#), Err(ImportError::InvalidFormat(_))));
    }

    #[test]
    fn spotify_without_subtype_is_rejected() {
        let data = RECORD.replace(r#""subtype": "show","#, "");
        assert!(decode(&data).is_err());
    }

    fn rejection(data: &str) -> String {
        match decode(data) {
            Err(ImportError::InvalidFormat(reason)) => reason,
            Ok(_) => panic!("accepted: {data}"),
        }
    }

    #[test]
    fn path_like_external_ids_are_rejected() {
        let youtube = RECORD
            .replace(r#""provider": "spotify""#, r#""provider": "youtube""#)
            .replace(r#""externalId": "pod1""#, r#""externalId": "../../evil.example/x\"><b>""#);
        assert_eq!(rejection(&youtube), "entry 0: malformed externalId");

        let spotify = RECORD.replace(
            r#""externalId": "pod1""#,
            r#""externalId": "a b/../../../../attacker?q=1""#,
        );
        assert_eq!(rejection(&spotify), "entry 0: malformed externalId");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let data = RECORD.replace(r#""provider": "spotify""#, r#""provider": "vimeo""#);
        assert!(rejection(&data).starts_with("entry 0:"));
    }

    #[test]
    fn empty_id_is_rejected() {
        let data = RECORD.replace(r#""id": "e1""#, r#""id": """#);
        assert_eq!(rejection(&data), "entry 0: empty id");
    }

    #[test]
    fn empty_external_id_is_rejected() {
        let data = RECORD.replace(r#""externalId": "pod1""#, r#""externalId": """#);
        assert_eq!(rejection(&data), "entry 0: empty externalId");
    }

    #[test]
    fn missing_created_at_is_rejected() {
        let data = RECORD
            .replace(r#""favorite": true,"#, r#""favorite": true"#)
            .replace(r#""createdAt": "2024-03-01T12:00:00Z""#, "");
        let reason = rejection(&data);
        assert!(reason.contains("createdAt"), "{reason}");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let one = RECORD.trim().trim_start_matches('[').trim_end_matches(']');
        let data = format!("[{one},{one}]");
        let err = decode(&data).unwrap_err();
        assert!(err.to_string().contains("duplicate id e1"));
    }

    #[test]
    fn export_omits_absent_subtype() {
        let mut collection = PlaylistCollection::new();
        collection.prepend(PlaylistEntry::new(
            "https://youtu.be/dQw4w9WgXcQ",
            MediaReference::youtube("dQw4w9WgXcQ"),
            "",
            "",
        ));
        let json = encode(&collection).unwrap();
        assert!(!json.contains("subtype"));
        assert!(json.contains(r#""embedUrl": "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1""#));
    }
}
