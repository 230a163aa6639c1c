use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";
pub const SPOTIFY_EMBED_BASE: &str = "https://open.spotify.com/embed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    YouTube,
    Spotify,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Spotify => "spotify",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::YouTube => write!(f, "[YT]"),
            Provider::Spotify => write!(f, "[SP]"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" | "yt" => Ok(Provider::YouTube),
            "spotify" | "sp" => Ok(Provider::Spotify),
            other => Err(format!("unknown provider `{other}`")),
        }
    }
}

/// The kind of Spotify object a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotifyKind {
    Track,
    Album,
    Playlist,
    Episode,
    Show,
}

impl SpotifyKind {
    pub const ALL: [SpotifyKind; 5] = [
        SpotifyKind::Track,
        SpotifyKind::Album,
        SpotifyKind::Playlist,
        SpotifyKind::Episode,
        SpotifyKind::Show,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpotifyKind::Track => "track",
            SpotifyKind::Album => "album",
            SpotifyKind::Playlist => "playlist",
            SpotifyKind::Episode => "episode",
            SpotifyKind::Show => "show",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == segment)
    }
}

impl fmt::Display for SpotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link classified into a provider, with its canonical embed URL.
///
/// Only [`MediaReference::youtube`] and [`MediaReference::spotify`] build one,
/// so `embed_url` and `title_hint` always follow from the provider, the id and
/// the Spotify kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    provider: Provider,
    external_id: String,
    subtype: Option<SpotifyKind>,
    embed_url: String,
    title_hint: String,
}

impl MediaReference {
    pub fn youtube(video_id: &str) -> Self {
        Self {
            provider: Provider::YouTube,
            external_id: video_id.to_string(),
            subtype: None,
            embed_url: format!("{YOUTUBE_EMBED_BASE}/{video_id}?rel=0&modestbranding=1"),
            title_hint: String::from("YouTube video"),
        }
    }

    pub fn spotify(kind: SpotifyKind, id: &str) -> Self {
        Self {
            provider: Provider::Spotify,
            external_id: id.to_string(),
            subtype: Some(kind),
            embed_url: format!("{SPOTIFY_EMBED_BASE}/{kind}/{id}"),
            title_hint: format!("Spotify {kind}"),
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn subtype(&self) -> Option<SpotifyKind> {
        self.subtype
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn title_hint(&self) -> &str {
        &self.title_hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_embed_uses_privacy_domain() {
        let media = MediaReference::youtube("dQw4w9WgXcQ");
        assert_eq!(
            media.embed_url(),
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
        );
        assert_eq!(media.subtype(), None);
        assert_eq!(media.title_hint(), "YouTube video");
    }

    #[test]
    fn spotify_embed_includes_kind() {
        let media = MediaReference::spotify(SpotifyKind::Episode, "abc-123");
        assert_eq!(media.embed_url(), "https://open.spotify.com/embed/episode/abc-123");
        assert_eq!(media.title_hint(), "Spotify episode");
        assert_eq!(media.subtype(), Some(SpotifyKind::Episode));
    }

    #[test]
    fn provider_tags_parse_case_insensitively() {
        assert_eq!("YouTube".parse::<Provider>(), Ok(Provider::YouTube));
        assert_eq!("sp".parse::<Provider>(), Ok(Provider::Spotify));
        assert!("vimeo".parse::<Provider>().is_err());
    }

    #[test]
    fn unknown_spotify_segment_is_rejected() {
        assert_eq!(SpotifyKind::from_path_segment("artist"), None);
        assert_eq!(SpotifyKind::from_path_segment("show"), Some(SpotifyKind::Show));
    }
}
