use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::media::{MediaReference, Provider, SpotifyKind};
use crate::services::error::ResolveError;

static YOUTUBE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{6,}$").unwrap());

static YOUTUBE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:embed|shorts)/([A-Za-z0-9_-]{6,})(?:/.*)?$").unwrap()
});

static SPOTIFY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

static YOUTU_BE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z0-9_-]{6,})(?:/.*)?$").unwrap());

static SPOTIFY_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^/(?:intl-[A-Za-z-]+/)?(track|album|playlist|episode|show)/([A-Za-z0-9_-]+)(?:/.*)?$",
    )
    .unwrap()
});

const SHORT_YOUTUBE_HOST: &str = "youtu.be";
const SPOTIFY_HOST: &str = "open.spotify.com";

/// One entry of the dispatch table: a cheap host check, then the extractor.
struct ProviderMatcher {
    provider: Provider,
    accepts_host: fn(&str) -> bool,
    extract: fn(&Url) -> Option<MediaReference>,
}

// Tried in order; the host checks are disjoint so at most one can match.
static PROVIDERS: [ProviderMatcher; 2] = [
    ProviderMatcher {
        provider: Provider::YouTube,
        accepts_host: is_youtube_host,
        extract: extract_youtube,
    },
    ProviderMatcher {
        provider: Provider::Spotify,
        accepts_host: is_spotify_host,
        extract: extract_spotify,
    },
];

/// Classifies a pasted link into a provider and its canonical embed reference.
///
/// Pure and deterministic: no network access, same input gives the same output.
pub fn resolve(raw_url: &str) -> Result<MediaReference, ResolveError> {
    let url = Url::parse(raw_url.trim()).map_err(|e| ResolveError::InvalidUrl(e.to_string()))?;
    let host = url.host_str().ok_or(ResolveError::UnsupportedProvider)?;

    PROVIDERS
        .iter()
        .filter(|matcher| (matcher.accepts_host)(host))
        .find_map(|matcher| {
            let media = (matcher.extract)(&url)?;
            tracing::trace!("Resolved {} link to {}", matcher.provider.as_str(), media.external_id());
            Some(media)
        })
        .ok_or(ResolveError::UnsupportedProvider)
}

/// Whether `id` has the shape the resolver would extract for `provider`.
pub(crate) fn is_valid_external_id(provider: Provider, id: &str) -> bool {
    match provider {
        Provider::YouTube => YOUTUBE_ID_RE.is_match(id),
        Provider::Spotify => SPOTIFY_ID_RE.is_match(id),
    }
}

fn is_youtube_host(host: &str) -> bool {
    host == SHORT_YOUTUBE_HOST || host == "youtube.com" || host.ends_with(".youtube.com")
}

fn is_spotify_host(host: &str) -> bool {
    host == SPOTIFY_HOST
}

fn capture(re: &Regex, haystack: &str, group: usize) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}

/// The `v` query parameter, when it holds a well-formed video id.
fn query_video_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| YOUTUBE_ID_RE.is_match(id))
}

fn extract_youtube(url: &Url) -> Option<MediaReference> {
    let host = url.host_str()?;
    let path = url.path();

    let (path_id, is_watch) = if host == SHORT_YOUTUBE_HOST {
        (capture(&YOUTU_BE_PATH_RE, path, 1), false)
    } else {
        let is_watch = path.trim_end_matches('/') == "/watch";
        (capture(&YOUTUBE_PATH_RE, path, 1), is_watch)
    };

    if path_id.is_none() && !is_watch {
        return None;
    }

    // `v` wins over the path id so extra query noise never breaks extraction.
    let id = query_video_id(url).or(path_id)?;
    Some(MediaReference::youtube(&id))
}

fn extract_spotify(url: &Url) -> Option<MediaReference> {
    let caps = SPOTIFY_PATH_RE.captures(url.path())?;
    let kind = SpotifyKind::from_path_segment(caps.get(1)?.as_str())?;
    let id = caps.get(2)?.as_str();
    Some(MediaReference::spotify(kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link_resolves() {
        let media = resolve("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(media.provider(), Provider::YouTube);
        assert_eq!(media.external_id(), "dQw4w9WgXcQ");
    }

    #[test]
    fn watch_without_v_is_unsupported() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?list=PL123"),
            Err(ResolveError::UnsupportedProvider)
        );
    }

    #[test]
    fn invalid_v_falls_back_to_path_id() {
        let media = resolve("https://www.youtube.com/embed/abcdefgh?v=x").unwrap();
        assert_eq!(media.external_id(), "abcdefgh");
    }

    #[test]
    fn too_short_id_is_rejected() {
        assert_eq!(
            resolve("https://youtu.be/abc"),
            Err(ResolveError::UnsupportedProvider)
        );
    }

    #[test]
    fn lookalike_host_is_not_youtube() {
        assert_eq!(
            resolve("https://notyoutube.com/watch?v=dQw4w9WgXcQ"),
            Err(ResolveError::UnsupportedProvider)
        );
    }

    #[test]
    fn spotify_intl_prefix_is_tolerated() {
        let media = resolve("https://open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC").unwrap();
        assert_eq!(media.subtype(), Some(SpotifyKind::Track));
        assert_eq!(media.external_id(), "4uLU6hMCjMI75M1A2tKUQC");
    }

    #[test]
    fn spotify_artist_is_unsupported() {
        assert_eq!(
            resolve("https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF"),
            Err(ResolveError::UnsupportedProvider)
        );
    }

    #[test]
    fn hostless_url_is_unsupported() {
        assert_eq!(
            resolve("mailto:someone@example.com"),
            Err(ResolveError::UnsupportedProvider)
        );
    }

    #[test]
    fn external_id_shapes_follow_provider() {
        assert!(is_valid_external_id(Provider::YouTube, "dQw4w9WgXcQ"));
        assert!(!is_valid_external_id(Provider::YouTube, "abc"));
        assert!(!is_valid_external_id(Provider::YouTube, "../../evil"));
        assert!(is_valid_external_id(Provider::Spotify, "abc"));
        assert!(!is_valid_external_id(Provider::Spotify, "a b/../x"));
        assert!(!is_valid_external_id(Provider::Spotify, ""));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(resolve("  https://youtu.be/dQw4w9WgXcQ\n").is_ok());
    }
}
