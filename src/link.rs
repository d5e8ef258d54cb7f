//! Spotify track link extraction and canonicalization.
//!
//! Shared links arrive in three shapes:
//! - Full web URLs: `https://open.spotify.com/track/abc123?si=xyz`
//! - Native URIs: `spotify:track:abc123`
//! - Mangled URLs where a chat client folded formatting into the link
//!
//! All three normalize to the canonical [`TrackUri`] form
//! `spotify:track:<id>`, which downstream code uses for equality and
//! de-duplication.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Full web URL to a track page. The id capture stops before any query
/// string, so `?si=...` sharing suffixes are stripped for free.
static TRACK_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:open\.)?spotify\.com/track/([A-Za-z0-9]+)").unwrap()
});

/// Native URI, already canonical.
static TRACK_URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spotify:track:([A-Za-z0-9]+)").unwrap());

/// Marker for the lenient fallback scan.
const TRACK_PAGE_MARKER: &str = "spotify.com/track/";

/// A canonical Spotify track reference: `spotify:track:<id>`.
///
/// This is the normalized form used for equality and de-duplication.
/// Construct one from a raw message with [`extract_track_uri`], or directly
/// from a track id with [`TrackUri::from_id`].
///
/// # Example
///
/// ```rust
/// use trackpack::link::TrackUri;
///
/// let uri = TrackUri::from_id("4uLU6hMCjMI75M1A2tKUQC");
/// assert_eq!(uri.as_str(), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
/// assert_eq!(uri.id(), "4uLU6hMCjMI75M1A2tKUQC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackUri(String);

impl TrackUri {
    /// Builds a canonical URI from a bare track id.
    pub fn from_id(id: impl AsRef<str>) -> Self {
        Self(format!("spotify:track:{}", id.as_ref()))
    }

    /// Returns the full `spotify:track:<id>` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the track id segment.
    pub fn id(&self) -> &str {
        self.0.rsplit(':').next().unwrap_or_default()
    }
}

impl fmt::Display for TrackUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TrackUri> for String {
    fn from(uri: TrackUri) -> Self {
        uri.0
    }
}

/// Extracts the first Spotify track reference from message text.
///
/// Candidates are tried in priority order:
/// 1. A full track-page URL (query string stripped)
/// 2. A native `spotify:track:` URI, returned unchanged
/// 3. A lenient fallback: locate the `spotify.com/track/` marker, scan
///    forward to the next whitespace, and strip trailing non-alphanumeric
///    noise — this recovers links mangled by client-side formatting
///
/// Only the first match counts: a message with multiple links contributes
/// exactly one track. Returns `None` when no candidate yields an id.
///
/// # Example
///
/// ```rust
/// use trackpack::link::extract_track_uri;
///
/// let uri = extract_track_uri("check this https://open.spotify.com/track/abc123?si=xyz").unwrap();
/// assert_eq!(uri.as_str(), "spotify:track:abc123");
///
/// assert!(extract_track_uri("no links here").is_none());
/// ```
pub fn extract_track_uri(content: &str) -> Option<TrackUri> {
    if let Some(caps) = TRACK_URL_PATTERN.captures(content) {
        return Some(TrackUri::from_id(&caps[1]));
    }

    if let Some(caps) = TRACK_URI_PATTERN.captures(content) {
        return Some(TrackUri::from_id(&caps[1]));
    }

    lenient_track_id(content).map(TrackUri::from_id)
}

/// Lenient recovery for links the strict patterns reject (scheme missing,
/// punctuation glued onto the id, and similar client-side damage).
fn lenient_track_id(content: &str) -> Option<String> {
    let start = content.find(TRACK_PAGE_MARKER)? + TRACK_PAGE_MARKER.len();
    let rest = &content[start..];

    // split (not split_whitespace) so a space right after the marker
    // yields an empty candidate instead of the next word
    let candidate = rest
        .split(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .split('?')
        .next()
        .unwrap_or_default();

    let id = candidate.trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
