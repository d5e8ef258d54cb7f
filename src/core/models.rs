//! Playlist draft model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::names::playlist_name;
use crate::link::TrackUri;

/// An in-memory, not-yet-created playlist for one Friday.
///
/// The name is derived deterministically from the date (`"JMS dd.mm.yy"`)
/// and track URIs accumulate in first-seen order with exact duplicates
/// skipped. Drafts are filled by the organizer and immutable once returned:
/// ownership transfers to whatever creates the real playlist.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use trackpack::core::PlaylistDraft;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
/// let draft = PlaylistDraft::new(date);
/// assert_eq!(draft.name(), "JMS 03.05.24");
/// assert!(draft.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDraft {
    date: NaiveDate,
    name: String,
    track_uris: Vec<TrackUri>,
}

impl PlaylistDraft {
    /// Creates an empty draft for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            name: playlist_name(date),
            track_uris: Vec::new(),
        }
    }

    /// Appends a track unless the draft already contains it.
    pub(crate) fn add_track(&mut self, uri: TrackUri) {
        if !self.track_uris.contains(&uri) {
            self.track_uris.push(uri);
        }
    }

    /// Returns the Friday this draft collects.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the canonical playlist name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accumulated track URIs, in first-seen order.
    pub fn track_uris(&self) -> &[TrackUri] {
        &self.track_uris
    }

    /// Returns the number of distinct tracks.
    pub fn track_count(&self) -> usize {
        self.track_uris.len()
    }

    /// Returns `true` if the draft contains this track already.
    pub fn has_track(&self, uri: &TrackUri) -> bool {
        self.track_uris.contains(uri)
    }

    /// Returns `true` if no tracks have been collected.
    pub fn is_empty(&self) -> bool {
        self.track_uris.is_empty()
    }
}
