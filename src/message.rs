//! Parsed chat message type.
//!
//! This module provides [`Message`], the structured representation of one
//! WhatsApp transcript entry. The parser converts raw message blocks into
//! this type, deriving the track reference and the Friday flag once at
//! construction so downstream grouping never re-scans content.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use trackpack::Message;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap().and_hms_opt(15, 22, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "https://open.spotify.com/track/abc123");
//!
//! assert!(msg.is_friday());
//! assert_eq!(msg.track_uri().unwrap().as_str(), "spotify:track:abc123");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::link::{TrackUri, extract_track_uri};

/// A parsed transcript message.
///
/// Immutable after construction. The two derived fields are computed once
/// in [`Message::new`] and always consistent with `timestamp` and `content`:
///
/// | Field | Derived from | Meaning |
/// |-------|--------------|---------|
/// | `track_uri` | `content` | First Spotify track link, canonicalized |
/// | `is_friday` | `timestamp` | Sent on the target weekday |
///
/// # Serialization
///
/// Implements `Serialize`/`Deserialize`; `track_uri` is omitted from JSON
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent (transcript-local time).
    timestamp: NaiveDateTime,

    /// Display name or phone number of the author.
    sender: String,

    /// Full text content, newline-joined for multi-line messages.
    content: String,

    /// Canonical track reference extracted from `content`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    track_uri: Option<TrackUri>,

    /// Whether `timestamp` falls on a Friday.
    is_friday: bool,
}

impl Message {
    /// Creates a message, deriving the track reference and Friday flag.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let track_uri = extract_track_uri(&content);
        let is_friday = timestamp.weekday() == Weekday::Fri;

        Self {
            timestamp,
            sender: sender.into(),
            content,
            track_uri,
            is_friday,
        }
    }

    /// Returns the message timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date the message was sent.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the canonical track reference, if the content carried one.
    pub fn track_uri(&self) -> Option<&TrackUri> {
        self.track_uri.as_ref()
    }

    /// Returns `true` if the message was sent on a Friday.
    pub fn is_friday(&self) -> bool {
        self.is_friday
    }

    /// Returns `true` if the message carries a track reference.
    pub fn has_track(&self) -> bool {
        self.track_uri.is_some()
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
