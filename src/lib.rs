//! # Trackpack
//!
//! A Rust library for turning WhatsApp chat exports into weekly Spotify
//! playlist drafts.
//!
//! ## Overview
//!
//! A community group shares tracks all week; the ones posted on a Friday
//! become that week's playlist. Trackpack handles the whole in-memory
//! pipeline:
//!
//! - **Parsing** — reconstructs structured [`Message`]s from the
//!   loosely-formatted export text (multi-line messages, ambiguous date
//!   formats, both bracketed and unbracketed header styles)
//! - **Link extraction** — finds Spotify track links, including ones
//!   mangled by client-side formatting, and normalizes them to
//!   `spotify:track:<id>`
//! - **Organization** — groups Friday messages into one
//!   [`PlaylistDraft`](core::PlaylistDraft) per date, de-duplicated, and
//!   suppresses drafts that already exist under either registry's naming
//!   scheme (`"JMS dd.mm.yy"` or `"Weekly Mix DD.MM.YYYY"`)
//!
//! Fetching registry contents and actually creating playlists are the
//! caller's concern; this crate is pure parsing and bookkeeping.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashSet;
//! use trackpack::core::organize;
//! use trackpack::parsers::WhatsAppParser;
//!
//! let export = "[03.05.24, 18:01] Alice: friday! https://open.spotify.com/track/abc123?si=x\n\
//!               [03.05.24, 18:05] Bob: spotify:track:def456";
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse_str(export);
//!
//! let known: HashSet<String> = ["Weekly Mix 26.04.2024".to_string()].into();
//! let drafts = organize(&messages, &known);
//!
//! assert_eq!(drafts.len(), 1);
//! assert_eq!(drafts[0].name(), "JMS 03.05.24");
//! assert_eq!(drafts[0].track_count(), 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`parsers`] — [`WhatsAppParser`](parsers::WhatsAppParser),
//!   [`ParseStats`](parsers::ParseStats)
//! - [`link`] — [`TrackUri`](link::TrackUri),
//!   [`extract_track_uri`](link::extract_track_uri)
//! - [`core`] — [`PlaylistDraft`](core::PlaylistDraft),
//!   [`organize`](core::organize), name canonicalization
//! - [`error`] — [`TrackpackError`], [`Result`]
//! - [`prelude`] — convenient re-exports

pub mod core;
pub mod error;
pub mod link;
pub mod message;
pub mod parsers;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TrackpackError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use trackpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{Result, TrackpackError};

    pub use crate::link::{TrackUri, extract_track_uri};

    pub use crate::parsers::{ParseStats, WhatsAppParser};

    pub use crate::core::{
        PlaylistDraft, canonicalize, close_known_names, organize, planned_playlist_names,
        playlist_name,
    };
}
