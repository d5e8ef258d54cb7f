//! Core types and organization pipeline.
//!
//! - [`models`] — [`PlaylistDraft`]
//! - [`names`] — [`playlist_name`], [`canonicalize`], [`close_known_names`]
//! - [`organizer`] — [`bucket_by_friday`], [`organize`], [`planned_playlist_names`]

pub mod models;
pub mod names;
pub mod organizer;

pub use models::PlaylistDraft;
pub use names::{PLAYLIST_PREFIX, canonicalize, close_known_names, playlist_name};
pub use organizer::{bucket_by_friday, organize, planned_playlist_names};
