//! Friday bucketing and playlist organization.
//!
//! [`bucket_by_friday`] turns parsed messages into one draft per Friday;
//! [`organize`] is the entry point that additionally suppresses drafts whose
//! name already exists in either registry. `organize` is the single choke
//! point enforcing "at most one playlist per Friday, across both
//! registries".

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::Message;
use crate::core::models::PlaylistDraft;
use crate::core::names::{close_known_names, playlist_name};

/// Groups messages into one draft per Friday, ascending by date.
///
/// Only messages that were sent on a Friday AND carry a track reference
/// participate. Within each draft, track URIs keep first-seen order and
/// exact duplicates are skipped. A Friday whose messages carry no usable
/// links yields no draft at all.
pub fn bucket_by_friday(messages: &[Message]) -> Vec<PlaylistDraft> {
    let mut buckets: BTreeMap<NaiveDate, PlaylistDraft> = BTreeMap::new();

    for msg in messages {
        let Some(uri) = msg.track_uri() else { continue };
        if !msg.is_friday() {
            continue;
        }

        buckets
            .entry(msg.date())
            .or_insert_with(|| PlaylistDraft::new(msg.date()))
            .add_track(uri.clone());
    }

    // a bucket only exists because at least one track was added, so no
    // empty drafts can escape here
    info!(fridays = buckets.len(), "grouped messages by Friday");
    buckets.into_values().collect()
}

/// Organizes messages into playlist drafts that exist in neither registry.
///
/// `known_names` is the pre-fetched union of playlist names from both
/// registries, in whatever spelling each uses; it is closed under
/// canonicalization before the check, so `"Weekly Mix 03.05.2024"` on the
/// site suppresses a would-be `"JMS 03.05.24"` draft. Returned drafts are
/// final, duplicate-free, and ordered ascending by date.
///
/// Pure function over in-memory values: calling it twice with identical
/// inputs yields identical drafts.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use trackpack::core::organize;
/// use trackpack::parsers::WhatsAppParser;
///
/// let messages = WhatsAppParser::new()
///     .parse_str("[03.05.24, 18:01] Alice: https://open.spotify.com/track/abc123");
///
/// let known: HashSet<String> = HashSet::new();
/// let drafts = organize(&messages, &known);
/// assert_eq!(drafts.len(), 1);
/// assert_eq!(drafts[0].name(), "JMS 03.05.24");
/// ```
pub fn organize(messages: &[Message], known_names: &HashSet<String>) -> Vec<PlaylistDraft> {
    let known = close_known_names(known_names);

    let drafts: Vec<PlaylistDraft> = bucket_by_friday(messages)
        .into_iter()
        .filter(|draft| {
            let exists = known.contains(draft.name());
            if exists {
                debug!(name = draft.name(), "playlist already exists, skipping");
            }
            !exists
        })
        .collect();

    info!(planned = drafts.len(), "organized playlist drafts");
    drafts
}

/// Returns the set of playlist names this transcript would produce, before
/// any existence filtering. Useful for previewing a run.
pub fn planned_playlist_names(messages: &[Message]) -> HashSet<String> {
    messages
        .iter()
        .filter(|m| m.is_friday() && m.has_track())
        .map(|m| playlist_name(m.date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn track_msg(ts: NaiveDateTime, id: &str) -> Message {
        Message::new(ts, "Alice", format!("spotify:track:{id}"))
    }

    #[test]
    fn test_buckets_one_draft_per_friday() {
        // 2024-05-03 and 2024-05-10 are consecutive Fridays
        let messages = vec![
            track_msg(at(2024, 5, 3, 10), "aaa"),
            track_msg(at(2024, 5, 3, 18), "bbb"),
            track_msg(at(2024, 5, 10, 9), "ccc"),
        ];
        let drafts = bucket_by_friday(&messages);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].name(), "JMS 03.05.24");
        assert_eq!(drafts[0].track_count(), 2);
        assert_eq!(drafts[1].name(), "JMS 10.05.24");
        assert_eq!(drafts[1].track_count(), 1);
    }

    #[test]
    fn test_non_friday_messages_ignored() {
        // 2024-05-04 is a Saturday
        let messages = vec![track_msg(at(2024, 5, 4, 10), "aaa")];
        assert!(bucket_by_friday(&messages).is_empty());
    }

    #[test]
    fn test_friday_without_links_yields_no_draft() {
        let messages = vec![Message::new(at(2024, 5, 3, 10), "Alice", "no links today")];
        assert!(bucket_by_friday(&messages).is_empty());
    }

    #[test]
    fn test_duplicate_tracks_collapse_within_draft() {
        let messages = vec![
            track_msg(at(2024, 5, 3, 10), "aaa"),
            track_msg(at(2024, 5, 3, 11), "aaa"),
        ];
        let drafts = bucket_by_friday(&messages);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].track_count(), 1);
    }

    #[test]
    fn test_drafts_ascend_by_date_regardless_of_input_order() {
        let messages = vec![
            track_msg(at(2024, 5, 10, 9), "ccc"),
            track_msg(at(2024, 5, 3, 10), "aaa"),
        ];
        let drafts = bucket_by_friday(&messages);
        let dates: Vec<NaiveDate> = drafts.iter().map(|d| d.date()).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
            ]
        );
    }

    #[test]
    fn test_organize_suppresses_short_form_match() {
        let messages = vec![track_msg(at(2024, 5, 3, 10), "aaa")];
        let known: HashSet<String> = ["JMS 03.05.24".to_string()].into();
        assert!(organize(&messages, &known).is_empty());
    }

    #[test]
    fn test_organize_suppresses_via_canonicalization() {
        let messages = vec![track_msg(at(2024, 5, 3, 10), "aaa")];
        let known: HashSet<String> = ["Weekly Mix 03.05.2024".to_string()].into();
        assert!(organize(&messages, &known).is_empty());
    }

    #[test]
    fn test_organize_keeps_unknown_fridays() {
        let messages = vec![
            track_msg(at(2024, 5, 3, 10), "aaa"),
            track_msg(at(2024, 5, 10, 9), "bbb"),
        ];
        let known: HashSet<String> = ["Weekly Mix 03.05.2024".to_string()].into();
        let drafts = organize(&messages, &known);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name(), "JMS 10.05.24");
    }

    #[test]
    fn test_organize_is_idempotent() {
        let messages = vec![
            track_msg(at(2024, 5, 3, 10), "aaa"),
            track_msg(at(2024, 5, 10, 9), "bbb"),
        ];
        let known: HashSet<String> = ["JMS Mix 2".to_string()].into();
        let first = organize(&messages, &known);
        let second = organize(&messages, &known);
        assert_eq!(first, second);
    }

    #[test]
    fn test_draft_names_are_canonical_fixed_points() {
        use crate::core::names::canonicalize;

        let messages = vec![
            track_msg(at(2024, 5, 3, 10), "aaa"),
            track_msg(at(2024, 12, 13, 9), "bbb"),
        ];
        for draft in bucket_by_friday(&messages) {
            assert_eq!(canonicalize(draft.name()), draft.name());
        }
    }

    #[test]
    fn test_planned_playlist_names() {
        let messages = vec![
            track_msg(at(2024, 5, 3, 10), "aaa"),
            track_msg(at(2024, 5, 3, 12), "bbb"),
            Message::new(at(2024, 5, 3, 13), "Bob", "linkless"),
            track_msg(at(2024, 5, 4, 10), "ccc"), // Saturday
        ];
        let names = planned_playlist_names(&messages);
        assert_eq!(names.len(), 1);
        assert!(names.contains("JMS 03.05.24"));
    }
}
