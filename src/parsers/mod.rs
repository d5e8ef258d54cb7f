//! WhatsApp TXT export parser.
//!
//! Reconstructs structured [`Message`]s from the loosely-formatted text
//! WhatsApp produces on export. Both common shapes are covered by a single
//! header grammar:
//!
//! - iOS-style, bracketed: `[04.05.24, 15:22] Alice: message`
//! - Android-style, unbracketed: `2/16/24, 07:44 - +44 7999 431711: message`
//!
//! Lines that don't look like a header are continuations of the previous
//! message, so line-wrapped and deliberately multi-line messages come back
//! as one [`Message`]. Blocks whose header date defeats every known layout
//! are dropped and counted — parsing never fails on bad content, only on
//! I/O.
//!
//! # Example
//!
//! ```rust
//! use trackpack::parsers::WhatsAppParser;
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse_str("[04.05.24, 15:22] Alice: hello");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender(), "Alice");
//! ```

mod blocks;
mod timestamp;

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::Message;
use crate::error::Result;

use blocks::{BlockReader, RawBlock};
use timestamp::parse_timestamp;

/// Message header grammar: optional opening bracket, date token, time token,
/// optional closing bracket, optional dash separator, sender ending at the
/// first colon, then the remainder as the first content line.
///
/// The date token is deliberately loose (`1-2 digits [/.] 1-2 digits [/.]
/// 2-4 digits`); actual validation happens in the timestamp layer so that a
/// header-shaped line with a nonsense date still forms a block boundary.
pub(crate) const HEADER_PATTERN: &str = r"^\[?(\d{1,2}[/.]\d{1,2}[/.]\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?)\]?\s-?\s*([^:]+):\s?(.*)$";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use trackpack::parsers::WhatsAppParser;
///
/// let parser = WhatsAppParser::new();
/// let messages = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), trackpack::TrackpackError>(())
/// ```
pub struct WhatsAppParser {
    header: Regex,
}

impl WhatsAppParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self {
            header: Regex::new(HEADER_PATTERN).unwrap(),
        }
    }

    /// Parses a chat export file.
    ///
    /// # Errors
    ///
    /// Returns [`TrackpackError::Io`](crate::TrackpackError::Io) if the file
    /// cannot be read or is not valid UTF-8. Unparsable content inside the
    /// file is never an error; it degrades to dropped blocks.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        self.parse_with_stats(path).map(|(messages, _)| messages)
    }

    /// Parses a chat export file, returning parse accounting alongside.
    pub fn parse_with_stats(&self, path: &Path) -> Result<(Vec<Message>, ParseStats)> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str_with_stats(&content))
    }

    /// Parses chat content from a string. Infallible: unusable content
    /// yields fewer (possibly zero) messages.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        self.parse_str_with_stats(content).0
    }

    /// Parses chat content from a string, returning parse accounting alongside.
    pub fn parse_str_with_stats(&self, content: &str) -> (Vec<Message>, ParseStats) {
        self.parse_lines(content.lines().map(String::from))
    }

    /// Parses an arbitrary line stream.
    ///
    /// The stream is consumed once, sequentially; blocks are assembled
    /// lazily and each is converted to a [`Message`] as soon as it is
    /// complete.
    pub fn parse_lines<I>(&self, lines: I) -> (Vec<Message>, ParseStats)
    where
        I: IntoIterator<Item = String>,
    {
        let mut stats = ParseStats::default();
        let mut messages = Vec::new();

        let mut reader = BlockReader::new(&self.header, lines.into_iter());
        for block in reader.by_ref() {
            stats.blocks_seen += 1;
            match self.parse_block(&block) {
                Some(msg) => messages.push(msg),
                None => {
                    stats.blocks_dropped += 1;
                    warn!(
                        header = %truncate(&block.lines[0], 80),
                        "dropping block with unparsable timestamp"
                    );
                }
            }
        }
        stats.lines_read = reader.lines_read();
        stats.messages_parsed = messages.len();

        info!(
            lines = stats.lines_read,
            messages = stats.messages_parsed,
            dropped = stats.blocks_dropped,
            "parsed WhatsApp chat export"
        );

        (messages, stats)
    }

    /// Converts one raw block into a message, or `None` when the header
    /// timestamp defeats every known layout.
    fn parse_block(&self, block: &RawBlock) -> Option<Message> {
        let caps = self.header.captures(&block.lines[0])?;

        let timestamp = parse_timestamp(&caps[1], &caps[2])?;
        let sender = caps[3].trim();

        let mut content = caps[4].to_string();
        for line in &block.lines[1..] {
            content.push('\n');
            content.push_str(line);
        }

        let msg = Message::new(timestamp, sender, content.trim_end());
        debug!(date = %msg.date(), sender = %msg.sender(), "parsed message");
        Some(msg)
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters for one parse pass.
///
/// `blocks_dropped` counts header-shaped blocks whose date or time failed
/// every layout; they never surface as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_read: usize,
    pub blocks_seen: usize,
    pub messages_parsed: usize,
    pub blocks_dropped: usize,
}

impl ParseStats {
    /// Share of blocks dropped, as a percentage.
    pub fn drop_rate(&self) -> f64 {
        if self.blocks_seen == 0 {
            return 0.0;
        }
        (self.blocks_dropped as f64 / self.blocks_seen as f64) * 100.0
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parser() -> WhatsAppParser {
        WhatsAppParser::new()
    }

    #[test]
    fn test_bracketed_header() {
        let messages = parser().parse_str("[04.05.24, 15:22] Alice: hello there");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[0].content(), "hello there");
        assert_eq!(
            messages[0].date(),
            NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
        );
    }

    #[test]
    fn test_unbracketed_dash_header() {
        let messages = parser().parse_str("2/16/24, 07:44 - +44 7999 431711: morning all");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "+44 7999 431711");
        assert_eq!(messages[0].content(), "morning all");
        assert_eq!(
            messages[0].date(),
            NaiveDate::from_ymd_opt(2024, 2, 16).unwrap()
        );
    }

    #[test]
    fn test_multiline_message_content_joined() {
        let input = "[04.05.24, 15:22] Alice: first line\nsecond line\nthird line";
        let messages = parser().parse_str(input);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "first line\nsecond line\nthird line");
    }

    #[test]
    fn test_blank_line_inside_message_preserved() {
        let input = "[04.05.24, 15:22] Alice: first\n\nlast";
        let messages = parser().parse_str(input);
        assert_eq!(messages[0].content(), "first\n\nlast");
    }

    #[test]
    fn test_invalid_date_block_dropped_and_counted() {
        let input = "[99/99/99, 10:00] Bob: bogus\n[04.05.24, 15:22] Alice: fine";
        let (messages, stats) = parser().parse_str_with_stats(input);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(stats.blocks_seen, 2);
        assert_eq!(stats.blocks_dropped, 1);
        assert_eq!(stats.messages_parsed, 1);
    }

    #[test]
    fn test_sender_with_colon_cut_at_first() {
        // the sender capture ends at the first colon; the rest is content
        let messages = parser().parse_str("[04.05.24, 15:22] Alice: note: remember this");
        assert_eq!(messages[0].sender(), "Alice");
        assert_eq!(messages[0].content(), "note: remember this");
    }

    #[test]
    fn test_header_with_seconds() {
        let messages = parser().parse_str("[04.05.24, 15:22:31] Alice: hi");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_empty_remainder_then_continuation() {
        let input = "[04.05.24, 15:22] Alice:\nthe actual content";
        let messages = parser().parse_str(input);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "\nthe actual content");
    }

    #[test]
    fn test_no_headers_at_all() {
        let (messages, stats) = parser().parse_str_with_stats("just\nsome\ntext");
        assert!(messages.is_empty());
        assert_eq!(stats.blocks_seen, 0);
        assert_eq!(stats.lines_read, 3);
    }

    #[test]
    fn test_stats_drop_rate() {
        let stats = ParseStats {
            lines_read: 10,
            blocks_seen: 4,
            messages_parsed: 3,
            blocks_dropped: 1,
        };
        assert!((stats.drop_rate() - 25.0).abs() < f64::EPSILON);
        assert!(ParseStats::default().drop_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate("привет мир", 6), "привет");
        assert_eq!(truncate("short", 80), "short");
    }
}
