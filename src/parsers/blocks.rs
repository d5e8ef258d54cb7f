//! Message block segmentation.
//!
//! A WhatsApp export is a flat line stream where one message may span many
//! lines: only the first line of a message carries the `[date, time] sender:`
//! header, and everything up to the next header belongs to the same message.
//! [`BlockReader`] walks the stream once and yields one [`RawBlock`] per
//! header-anchored run of lines.

use regex::Regex;

/// The raw lines of one message: a header-shaped first line plus zero or
/// more continuation lines. Transient; consumed by the parser immediately.
#[derive(Debug)]
pub(crate) struct RawBlock {
    pub lines: Vec<String>,
}

/// Lazy, single-pass iterator over message blocks.
///
/// Segmentation rules:
/// - A line matching the header grammar starts a new block and flushes the
///   pending one. The date inside is NOT validated here; a header-shaped
///   line with a nonsense date still forms a block boundary and the block
///   is dropped downstream.
/// - Any other line is a continuation of the current block. Blank lines
///   inside a block are kept as content, not treated as separators.
/// - Lines before the first header produce no block.
/// - End of input flushes the final block.
pub(crate) struct BlockReader<'r, I> {
    header: &'r Regex,
    lines: I,
    current: Option<Vec<String>>,
    lines_read: usize,
    done: bool,
}

impl<'r, I> BlockReader<'r, I>
where
    I: Iterator<Item = String>,
{
    pub fn new(header: &'r Regex, lines: I) -> Self {
        Self {
            header,
            lines,
            current: None,
            lines_read: 0,
            done: false,
        }
    }

    /// Number of input lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<I> Iterator for BlockReader<'_, I>
where
    I: Iterator<Item = String>,
{
    type Item = RawBlock;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for raw in self.lines.by_ref() {
            self.lines_read += 1;

            // exports written on Windows carry CRLF line endings
            let line = match raw.strip_suffix('\r') {
                Some(stripped) => stripped.to_string(),
                None => raw,
            };

            if self.header.is_match(&line) {
                let pending = self.current.replace(vec![line]);
                if let Some(lines) = pending {
                    return Some(RawBlock { lines });
                }
            } else if let Some(block) = &mut self.current {
                block.push(line);
            }
            // else: before the first header; nothing to attach to
        }

        self.done = true;
        self.current.take().map(|lines| RawBlock { lines })
    }
}
