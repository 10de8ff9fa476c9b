//! Owns the source bytes and a precomputed line-start index (component C).

use crate::span::{LinePosition, LineSpan, Position, Span};

/// An immutable source buffer plus a sorted line-start index.
///
/// Bytes are assumed but not required to be valid UTF-8; invalid UTF-8 is
/// the tokenizer's concern (via [`crate::SourceCursor`]), not this type's.
#[derive(Debug)]
pub struct SourceText {
    bytes: Vec<u8>,
    /// Caller-supplied logical name, used only in diagnostic messages.
    name: String,
    /// Sorted line-start byte offsets. `offsets[0] == 0`.
    line_starts: Vec<Position>,
}

impl SourceText {
    /// Build a `SourceText` from owned bytes and a logical name, scanning
    /// once to build the line-start index.
    ///
    /// A newline is either `\n` or `\r\n`; a lone `\r` does *not* start a
    /// new line. This is intentional, not a bug.
    #[must_use]
    pub fn new(bytes: Vec<u8>, name: impl Into<String>) -> Self {
        let line_starts = compute_line_starts(&bytes);
        Self {
            bytes,
            name: name.into(),
            line_starts,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get_content(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of lines in the source (always ≥ 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Largest line index `i` with `offsets[i] <= offset`.
    #[must_use]
    pub fn get_line_index(&self, offset: Position) -> usize {
        // `partition_point` returns the first index whose predicate is
        // false; the target is one less, giving the largest i with
        // offsets[i] <= offset.
        let first_after = self.line_starts.partition_point(|&start| start <= offset);
        first_after.saturating_sub(1)
    }

    /// `(line, column)` for `offset`, with `column` counting decoded code
    /// points (not bytes) since the start of the line. A tab counts as one
    /// column, like any other code point.
    #[must_use]
    pub fn get_line_position(&self, offset: Position) -> LinePosition {
        let line = self.get_line_index(offset);
        let line_start = self.line_starts[line];
        let slice_end = (offset as usize).min(self.bytes.len());
        let slice_start = line_start as usize;
        let column = if slice_start >= slice_end {
            0
        } else {
            // Lossy: invalid UTF-8 in the slice is counted one replacement
            // code point per `char::REPLACEMENT_CHARACTER` run, matching
            // `String::from_utf8_lossy`'s chunking, which is close enough
            // for a human-facing column number on already-diagnosed bytes.
            String::from_utf8_lossy(&self.bytes[slice_start..slice_end])
                .chars()
                .count()
        };
        LinePosition::new(u32::try_from(line).unwrap_or(u32::MAX), column as u32)
    }

    #[must_use]
    pub fn get_line_span(&self, span: Span) -> LineSpan {
        LineSpan::new(
            self.get_line_position(span.start),
            self.get_line_position(span.end),
        )
    }

    /// Full line including its line terminator, or `None` if `index` is
    /// out of range.
    #[must_use]
    pub fn get_line(&self, index: usize) -> Option<Span> {
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or_else(|| self.len());
        Some(Span::new(start, end))
    }

    /// Line span excluding its trailing `\n` or `\r\n`.
    #[must_use]
    pub fn get_line_content(&self, index: usize) -> Option<Span> {
        let full = self.get_line(index)?;
        let bytes = &self.bytes[full.start as usize..full.end as usize];
        let trimmed_len = if bytes.ends_with(b"\r\n") {
            bytes.len() - 2
        } else if bytes.ends_with(b"\n") {
            bytes.len() - 1
        } else {
            bytes.len()
        };
        Some(Span::new(full.start, full.start + trimmed_len as u32))
    }

    #[must_use]
    pub fn get_text(&self, span: Span) -> &[u8] {
        &self.bytes[span.start as usize..span.end as usize]
    }
}

fn compute_line_starts(buf: &[u8]) -> Vec<Position> {
    let mut offsets = vec![0u32];
    let len = buf.len();
    let mut i = 0usize;
    while i < len {
        if buf[i] == b'\n' {
            offsets.push((i + 1) as u32);
            i += 1;
        } else if buf[i] == b'\r' && i + 1 < len && buf[i + 1] == b'\n' {
            offsets.push((i + 2) as u32);
            i += 2;
        } else {
            i += 1;
        }
    }
    offsets
}
