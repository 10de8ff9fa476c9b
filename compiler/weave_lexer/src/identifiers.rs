//! Plain and raw identifier scanning. Keyword and contextual-keyword
//! resolution live in [`crate::keywords`]; this module only finds the
//! identifier's text span.

use weave_source::char_traits::{is_identifier_continue, is_identifier_start};
use weave_source::{Position, SourceCursor};

/// Try to scan a raw identifier: `r#` followed by at least one
/// identifier-continue character. Returns the span of the text *after* the
/// `r#` marker (the value a parser sees). Leaves the cursor untouched and
/// returns `None` if the pattern doesn't match — including when `r#` is
/// followed by a second `#` or by `"`, since those belong to a raw string
/// instead, checked separately by [`crate::strings`].
#[must_use]
pub(crate) fn try_raw_identifier(cursor: &mut SourceCursor<'_>) -> Option<(Position, Position)> {
    if cursor.peek() != 'r' {
        return None;
    }
    let mut probe = *cursor;
    probe.advance(); // past 'r'
    if probe.peek() != '#' {
        return None;
    }
    probe.advance(); // past '#'
    if !is_identifier_start(probe.peek()) {
        return None;
    }

    *cursor = probe;
    let text_start = cursor.pos();
    cursor.advance();
    while is_identifier_continue(cursor.peek()) {
        cursor.advance();
    }
    Some((text_start, cursor.pos()))
}

/// Scan a plain identifier starting at the cursor's current position (the
/// caller has already confirmed `peek()` is an identifier-start character).
/// Returns the span of the identifier's text.
pub(crate) fn scan_plain_identifier(cursor: &mut SourceCursor<'_>) -> (Position, Position) {
    let text_start = cursor.pos();
    cursor.advance();
    while is_identifier_continue(cursor.peek()) {
        cursor.advance();
    }
    (text_start, cursor.pos())
}
