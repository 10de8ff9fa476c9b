//! Trivia scanning: whitespace runs, line endings, line comments and
//! nested block comments, one piece at a time.

use weave_source::char_traits::{is_newline, is_whitespace};
use weave_source::SourceCursor;
use weave_token::{Trivia, TriviaKind};

use crate::lex_error::{LexError, LexErrorKind};

/// Scan exactly one piece of trivia starting at the cursor's current
/// position. Returns `None` if the current code point starts no trivia
/// (i.e. a token begins here).
pub(crate) fn scan_one(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
) -> Option<Trivia> {
    let start = cursor.pos();
    let c = cursor.peek();

    // `\n` matches; `\r\n` matches; a lone `\r` does not match here at all —
    // it falls through to whatever scanner runs next, which will either
    // consume it (inside a comment/string body) or surface it as an
    // unexpected-character error. This mirrors the line indexer's own
    // lone-`\r`-is-not-a-terminator rule, not re-derived from it.
    if c == '\n' {
        cursor.advance();
        return Some(Trivia::new(TriviaKind::EndOfLine, cursor.span_to_current(start)));
    }
    if c == '\r' && cursor.next_cursor().peek() == '\n' {
        cursor.advance();
        cursor.advance();
        return Some(Trivia::new(TriviaKind::EndOfLine, cursor.span_to_current(start)));
    }

    if is_whitespace(c) {
        while is_whitespace(cursor.peek()) {
            cursor.advance();
        }
        return Some(Trivia::new(TriviaKind::Whitespace, cursor.span_to_current(start)));
    }

    if c == '/' && cursor.next_cursor().peek() == '/' {
        return Some(scan_line_comment(cursor, start));
    }

    if c == '/' && cursor.next_cursor().peek() == '*' {
        return Some(scan_block_comment(cursor, errors, start));
    }

    None
}

/// `//`, `///` (doc) or `//!` (doc), up to (not including) the next
/// line-ending or end-of-source.
fn scan_line_comment(cursor: &mut SourceCursor<'_>, start: weave_source::Position) -> Trivia {
    cursor.advance(); // first '/'
    cursor.advance(); // second '/'

    let is_doc = match cursor.peek() {
        '/' if cursor.next_cursor().peek() != '/' => {
            cursor.advance();
            true
        }
        '!' => {
            cursor.advance();
            true
        }
        _ => false,
    };

    while !cursor.is_end() && !is_newline(cursor.peek()) {
        cursor.advance();
    }

    let kind = if is_doc {
        TriviaKind::SingleLineDocComment
    } else {
        TriviaKind::SingleLineComment
    };
    Trivia::new(kind, cursor.span_to_current(start))
}

/// `/* ... */`, nestable, optionally `/**` or `/*!` doc-flavored. Unterminated
/// input is diagnosed and the trivia extends to end-of-source.
fn scan_block_comment(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    start: weave_source::Position,
) -> Trivia {
    cursor.advance(); // '/'
    cursor.advance(); // '*'

    let is_doc = match cursor.peek() {
        '*' if cursor.next_cursor().peek() != '/' => {
            cursor.advance();
            true
        }
        '!' => {
            cursor.advance();
            true
        }
        _ => false,
    };

    let mut depth: u32 = 1;
    while depth > 0 {
        if cursor.is_end() {
            errors.push(LexError::new(
                cursor.span_to_current(start),
                LexErrorKind::UnterminatedBlockComment,
            ));
            break;
        }
        if cursor.peek() == '/' && cursor.next_cursor().peek() == '*' {
            cursor.advance();
            cursor.advance();
            depth += 1;
        } else if cursor.peek() == '*' && cursor.next_cursor().peek() == '/' {
            cursor.advance();
            cursor.advance();
            depth -= 1;
        } else {
            cursor.advance();
        }
    }

    let kind = if is_doc {
        TriviaKind::MultiLineDocComment
    } else {
        TriviaKind::MultiLineComment
    };
    Trivia::new(kind, cursor.span_to_current(start))
}

/// Read leading trivia: every consecutive piece up to the next token start.
pub(crate) fn scan_leading(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    out: &mut Vec<Trivia>,
) {
    while let Some(trivia) = scan_one(cursor, errors) {
        out.push(trivia);
    }
}

/// Read trailing trivia: trivia on the same line as the token just
/// produced, stopping after at most one [`TriviaKind::EndOfLine`] (the rest
/// becomes leading trivia of the next token).
pub(crate) fn scan_trailing(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    out: &mut Vec<Trivia>,
) {
    while let Some(trivia) = scan_one(cursor, errors) {
        let is_eol = trivia.kind == TriviaKind::EndOfLine;
        out.push(trivia);
        if is_eol {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(src: &str) -> (Vec<Trivia>, Vec<LexError>) {
        let mut cursor = SourceCursor::new(src.as_bytes());
        let mut errors = Vec::new();
        let mut out = Vec::new();
        scan_leading(&mut cursor, &mut errors, &mut out);
        (out, errors)
    }

    #[test]
    fn whitespace_run_is_one_piece() {
        let (pieces, _) = pieces("   \t\tx");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].kind, TriviaKind::Whitespace);
    }

    #[test]
    fn line_comment_stops_before_newline() {
        let (pieces, _) = pieces("// hi\nx");
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].kind, TriviaKind::SingleLineComment);
        assert_eq!(pieces[1].kind, TriviaKind::EndOfLine);
    }

    #[test]
    fn doc_line_comment_is_classified() {
        let (pieces, _) = pieces("/// docs\n");
        assert_eq!(pieces[0].kind, TriviaKind::SingleLineDocComment);
    }

    #[test]
    fn triple_slash_is_not_confused_with_four_slashes() {
        let (pieces, _) = pieces("////not doc\n");
        assert_eq!(pieces[0].kind, TriviaKind::SingleLineComment);
    }

    #[test]
    fn nested_block_comments_track_depth() {
        let (pieces, errors) = pieces("/* outer /* inner */ still outer */x");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].kind, TriviaKind::MultiLineComment);
        assert!(errors.is_empty());
    }

    #[test]
    fn unterminated_block_comment_is_diagnosed() {
        let (_, errors) = pieces("/* never closes");
        assert_eq!(errors[0].kind, LexErrorKind::UnterminatedBlockComment);
    }

    #[test]
    fn doc_block_comment_is_classified() {
        let (pieces, _) = pieces("/** docs */x");
        assert_eq!(pieces[0].kind, TriviaKind::MultiLineDocComment);
    }

    #[test]
    fn crlf_is_a_single_end_of_line_piece() {
        let (pieces, _) = pieces("\r\nx");
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].kind, TriviaKind::EndOfLine);
    }

    #[test]
    fn lone_cr_is_not_end_of_line_trivia() {
        // A lone `\r` (not followed by `\n`) matches no trivia scanner at
        // all; `scan_one` must return `None` so it falls through to the
        // token layer instead of being swallowed as trivia.
        let mut cursor = SourceCursor::new(b"\rx");
        let mut errors = Vec::new();
        assert!(scan_one(&mut cursor, &mut errors).is_none());
        assert_eq!(cursor.pos(), 0);
    }
}
