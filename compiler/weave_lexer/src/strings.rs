//! String and character literal body scanning.
//!
//! The raw-string fence matcher follows the same cursor-based,
//! rollback-on-mismatch style the rest of this crate uses (see
//! [`weave_source::SourceCursor::reset`]) rather than a separate, C-like
//! raw-scanner pass.

use weave_source::char_traits::{is_identifier_continue, is_identifier_start, is_newline};
use weave_source::{Position, SourceCursor};
use weave_token::StringPrefix;

use crate::escape::cook_escape;
use crate::lex_error::{LexError, LexErrorKind};

/// Result of scanning a string literal body (prefix already resolved).
pub(crate) struct StringScan {
    pub prefix: StringPrefix,
    pub value: String,
}

/// Result of scanning a character literal body.
pub(crate) struct CharScan {
    pub value: char,
    pub suffix: String,
}

/// Try to scan a string literal: an optional `u8`/`u16`/`u32` prefix,
/// followed by either a raw form (`r` + *n* `#` + `"`, body terminated by
/// `"` followed by *n* `#`) or a default double-quoted form with escape
/// processing. Returns `None` (cursor untouched) if nothing here opens a
/// string literal at all.
pub(crate) fn try_string_literal(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
) -> Option<StringScan> {
    let outer_marker = cursor.pos();
    let prefix = detect_string_prefix(cursor);

    if cursor.peek() == 'r' {
        if let Some(hash_count) = detect_raw_fence(cursor) {
            let value = scan_raw_string_body(cursor, errors, outer_marker, hash_count);
            return Some(StringScan { prefix, value });
        }
        cursor.reset(outer_marker);
        return None;
    }

    if cursor.peek() == '"' {
        cursor.advance();
        let value = scan_default_string_body(cursor, errors, outer_marker);
        return Some(StringScan { prefix, value });
    }

    cursor.reset(outer_marker);
    None
}

/// Try to scan a character literal: `'`, a single decoded codepoint (after
/// escape processing), `'`, and an optional verbatim suffix.
pub(crate) fn try_character_literal(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
) -> Option<CharScan> {
    if cursor.peek() != '\'' {
        return None;
    }
    let literal_start = cursor.pos();
    cursor.advance(); // opening '

    let mut chars_found: Vec<char> = Vec::new();
    loop {
        if cursor.is_end() {
            errors.push(LexError::new(
                cursor.span_to_current(literal_start),
                LexErrorKind::UnterminatedCharacterLiteral,
            ));
            break;
        }
        if !cursor.is_valid() {
            errors.push(LexError::new(
                cursor.span_for_current(),
                LexErrorKind::InvalidUtf8Character,
            ));
            cursor.recover_one_byte();
            continue;
        }
        let c = cursor.peek();
        if c == '\'' {
            cursor.advance();
            break;
        }
        if is_newline(c) {
            errors.push(LexError::new(
                cursor.span_to_current(literal_start),
                LexErrorKind::UnterminatedCharacterLiteral,
            ));
            break;
        }
        if c == '\\' {
            cursor.advance();
            chars_found.push(cook_escape(cursor, errors));
        } else {
            chars_found.push(c);
            cursor.advance();
        }
    }

    match chars_found.len() {
        0 => errors.push(LexError::new(
            cursor.span_to_current(literal_start),
            LexErrorKind::EmptyCharacterLiteral,
        )),
        1 => {}
        _ => errors.push(LexError::new(
            cursor.span_to_current(literal_start),
            LexErrorKind::CharacterLiteralTooLong,
        )),
    }
    let value = chars_found.first().copied().unwrap_or('\0');

    let mut suffix = String::new();
    if is_identifier_start(cursor.peek()) {
        suffix.push(cursor.peek());
        cursor.advance();
        while is_identifier_continue(cursor.peek()) {
            suffix.push(cursor.peek());
            cursor.advance();
        }
    }

    Some(CharScan { value, suffix })
}

/// Consume an optional `u8`/`u16`/`u32` string prefix, but only if it is
/// immediately followed by `r` or `"` — `u8count` is a plain identifier, not
/// a prefixed empty string scan gone wrong. Rolls back entirely on mismatch.
fn detect_string_prefix(cursor: &mut SourceCursor<'_>) -> StringPrefix {
    if cursor.peek() != 'u' {
        return StringPrefix::Default;
    }
    let marker = cursor.pos();
    for (text, variant) in [
        ("u32", StringPrefix::Utf32),
        ("u16", StringPrefix::Utf16),
        ("u8", StringPrefix::Utf8),
    ] {
        let mut probe = *cursor;
        if consume_literal(&mut probe, text) && matches!(probe.peek(), 'r' | '"') {
            *cursor = probe;
            return variant;
        }
    }
    cursor.reset(marker);
    StringPrefix::Default
}

/// Advance `cursor` past `text` if it matches exactly, returning `true` on
/// success. Leaves the cursor at the mismatch point on failure (callers that
/// care reset from a saved marker instead of relying on this).
fn consume_literal(cursor: &mut SourceCursor<'_>, text: &str) -> bool {
    for expected in text.chars() {
        if cursor.peek() != expected {
            return false;
        }
        cursor.advance();
    }
    true
}

/// Having seen `r`, count trailing `#` characters and check for a `"`.
/// Returns the hash count on a match (cursor left just past the opening
/// quote); leaves the cursor untouched on mismatch.
fn detect_raw_fence(cursor: &mut SourceCursor<'_>) -> Option<usize> {
    let mut probe = *cursor;
    probe.advance(); // past 'r'
    let mut hashes = 0usize;
    while probe.peek() == '#' {
        probe.advance();
        hashes += 1;
    }
    if probe.peek() == '"' {
        probe.advance();
        *cursor = probe;
        Some(hashes)
    } else {
        None
    }
}

/// Raw string body: any bytes, terminated by `"` followed by at least
/// `hash_count` `#` characters. A longer run of trailing `#` is diagnosed
/// but still terminates the literal; the extra `#`s become their own
/// tokens.
fn scan_raw_string_body(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    literal_start: Position,
    hash_count: usize,
) -> String {
    let mut value = String::new();
    loop {
        if cursor.is_end() {
            errors.push(LexError::new(
                cursor.span_to_current(literal_start),
                LexErrorKind::UnterminatedStringLiteral,
            ));
            break;
        }
        if !cursor.is_valid() {
            errors.push(LexError::new(
                cursor.span_for_current(),
                LexErrorKind::InvalidUtf8Character,
            ));
            cursor.recover_one_byte();
            continue;
        }
        if cursor.peek() == '"' {
            let mut probe = *cursor;
            probe.advance();
            let mut trailing = 0usize;
            while probe.peek() == '#' {
                probe.advance();
                trailing += 1;
            }
            if trailing >= hash_count {
                if trailing > hash_count {
                    errors.push(LexError::new(
                        cursor.span_to_current(literal_start),
                        LexErrorKind::RawStringTerminatorTooLong {
                            found_hashes: trailing,
                            expected: hash_count,
                        },
                    ));
                }
                cursor.advance(); // closing quote
                for _ in 0..hash_count {
                    cursor.advance();
                }
                break;
            }
            value.push('"');
            cursor.advance();
            continue;
        }
        value.push(cursor.peek());
        cursor.advance();
    }
    value
}

/// Default (non-raw) string body: escape-processed, terminated by `"`. A
/// bare newline or end-of-source ends the literal early with a diagnostic.
fn scan_default_string_body(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    literal_start: Position,
) -> String {
    let mut value = String::new();
    loop {
        if cursor.is_end() {
            errors.push(LexError::new(
                cursor.span_to_current(literal_start),
                LexErrorKind::UnterminatedStringLiteral,
            ));
            break;
        }
        if !cursor.is_valid() {
            errors.push(LexError::new(
                cursor.span_for_current(),
                LexErrorKind::InvalidUtf8Character,
            ));
            cursor.recover_one_byte();
            continue;
        }
        let c = cursor.peek();
        if c == '"' {
            cursor.advance();
            break;
        }
        if is_newline(c) {
            errors.push(LexError::new(
                cursor.span_to_current(literal_start),
                LexErrorKind::UnterminatedStringLiteral,
            ));
            break;
        }
        if c == '\\' {
            cursor.advance();
            value.push(cook_escape(cursor, errors));
        } else {
            value.push(c);
            cursor.advance();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_string(src: &str) -> (StringScan, Vec<LexError>) {
        let mut cursor = SourceCursor::new(src.as_bytes());
        let mut errors = Vec::new();
        let scan = try_string_literal(&mut cursor, &mut errors).expect("string literal");
        (scan, errors)
    }

    #[test]
    fn default_string_decodes_escapes() {
        let (scan, errors) = scan_string("\"hi\\n\"");
        assert_eq!(scan.prefix, StringPrefix::Default);
        assert_eq!(scan.value, "hi\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn raw_string_performs_no_escape_processing() {
        let (scan, errors) = scan_string("r#\"hi\\n\"#");
        assert_eq!(scan.value, "hi\\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn raw_string_fence_matches_hash_count() {
        let (scan, errors) = scan_string("r##\"has \"# inside\"##");
        assert_eq!(scan.value, "has \"# inside");
        assert!(errors.is_empty());
    }

    #[test]
    fn prefixed_raw_string() {
        let (scan, errors) = scan_string("u8r#\"raw\"#");
        assert_eq!(scan.prefix, StringPrefix::Utf8);
        assert_eq!(scan.value, "raw");
        assert!(errors.is_empty());
    }

    #[test]
    fn prefixed_default_string() {
        let (scan, errors) = scan_string("u16\"hi\"");
        assert_eq!(scan.prefix, StringPrefix::Utf16);
        assert_eq!(scan.value, "hi");
        assert!(errors.is_empty());
    }

    #[test]
    fn identifier_starting_with_u8_is_not_a_string() {
        let mut cursor = SourceCursor::new(b"u8count");
        let mut errors = Vec::new();
        assert!(try_string_literal(&mut cursor, &mut errors).is_none());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn unterminated_string_is_diagnosed() {
        let (_, errors) = scan_string("\"never closes");
        assert_eq!(errors[0].kind, LexErrorKind::UnterminatedStringLiteral);
    }

    #[test]
    fn raw_string_terminator_too_long_is_diagnosed_but_still_terminates() {
        let mut cursor = SourceCursor::new(b"r#\"body\"##");
        let mut errors = Vec::new();
        let scan = try_string_literal(&mut cursor, &mut errors).expect("string literal");
        assert_eq!(scan.value, "body");
        assert!(matches!(
            errors[0].kind,
            LexErrorKind::RawStringTerminatorTooLong {
                found_hashes: 2,
                expected: 1
            }
        ));
    }

    fn scan_char(src: &str) -> (CharScan, Vec<LexError>) {
        let mut cursor = SourceCursor::new(src.as_bytes());
        let mut errors = Vec::new();
        let scan = try_character_literal(&mut cursor, &mut errors).expect("character literal");
        (scan, errors)
    }

    #[test]
    fn simple_character_literal() {
        let (scan, errors) = scan_char("'a'");
        assert_eq!(scan.value, 'a');
        assert!(errors.is_empty());
    }

    #[test]
    fn character_literal_with_suffix() {
        let (scan, errors) = scan_char("'a'wide");
        assert_eq!(scan.value, 'a');
        assert_eq!(scan.suffix, "wide");
        assert!(errors.is_empty());
    }

    #[test]
    fn escaped_character_literal() {
        let (scan, errors) = scan_char(r"'\n'");
        assert_eq!(scan.value, '\n');
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_character_literal_is_diagnosed() {
        let (_, errors) = scan_char("''");
        assert_eq!(errors[0].kind, LexErrorKind::EmptyCharacterLiteral);
    }

    #[test]
    fn overlong_character_literal_is_diagnosed() {
        let (_, errors) = scan_char("'ab'");
        assert_eq!(errors[0].kind, LexErrorKind::CharacterLiteralTooLong);
    }

    #[test]
    fn unterminated_character_literal_is_diagnosed() {
        let (_, errors) = scan_char("'a");
        assert_eq!(errors[0].kind, LexErrorKind::UnterminatedCharacterLiteral);
    }
}
