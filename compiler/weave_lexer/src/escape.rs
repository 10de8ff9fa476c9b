//! Escape-sequence decoding inside string and character literal bodies.
//!
//! Every function here assumes the cursor has already consumed the leading
//! `\` and sits on the escape specifier character.

use weave_source::SourceCursor;

use crate::lex_error::{LexError, LexErrorKind};

/// Decode one escape sequence, appending its value as a Unicode scalar.
///
/// Returns the decoded `char`. On an unrecognized specifier, the specifier
/// character itself is returned verbatim so scanning can continue, after
/// recording a diagnostic.
pub(crate) fn cook_escape(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
) -> char {
    let specifier_start = cursor.pos();
    let specifier = cursor.peek();
    cursor.advance();

    match specifier {
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        '?' => '?',
        '0' => '\0',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'e' => '\u{1B}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        'x' => cook_byte_escape(cursor, errors, specifier_start),
        'u' => cook_unicode_escape(cursor, errors, specifier_start),
        other => {
            errors.push(LexError::new(
                cursor.span_to_current(specifier_start),
                LexErrorKind::InvalidCharacterEscape { escape_char: other },
            ));
            other
        }
    }
}

/// `\xHH`: exactly two hex digits, value restricted to `[0x00, 0x7F]`.
fn cook_byte_escape(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    start: weave_source::Position,
) -> char {
    let mut value: u32 = 0;
    let mut count = 0;
    while count < 2 {
        let c = cursor.peek();
        match c.to_digit(16) {
            Some(d) => {
                value = value * 16 + d;
                cursor.advance();
                count += 1;
            }
            None => break,
        }
    }

    if count < 2 {
        errors.push(LexError::new(
            cursor.span_to_current(start),
            LexErrorKind::ByteEscapeTooShort,
        ));
    } else if value > 0x7F {
        errors.push(LexError::new(
            cursor.span_to_current(start),
            LexErrorKind::ByteEscapeOutOfRange,
        ));
    }

    char::from_u32(value).unwrap_or('\u{FFFD}')
}

/// `\u{H..H}`: one to six hex digits inside braces, must be a valid scalar
/// value (no surrogate, no value above `U+10FFFF`).
fn cook_unicode_escape(
    cursor: &mut SourceCursor<'_>,
    errors: &mut Vec<LexError>,
    start: weave_source::Position,
) -> char {
    if cursor.peek() != '{' {
        errors.push(LexError::new(
            cursor.span_to_current(start),
            LexErrorKind::UnicodeEscapeMissingOpeningBrace,
        ));
        return '\u{FFFD}';
    }
    cursor.advance();

    let mut value: u32 = 0;
    let mut count = 0;
    while count < 6 {
        let c = cursor.peek();
        match c.to_digit(16) {
            Some(d) => {
                value = value * 16 + d;
                cursor.advance();
                count += 1;
            }
            None => break,
        }
    }

    if cursor.peek() == '}' {
        cursor.advance();
    } else {
        errors.push(LexError::new(
            cursor.span_to_current(start),
            LexErrorKind::UnicodeEscapeMissingClosingBrace,
        ));
    }

    match char::from_u32(value) {
        Some(c) if count > 0 => c,
        _ => {
            errors.push(LexError::new(
                cursor.span_to_current(start),
                LexErrorKind::InvalidUnicodeEscape,
            ));
            '\u{FFFD}'
        }
    }
}
