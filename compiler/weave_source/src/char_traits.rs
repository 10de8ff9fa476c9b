//! Code-point classification predicates.
//!
//! The identifier-continue range table is an exact, closed list rather than
//! routed through `char::is_alphanumeric` or a general Unicode-property
//! crate: Weave's identifier grammar is its own contract, not an
//! approximation of one.

/// ASCII letter or `_`.
#[must_use]
#[inline]
pub const fn is_identifier_start_ascii(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ASCII letter, digit, or `_`.
#[must_use]
#[inline]
pub const fn is_identifier_continue_ascii(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Combining-mark ranges excluded from identifier *starts* (but not from
/// identifier continuations).
const FORBIDDEN_START_RANGES: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

/// An identifier-continue code point that is not an ASCII digit, not `$`,
/// and not in a combining-mark range forbidden for starts.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    if !is_identifier_continue(c) {
        return false;
    }
    if c.is_ascii_digit() || c == '$' {
        return false;
    }
    !FORBIDDEN_START_RANGES
        .iter()
        .any(|&(lo, hi)| c >= lo && c <= hi)
}

/// ASCII continue, or one of the Unicode ranges below. Do not substitute a
/// generic Unicode property lookup here; this exact list *is* the grammar.
const CONTINUE_RANGES: &[(char, char)] = &[
    ('\u{00A8}', '\u{00A8}'),
    ('\u{00AA}', '\u{00AA}'),
    ('\u{00AD}', '\u{00AD}'),
    ('\u{00AF}', '\u{00AF}'),
    ('\u{00B2}', '\u{00B5}'),
    ('\u{00B7}', '\u{00BA}'),
    ('\u{00BC}', '\u{00BE}'),
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{00FF}'),
    ('\u{0100}', '\u{167F}'),
    ('\u{1681}', '\u{180D}'),
    ('\u{180F}', '\u{1FFF}'),
    ('\u{200B}', '\u{200D}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{203F}', '\u{2040}'),
    ('\u{2054}', '\u{2054}'),
    ('\u{2060}', '\u{206F}'),
    ('\u{2070}', '\u{218F}'),
    ('\u{2460}', '\u{24FF}'),
    ('\u{2776}', '\u{2793}'),
    ('\u{2C00}', '\u{2DFF}'),
    ('\u{2E80}', '\u{2FFF}'),
    ('\u{3004}', '\u{3007}'),
    ('\u{3021}', '\u{302F}'),
    ('\u{3031}', '\u{303F}'),
    ('\u{3040}', '\u{D7FF}'),
    ('\u{F900}', '\u{FD3D}'),
    ('\u{FD40}', '\u{FDCF}'),
    ('\u{FDF0}', '\u{FE44}'),
    ('\u{FE47}', '\u{FFF8}'),
    ('\u{10000}', '\u{1FFFD}'),
    ('\u{20000}', '\u{2FFFD}'),
    ('\u{30000}', '\u{3FFFD}'),
    ('\u{40000}', '\u{4FFFD}'),
    ('\u{50000}', '\u{5FFFD}'),
    ('\u{60000}', '\u{6FFFD}'),
    ('\u{70000}', '\u{7FFFD}'),
    ('\u{80000}', '\u{8FFFD}'),
    ('\u{90000}', '\u{9FFFD}'),
    ('\u{A0000}', '\u{AFFFD}'),
    ('\u{B0000}', '\u{BFFFD}'),
    ('\u{C0000}', '\u{CFFFD}'),
    ('\u{D0000}', '\u{DFFFD}'),
    ('\u{E0000}', '\u{EFFFD}'),
];

/// ASCII continue or a code point in one of [`CONTINUE_RANGES`].
#[must_use]
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_continue_ascii(c) || CONTINUE_RANGES.iter().any(|&(lo, hi)| c >= lo && c <= hi)
}

/// Tab, vertical tab, form feed, space, or one of a handful of Unicode
/// space/format separators. `\n` and `\r` are *not* whitespace here — they
/// are handled by the end-of-line trivia path instead.
#[must_use]
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0B}'
            | '\u{0C}'
            | ' '
            | '\u{0085}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// `\n` or `\r`.
#[must_use]
#[inline]
pub const fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

#[must_use]
#[inline]
pub const fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

#[must_use]
#[inline]
pub const fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[must_use]
#[inline]
pub const fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[must_use]
#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Decimal exponent marker: `e` or `E`.
#[must_use]
#[inline]
pub const fn is_decimal_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// Hexadecimal (binary) exponent marker: `p` or `P`.
#[must_use]
#[inline]
pub const fn is_hex_exponent_marker(c: char) -> bool {
    matches!(c, 'p' | 'P')
}
