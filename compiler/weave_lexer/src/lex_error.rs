//! Recoverable lexer diagnostics.
//!
//! `LexError` is a plain data value, not a `thiserror`-derived error type:
//! the lexer never returns a `Result<_, LexError>` to its caller. Errors
//! are accumulated side effects, forwarded to the caller's
//! [`crate::DiagnosticSink`]. Suggestion/autofix machinery belongs to an
//! IDE layer built on top of this, not here.

use weave_source::Span;

/// A single recoverable (or fatal-to-the-token) lexer diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    #[must_use]
    pub const fn new(span: Span, kind: LexErrorKind) -> Self {
        Self { span, kind }
    }

    /// Render the human-facing message for this error's kind.
    ///
    /// Kept on `LexError` itself (rather than a `Display` impl) since the
    /// caller-facing [`crate::DiagnosticSink`] wants a plain `String`, not
    /// a type implementing `std::error::Error`.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.message()
    }
}

/// What went wrong. A plain data enum — no `std::error::Error` impl, since
/// the lexer never surfaces this as a call failure.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // --- UTF-8 / unexpected input ---
    InvalidUtf8Character,
    UnexpectedCharacter { found: char },

    // --- Numeric literals ---
    InvalidBasePrefix,
    InvalidDigitForRadix { digit: char, radix: u32 },
    LeadingUnderscoreAfterDot,
    BinaryOrOctalFloatNotSupported,
    HexFloatRequiresExponent,
    MismatchedExponentMarker,
    EmptyExponentDigits,

    // --- String / raw string ---
    UnterminatedStringLiteral,
    RawStringTerminatorTooLong { found_hashes: usize, expected: usize },

    // --- Character literal ---
    EmptyCharacterLiteral,
    CharacterLiteralTooLong,
    UnterminatedCharacterLiteral,

    // --- Comments ---
    UnterminatedBlockComment,

    // --- Escape sequences ---
    ByteEscapeOutOfRange,
    ByteEscapeTooShort,
    InvalidUnicodeEscape,
    UnicodeEscapeMissingClosingBrace,
    UnicodeEscapeMissingOpeningBrace,
    InvalidCharacterEscape { escape_char: char },
}

impl LexErrorKind {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            LexErrorKind::InvalidUtf8Character => "invalid UTF-8 character".to_string(),
            LexErrorKind::UnexpectedCharacter { found } => {
                format!("unexpected character '{found}'")
            }
            LexErrorKind::InvalidBasePrefix => "invalid base prefix".to_string(),
            LexErrorKind::InvalidDigitForRadix { digit, radix } => {
                format!("invalid digit '{digit}' for base {radix} literal")
            }
            LexErrorKind::LeadingUnderscoreAfterDot => {
                "digit separator '_' must not appear right after a decimal point".to_string()
            }
            LexErrorKind::BinaryOrOctalFloatNotSupported => {
                "binary and octal floating-point literals are not supported".to_string()
            }
            LexErrorKind::HexFloatRequiresExponent => {
                "hexadecimal floating literal requires exponent".to_string()
            }
            LexErrorKind::MismatchedExponentMarker => {
                "exponent marker does not match the literal's base".to_string()
            }
            LexErrorKind::EmptyExponentDigits => {
                "expected at least one digit in exponent".to_string()
            }
            LexErrorKind::UnterminatedStringLiteral => "unterminated string literal".to_string(),
            LexErrorKind::RawStringTerminatorTooLong {
                found_hashes,
                expected,
            } => format!(
                "raw string terminator too long: found {found_hashes} '#', expected {expected}"
            ),
            LexErrorKind::EmptyCharacterLiteral => "empty character literal".to_string(),
            LexErrorKind::CharacterLiteralTooLong => {
                "character literal may only contain one codepoint".to_string()
            }
            LexErrorKind::UnterminatedCharacterLiteral => {
                "unterminated character literal".to_string()
            }
            LexErrorKind::UnterminatedBlockComment => "unterminated block comment".to_string(),
            LexErrorKind::ByteEscapeOutOfRange => {
                "byte escape must be in the range [\\x00-\\x7F]".to_string()
            }
            LexErrorKind::ByteEscapeTooShort => "byte escape sequence too short".to_string(),
            LexErrorKind::InvalidUnicodeEscape => {
                "invalid unicode character escape sequence".to_string()
            }
            LexErrorKind::UnicodeEscapeMissingClosingBrace => {
                "missing closing '}' in unicode escape sequence".to_string()
            }
            LexErrorKind::UnicodeEscapeMissingOpeningBrace => {
                "expected '{' after \\u".to_string()
            }
            LexErrorKind::InvalidCharacterEscape { escape_char } => {
                format!("invalid character escape sequence '\\{escape_char}'")
            }
        }
    }
}
