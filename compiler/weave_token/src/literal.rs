//! Literal-value payloads: the five payload shapes, keyed by `TokenKind`.
//! A plain tagged enum, not a trait-object hierarchy — no virtual dispatch
//! is needed here.

/// Detected numeric base prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum NumberPrefix {
    #[default]
    Default,
    Binary,
    Octal,
    Hexadecimal,
}

/// Integer literal suffix, stored verbatim and uninterpreted by the lexer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IntegerSuffix {
    #[default]
    Default,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    Isize,
    Usize,
    Iptr,
    Uptr,
}

/// Float literal suffix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FloatSuffix {
    #[default]
    Default,
    F16,
    F32,
    F64,
    F128,
    M128,
}

/// String literal encoding prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum StringPrefix {
    #[default]
    Default,
    Utf8,
    Utf16,
    Utf32,
}

/// `(number-prefix, normalized-digits-string, suffix)` for an integer
/// literal. `digits` contains only digits legal for `prefix`'s base, with
/// underscores stripped; an empty run normalizes to `"0"`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntegerLiteral<'a> {
    pub prefix: NumberPrefix,
    pub digits: &'a str,
    pub suffix: IntegerSuffix,
}

/// `(number-prefix, normalized-digits-string, suffix)` for a float literal.
/// `digits` matches
/// `[0-9a-fA-F]*('.'[0-9a-fA-F]*)?(('e'|'p')('+'|'-')?[0-9]+)?` with
/// underscores stripped.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FloatLiteral<'a> {
    pub prefix: NumberPrefix,
    pub digits: &'a str,
    pub suffix: FloatSuffix,
}

/// `(prefix, interned-bytes)` for a string literal. Bytes are UTF-8 after
/// escape decoding (raw strings perform no escape processing).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringLiteral<'a> {
    pub prefix: StringPrefix,
    pub value: &'a str,
}

/// `(prefix, code-point)` for a character literal. `code-point` is exactly
/// one Unicode scalar value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CharacterLiteral<'a> {
    pub prefix: StringPrefix,
    pub value: char,
    pub suffix: &'a str,
}

/// One of the six pattern keywords recognized only by a `(` lookahead:
/// always tokenized as `TokenKind::Identifier`, with the specific word
/// recorded here so a parser can still special-case it in call position
/// without re-scanning the identifier's text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContextualKeyword {
    Cache,
    Catch,
    Parallel,
    Spawn,
    Recurse,
    Timeout,
}

/// Tagged union over the five payload shapes a [`crate::Token`] may carry.
/// `Identifier`'s payload is its interned text plus whether it was written
/// with a `r#` prefix and, if it also matches a contextual keyword's
/// spelling, which one. Raw identifiers always tokenize as plain
/// identifiers regardless of that match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralValue<'a> {
    Identifier {
        text: &'a str,
        is_raw: bool,
        contextual_keyword: Option<ContextualKeyword>,
    },
    Integer(IntegerLiteral<'a>),
    Float(FloatLiteral<'a>),
    String(StringLiteral<'a>),
    Character(CharacterLiteral<'a>),
}
