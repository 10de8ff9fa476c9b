//! Keyword resolution: length-bucketed reserved-word lookup plus a
//! six-word, lookahead-gated contextual table.

use weave_token::{ContextualKeyword, TokenKind};

/// Look up a reserved keyword by its already-decoded text.
///
/// Length-bucketed: all reserved keywords are 2-8 characters, so
/// out-of-range lengths are rejected before any string comparison. The
/// table itself is read-only data, not code.
#[must_use]
pub(crate) fn lookup_reserved(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if !(2..=8).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            "mod" => Some(TokenKind::Mod),
            "mut" => Some(TokenKind::Mut),
            "pub" => Some(TokenKind::Pub),
            "use" => Some(TokenKind::Use),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "impl" => Some(TokenKind::Impl),
            "loop" => Some(TokenKind::Loop),
            "self" => Some(TokenKind::SelfLower),
            "Self" => Some(TokenKind::SelfUpper),
            "true" => Some(TokenKind::True),
            "type" => Some(TokenKind::Type),
            _ => None,
        },
        5 => match text {
            "async" => Some(TokenKind::Async),
            "await" => Some(TokenKind::Await),
            "break" => Some(TokenKind::Break),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::False),
            "match" => Some(TokenKind::Match),
            "trait" => Some(TokenKind::Trait),
            "where" => Some(TokenKind::Where),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            _ => None,
        },
        6 => match text {
            "extern" => Some(TokenKind::Extern),
            "import" => Some(TokenKind::Import),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            "struct" => Some(TokenKind::Struct),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// Sorted (by text) contextual-keyword table, so `lookup_contextual` can
/// binary-search it.
const CONTEXTUAL: [(&str, ContextualKeyword); 6] = [
    ("cache", ContextualKeyword::Cache),
    ("catch", ContextualKeyword::Catch),
    ("parallel", ContextualKeyword::Parallel),
    ("recurse", ContextualKeyword::Recurse),
    ("spawn", ContextualKeyword::Spawn),
    ("timeout", ContextualKeyword::Timeout),
];

/// Fast pre-filter before the binary search below: only 5/7/8-byte
/// identifiers starting with `c`/`p`/`r`/`s`/`t` can possibly be one of the
/// six contextual keywords.
#[must_use]
#[inline]
fn could_be_contextual(text: &str) -> bool {
    let bytes = text.as_bytes();
    matches!(bytes.len(), 5 | 7 | 8) && matches!(bytes[0], b'c' | b'p' | b'r' | b's' | b't')
}

/// Resolve `text` as a contextual keyword if it is followed — after
/// skipping only ASCII horizontal whitespace (space/tab, *not* newlines or
/// comments) — by `(`.
///
/// `rest` is the raw source bytes immediately following the identifier.
#[must_use]
pub(crate) fn lookup_contextual(text: &str, rest: &[u8]) -> Option<ContextualKeyword> {
    if !could_be_contextual(text) {
        return None;
    }
    let idx = CONTEXTUAL.binary_search_by_key(&text, |(kw, _)| kw).ok()?;
    if next_non_horizontal_ws_is_lparen(rest) {
        Some(CONTEXTUAL[idx].1)
    } else {
        None
    }
}

fn next_non_horizontal_ws_is_lparen(rest: &[u8]) -> bool {
    for &b in rest {
        match b {
            b' ' | b'\t' => {}
            b'(' => return true,
            _ => return false,
        }
    }
    false
}
