//! Token factory and owning arena: every `Token`, trivia element, trivia
//! range, and literal payload this crate hands out is allocated here so it
//! stays valid for as long as the `LexerContext` that produced it does.

use weave_arena::{Arena, TypedArena};
use weave_stringpool::StringPool;
use weave_token::{
    CharacterLiteral, FloatLiteral, IntegerLiteral, LiteralValue, StringLiteral, Token,
    TokenFlags, TokenKind, Trivia, TriviaRange,
};

use crate::RawPayload;

/// Owns the arena backing every token, trivia piece, and literal payload
/// produced by a [`crate::Tokenizer`]. Outlives every [`Token`] it hands
/// out.
///
/// The five literal-payload shapes collapse onto a single typed arena:
/// [`weave_token::LiteralValue`] already models them as one Rust enum
/// instead of five distinct struct types, so one `TypedArena<LiteralValue>`
/// is the faithful Rust rendering of "a typed arena per payload kind", not
/// a simplification of it.
pub struct LexerContext<'a> {
    arena: &'a Arena,
    pool: StringPool<'a>,
    values: TypedArena<'a, LiteralValue<'a>>,
    trivia_items: TypedArena<'a, Trivia>,
    trivia_ranges: TypedArena<'a, TriviaRange<'a>>,
    tokens: TypedArena<'a, Token<'a>>,
}

impl<'a> LexerContext<'a> {
    #[must_use]
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            pool: StringPool::new(arena),
            values: TypedArena::new(arena),
            trivia_items: TypedArena::new(arena),
            trivia_ranges: TypedArena::new(arena),
            tokens: TypedArena::new(arena),
        }
    }

    /// Build a missing (zero-width, parser-synthesized) token of `kind` at
    /// `span`, with no trivia and no payload. Sets [`TokenFlags::MISSING`];
    /// the lexer itself never sets this flag, but the factory that
    /// materializes tokens is the right place to expose the constructor a
    /// parser would call.
    #[must_use]
    pub fn create_missing(&self, kind: TokenKind, span: weave_token::Span) -> Token<'a> {
        let token = Token {
            kind,
            span,
            trivia: TriviaRange::EMPTY,
            flags: TokenFlags::MISSING,
            value: None,
        };
        self.tokens.create(token);
        token
    }

    /// Materialize a token: intern its payload (if any), allocate its
    /// trivia into the arena, and record it in the token sub-arena.
    pub(crate) fn create_token(
        &self,
        kind: TokenKind,
        span: weave_token::Span,
        leading: &[Trivia],
        trailing: &[Trivia],
        flags: TokenFlags,
        payload: RawPayload,
    ) -> Token<'a> {
        let trivia = self.make_trivia_range(leading, trailing);
        let value = self.make_value(payload);
        let token = Token {
            kind,
            span,
            trivia,
            flags,
            value,
        };
        self.tokens.create(token);
        token
    }

    fn make_trivia_range(&self, leading: &[Trivia], trailing: &[Trivia]) -> TriviaRange<'a> {
        if leading.is_empty() && trailing.is_empty() {
            return TriviaRange::EMPTY;
        }
        let leading_slice: &'a [Trivia] = if leading.is_empty() {
            &[]
        } else {
            self.trivia_items.create_array_from(leading)
        };
        let trailing_slice: &'a [Trivia] = if trailing.is_empty() {
            &[]
        } else {
            self.trivia_items.create_array_from(trailing)
        };
        let range = TriviaRange::new(leading_slice, trailing_slice);
        self.trivia_ranges.create(range);
        range
    }

    fn make_value(&self, payload: RawPayload) -> Option<LiteralValue<'a>> {
        let value = match payload {
            RawPayload::None => return None,
            RawPayload::Identifier {
                text,
                is_raw,
                contextual,
            } => LiteralValue::Identifier {
                text: self.pool.get_str(&text),
                is_raw,
                contextual_keyword: contextual,
            },
            RawPayload::Integer {
                prefix,
                digits,
                suffix,
            } => LiteralValue::Integer(IntegerLiteral {
                prefix,
                digits: self.pool.get_str(&digits),
                suffix,
            }),
            RawPayload::Float {
                prefix,
                digits,
                suffix,
            } => LiteralValue::Float(FloatLiteral {
                prefix,
                digits: self.pool.get_str(&digits),
                suffix,
            }),
            RawPayload::String { prefix, value } => LiteralValue::String(StringLiteral {
                prefix,
                value: self.pool.get_str(&value),
            }),
            RawPayload::Character {
                prefix,
                value,
                suffix,
            } => LiteralValue::Character(CharacterLiteral {
                prefix,
                value,
                suffix: self.pool.get_str(&suffix),
            }),
        };
        self.values.create(value);
        Some(value)
    }

    /// Current memory usage of the underlying arena. All sub-arenas and the
    /// string pool share this one [`Arena`], so the arena's own usage *is*
    /// the context's total.
    #[must_use]
    pub fn query_memory_usage(&self) -> weave_arena::MemoryUsage {
        self.arena.query_usage()
    }

    /// Number of distinct strings interned so far (digits, identifier text,
    /// string/character literal bodies all share the one pool).
    #[must_use]
    pub fn interned_string_count(&self) -> usize {
        self.pool.len()
    }

    /// Number of tokens materialized so far.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
