//! `Token`: `(kind, span, trivia-range, flags, payload?)`.

use weave_source::Span;

use crate::flags::TokenFlags;
use crate::kind::TokenKind;
use crate::literal::LiteralValue;
use crate::trivia::TriviaRange;

/// An immutable token value referring into the source and into the lexer
/// context that produced it.
///
/// Payload is present only for `Identifier`, `IntegerLiteral`,
/// `FloatLiteral`, `StringLiteral`, `CharacterLiteral` — see
/// [`TokenKind::is_literal`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub trivia: TriviaRange<'a>,
    pub flags: TokenFlags,
    pub value: Option<LiteralValue<'a>>,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.flags.contains(TokenFlags::MISSING)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.flags.contains(TokenFlags::HAS_ERRORS)
    }

    /// Whether `self` is a plain or raw identifier, or a contextual
    /// keyword — all three tokenize as `Identifier` and are told apart only
    /// by the payload `value` carries.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}
