//! Token, trivia and literal-payload model for the Weave lexer (component F).
//!
//! Re-exports [`weave_source::Span`] and friends so downstream crates only
//! need one `use` for source-position types.

mod flags;
mod kind;
mod literal;
mod token;
mod trivia;

pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use literal::{
    CharacterLiteral, ContextualKeyword, FloatLiteral, FloatSuffix, IntegerLiteral, IntegerSuffix,
    LiteralValue, NumberPrefix, StringLiteral, StringPrefix,
};
pub use token::Token;
pub use trivia::{Trivia, TriviaKind, TriviaRange};

pub use weave_source::{LinePosition, LineSpan, Position, Span};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_trivia_range_is_the_shared_sentinel() {
        let t: TriviaRange = TriviaRange::default();
        assert!(t.is_empty());
        assert_eq!(t.leading.len(), 0);
        assert_eq!(t.trailing.len(), 0);
    }

    #[test]
    fn trivia_pieces_compare_by_kind_and_span() {
        let a = Trivia::new(TriviaKind::Whitespace, Span::new(0, 3));
        let b = Trivia::new(TriviaKind::Whitespace, Span::new(0, 3));
        assert_eq!(a, b);
    }

    #[test]
    fn token_flags_round_trip() {
        let mut flags = TokenFlags::empty();
        assert!(!flags.contains(TokenFlags::HAS_ERRORS));
        flags |= TokenFlags::HAS_ERRORS;
        assert!(flags.contains(TokenFlags::HAS_ERRORS));
        assert!(!flags.contains(TokenFlags::MISSING));
    }

    #[test]
    fn reserved_keyword_classification() {
        assert!(TokenKind::Let.is_reserved_keyword());
        assert!(!TokenKind::Identifier.is_reserved_keyword());
    }
}
