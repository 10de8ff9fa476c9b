//! Lexical analysis for Weave: a cursor-driven tokenizer plus the
//! arena-backed token factory that owns everything it produces.
//!
//! Scanning, span computation, interning, keyword resolution, and
//! diagnostics all live in this one pass rather than a separate raw-token
//! layer underneath it: Weave has no IDE-facing use case (incremental
//! re-tagging of edited text without touching the interner) that would
//! justify splitting them.

mod comments;
mod context;
mod diagnostics;
mod escape;
mod identifiers;
mod keywords;
mod lex_error;
mod numeric;
mod punctuation;
mod strings;

pub use context::LexerContext;
pub use diagnostics::{DiagnosticSink, Severity};
pub use lex_error::{LexError, LexErrorKind};

use weave_source::char_traits::{is_decimal_digit, is_identifier_start};
use weave_source::{SourceCursor, SourceText};
use weave_token::{
    ContextualKeyword, FloatSuffix, IntegerSuffix, NumberPrefix, StringPrefix, Token, TokenFlags,
    TokenKind, Trivia,
};

/// How much trivia a [`Tokenizer`] attaches to the tokens it produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TriviaMode {
    /// Discard all trivia; tokens carry [`weave_token::TriviaRange::EMPTY`].
    None,
    /// Keep only documentation comments (`///`, `//!`, `/**`, `/*!`).
    Documentation,
    /// Keep every piece of trivia (whitespace, end-of-line, all comments).
    #[default]
    All,
}

/// Everything a [`context::LexerContext`] needs to materialize a token's
/// payload, before interning. Kept separate from [`weave_token::LiteralValue`]
/// so scanning can build owned `String`s without touching the arena until
/// the token is actually produced.
pub(crate) enum RawPayload {
    None,
    Identifier {
        text: String,
        is_raw: bool,
        contextual: Option<ContextualKeyword>,
    },
    Integer {
        prefix: NumberPrefix,
        digits: String,
        suffix: IntegerSuffix,
    },
    Float {
        prefix: NumberPrefix,
        digits: String,
        suffix: FloatSuffix,
    },
    String {
        prefix: StringPrefix,
        value: String,
    },
    Character {
        prefix: StringPrefix,
        value: char,
        suffix: String,
    },
}

/// Pull-based tokenizer: each call to [`Tokenizer::lex`] reads leading
/// trivia, one token body, and trailing trivia (stopping after at most one
/// end-of-line), then asks its [`LexerContext`] to materialize the result.
pub struct Tokenizer<'src, 'a> {
    source: &'src SourceText,
    cursor: SourceCursor<'src>,
    trivia_mode: TriviaMode,
    ctx: &'a LexerContext<'a>,
}

impl<'src, 'a> Tokenizer<'src, 'a> {
    #[must_use]
    pub fn new(source: &'src SourceText, ctx: &'a LexerContext<'a>, trivia_mode: TriviaMode) -> Self {
        Self {
            source,
            cursor: SourceCursor::new(source.get_content()),
            trivia_mode,
            ctx,
        }
    }

    /// Produce the next token, forwarding every diagnostic recorded while
    /// scanning it to `sink`. Returns a [`TokenKind::EndOfFile`] token
    /// forever once the source is exhausted, so callers can loop on
    /// `token.kind != TokenKind::EndOfFile` without a separate has-more
    /// check.
    pub fn lex(&mut self, sink: &mut dyn DiagnosticSink) -> Token<'a> {
        let mut errors: Vec<LexError> = Vec::new();

        let mut leading_raw = Vec::new();
        comments::scan_leading(&mut self.cursor, &mut errors, &mut leading_raw);

        self.cursor.start();
        let (kind, payload) = self.read_token(&mut errors);
        let span = self.cursor.span();

        let mut trailing_raw = Vec::new();
        comments::scan_trailing(&mut self.cursor, &mut errors, &mut trailing_raw);

        let has_errors = !errors.is_empty();
        for error in &errors {
            tracing::debug!(
                error_kind = ?error.kind,
                start = error.span.start,
                end = error.span.end,
                "lexer diagnostic"
            );
            sink.report(Severity::Error, error.span, error.message());
        }
        tracing::trace!(token_kind = ?kind, start = span.start, end = span.end, "token produced");

        let leading = self.filter_trivia(leading_raw);
        let trailing = self.filter_trivia(trailing_raw);

        let flags = if has_errors {
            TokenFlags::HAS_ERRORS
        } else {
            TokenFlags::empty()
        };

        self.ctx
            .create_token(kind, span, &leading, &trailing, flags, payload)
    }

    fn filter_trivia(&self, trivia: Vec<Trivia>) -> Vec<Trivia> {
        match self.trivia_mode {
            TriviaMode::All => trivia,
            TriviaMode::None => Vec::new(),
            TriviaMode::Documentation => trivia
                .into_iter()
                .filter(|piece| piece.kind.is_documentation())
                .collect(),
        }
    }

    /// Dispatch a token body in fixed order: end-of-file, raw identifier,
    /// string literal, character literal, numeric literal, punctuation,
    /// identifier, and finally the unexpected-input fallback.
    fn read_token(&mut self, errors: &mut Vec<LexError>) -> (TokenKind, RawPayload) {
        if self.cursor.is_end() {
            return (TokenKind::EndOfFile, RawPayload::None);
        }

        if let Some((start, end)) = identifiers::try_raw_identifier(&mut self.cursor) {
            let text = decode_text(self.source.get_text(weave_token::Span::new(start, end)));
            return (
                TokenKind::Identifier,
                RawPayload::Identifier {
                    text,
                    is_raw: true,
                    contextual: None,
                },
            );
        }

        if let Some(scan) = strings::try_string_literal(&mut self.cursor, errors) {
            return (
                TokenKind::StringLiteral,
                RawPayload::String {
                    prefix: scan.prefix,
                    value: scan.value,
                },
            );
        }

        if let Some(scan) = strings::try_character_literal(&mut self.cursor, errors) {
            return (
                TokenKind::CharacterLiteral,
                RawPayload::Character {
                    prefix: StringPrefix::Default,
                    value: scan.value,
                    suffix: scan.suffix,
                },
            );
        }

        if is_decimal_digit(self.cursor.peek()) {
            let scan = numeric::scan_numeric_literal(&mut self.cursor, errors);
            return if scan.is_float {
                (
                    TokenKind::FloatLiteral,
                    RawPayload::Float {
                        prefix: scan.prefix,
                        digits: scan.digits,
                        suffix: scan.float_suffix,
                    },
                )
            } else {
                (
                    TokenKind::IntegerLiteral,
                    RawPayload::Integer {
                        prefix: scan.prefix,
                        digits: scan.digits,
                        suffix: scan.integer_suffix,
                    },
                )
            };
        }

        if let Some(kind) = punctuation::try_punctuation(&mut self.cursor) {
            return (kind, RawPayload::None);
        }

        if is_identifier_start(self.cursor.peek()) {
            let (start, end) = identifiers::scan_plain_identifier(&mut self.cursor);
            let text = decode_text(self.source.get_text(weave_token::Span::new(start, end)));

            if text == "_" {
                return (TokenKind::Underscore, RawPayload::None);
            }
            if let Some(kw) = keywords::lookup_reserved(&text) {
                return (kw, RawPayload::None);
            }
            let rest = &self.source.get_content()[self.cursor.pos() as usize..];
            let contextual = keywords::lookup_contextual(&text, rest);
            return (
                TokenKind::Identifier,
                RawPayload::Identifier {
                    text,
                    is_raw: false,
                    contextual,
                },
            );
        }

        if !self.cursor.is_valid() {
            errors.push(LexError::new(
                self.cursor.span_for_current(),
                LexErrorKind::InvalidUtf8Character,
            ));
            self.cursor.recover_one_byte();
        } else {
            let found = self.cursor.peek();
            errors.push(LexError::new(
                self.cursor.span_for_current(),
                LexErrorKind::UnexpectedCharacter { found },
            ));
            self.cursor.advance();
        }
        (TokenKind::Error, RawPayload::None)
    }
}

/// Decode already-scanned source bytes as UTF-8. Every caller only ever
/// passes a span the cursor itself walked code point by code point, so this
/// cannot fail in practice; a lossy fallback is still cheaper than an
/// internal `unwrap` this workspace's lints deny.
fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weave_arena::Arena;

    struct RecordingSink(Vec<(Severity, String)>);
    impl DiagnosticSink for RecordingSink {
        fn report(&mut self, severity: Severity, _span: weave_token::Span, message: String) {
            self.0.push((severity, message));
        }
    }

    fn lex_all(src: &str) -> (Vec<Token<'static>>, Vec<(Severity, String)>) {
        let source = Box::leak(Box::new(SourceText::new(src.as_bytes().to_vec(), "test")));
        let arena = Box::leak(Box::new(Arena::new()));
        let ctx = Box::leak(Box::new(LexerContext::new(arena)));
        let mut tokenizer = Tokenizer::new(source, ctx, TriviaMode::All);
        let mut sink = RecordingSink(Vec::new());
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.lex(&mut sink);
            let is_eof = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        (tokens, sink.0)
    }

    #[test]
    fn lexes_keyword_and_identifier() {
        let (tokens, errors) = lex_all("let count");
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert_eq!(tokens[0].span, weave_token::Span::new(0, 3));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].span, weave_token::Span::new(4, 9));
        assert_eq!(tokens[2].kind, TokenKind::EndOfFile);
        assert!(errors.is_empty());
    }

    #[test]
    fn raw_identifier_is_always_plain_identifier() {
        let (tokens, _) = lex_all("r#match");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        match tokens[0].value {
            Some(weave_token::LiteralValue::Identifier { text, is_raw, .. }) => {
                assert_eq!(text, "match");
                assert!(is_raw);
            }
            other => panic!("expected identifier payload, got {other:?}"),
        }
    }

    #[test]
    fn contextual_keyword_stays_an_identifier() {
        let (tokens, _) = lex_all("spawn(task)");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        match tokens[0].value {
            Some(weave_token::LiteralValue::Identifier {
                contextual_keyword, ..
            }) => assert_eq!(contextual_keyword, Some(ContextualKeyword::Spawn)),
            other => panic!("expected identifier payload, got {other:?}"),
        }
    }

    #[test]
    fn trailing_trivia_stops_after_one_newline() {
        let (tokens, _) = lex_all("a; // c\n\nb");
        let semi = &tokens[1];
        assert_eq!(semi.kind, TokenKind::Semicolon);
        assert_eq!(semi.trivia.trailing.len(), 2); // " // c", then the newline
        assert!(semi
            .trivia
            .trailing
            .iter()
            .filter(|t| t.kind == weave_token::TriviaKind::EndOfLine)
            .count()
            <= 1);
    }

    #[test]
    fn every_byte_is_covered_by_leading_token_or_trailing_trivia() {
        let src = "let x = 1 + 2;\n";
        let (tokens, _) = lex_all(src);
        let mut cursor = 0u32;
        for token in &tokens {
            for piece in token.trivia.leading {
                assert_eq!(piece.span.start, cursor);
                cursor = piece.span.end;
            }
            assert_eq!(token.span.start, cursor);
            cursor = token.span.end;
            for piece in token.trivia.trailing {
                assert_eq!(piece.span.start, cursor);
                cursor = piece.span.end;
            }
        }
        assert_eq!(cursor as usize, src.len());
    }

    #[test]
    fn numeric_literal_round_trips_through_the_factory() {
        let (tokens, errors) = lex_all("0xFFu32");
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        match tokens[0].value {
            Some(weave_token::LiteralValue::Integer(lit)) => {
                assert_eq!(lit.prefix, NumberPrefix::Hexadecimal);
                assert_eq!(lit.digits, "FF");
                assert_eq!(lit.suffix, IntegerSuffix::U32);
            }
            other => panic!("expected integer payload, got {other:?}"),
        }
        assert!(errors.is_empty());
    }

    #[test]
    fn raw_string_token_round_trips() {
        let (tokens, errors) = lex_all("r#\"a\\b\"#");
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        match tokens[0].value {
            Some(weave_token::LiteralValue::String(lit)) => assert_eq!(lit.value, "a\\b"),
            other => panic!("expected string payload, got {other:?}"),
        }
        assert!(errors.is_empty());
    }

    #[test]
    fn invalid_byte_is_reported_and_progress_is_made() {
        let (tokens, errors) = lex_all("\u{0}\u{0}");
        // 0xFF is not representable in a &str literal, so this test instead
        // checks that two back-to-back NUL bytes (valid but not matched by
        // any scanner) still each produce a distinct Error token and the
        // cursor does not loop forever.
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[2].kind, TokenKind::EndOfFile);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn none_trivia_mode_discards_everything() {
        let source = Box::leak(Box::new(SourceText::new(b"  let".to_vec(), "test")));
        let arena = Box::leak(Box::new(Arena::new()));
        let ctx = Box::leak(Box::new(LexerContext::new(arena)));
        let mut tokenizer = Tokenizer::new(source, ctx, TriviaMode::None);
        let mut sink = RecordingSink(Vec::new());
        let token = tokenizer.lex(&mut sink);
        assert!(token.trivia.is_empty());
    }

    #[test]
    fn documentation_trivia_mode_keeps_only_doc_comments() {
        let source = Box::leak(Box::new(SourceText::new(
            b"/// doc\n// not doc\nlet".to_vec(),
            "test",
        )));
        let arena = Box::leak(Box::new(Arena::new()));
        let ctx = Box::leak(Box::new(LexerContext::new(arena)));
        let mut tokenizer = Tokenizer::new(source, ctx, TriviaMode::Documentation);
        let mut sink = RecordingSink(Vec::new());
        let token = tokenizer.lex(&mut sink);
        assert_eq!(token.trivia.leading.len(), 1);
        assert_eq!(
            token.trivia.leading[0].kind,
            weave_token::TriviaKind::SingleLineDocComment
        );
    }

    proptest::proptest! {
        /// For any source drawn from a mixed identifier/number/whitespace/
        /// punctuation alphabet, every byte belongs to exactly one of a
        /// token's leading trivia, its own span, or its trailing trivia, in
        /// order, with no gaps or overlaps.
        #[test]
        fn every_byte_is_covered_for_arbitrary_source(
            src in "[a-zA-Z0-9_ \t\n;+\\-*/(){}]{0,40}"
        ) {
            let (tokens, _) = lex_all(&src);
            let mut cursor = 0u32;
            for token in &tokens {
                for piece in token.trivia.leading {
                    proptest::prop_assert_eq!(piece.span.start, cursor);
                    cursor = piece.span.end;
                }
                proptest::prop_assert_eq!(token.span.start, cursor);
                cursor = token.span.end;
                for piece in token.trivia.trailing {
                    proptest::prop_assert_eq!(piece.span.start, cursor);
                    cursor = piece.span.end;
                }
            }
            proptest::prop_assert_eq!(cursor as usize, src.len());
        }
    }
}
