//! `TokenKind`: a data-only enum with no behavior beyond equality/Debug. No
//! virtual dispatch is needed here; the keyword table (below) is read-only
//! data, not code.

/// The kind of a [`crate::Token`]. Exhaustive over Weave's concrete grammar:
/// every keyword, contextual keyword, and punctuation form the tokenizer
/// recognizes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum TokenKind {
    EndOfFile,
    /// Lexer could not classify the input: invalid UTF-8, or an unexpected
    /// valid code point matching no scanner. `has-errors` is always set.
    Error,

    Identifier,
    Underscore,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharacterLiteral,

    // --- Reserved keywords ---
    As,
    Async,
    Await,
    Break,
    Const,
    Continue,
    Else,
    Enum,
    Extern,
    False,
    Fn,
    For,
    If,
    Impl,
    Import,
    In,
    Is,
    Let,
    Loop,
    Match,
    Mod,
    Mut,
    Pub,
    Return,
    SelfLower,
    SelfUpper,
    Static,
    Struct,
    Trait,
    True,
    Type,
    Use,
    Where,
    While,
    Yield,

    // --- Punctuation: maximal-munch table ---
    Bang,
    BangEq,
    BangLBracket,
    Plus,
    PlusEq,
    PlusPlus,
    Minus,
    MinusEq,
    MinusMinus,
    Arrow,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Amp,
    AmpEq,
    AmpAmp,
    Pipe,
    PipeEq,
    PipePipe,
    Caret,
    CaretEq,
    Eq,
    EqEq,
    FatArrow,
    Lt,
    LtEq,
    LtLt,
    LtLtEq,
    Gt,
    GtEq,
    GtGt,
    GtGtEq,
    Question,
    QuestionQuestion,
    QuestionQuestionEq,
    Dot,
    DotDot,
    DotDotDot,
    Colon,
    ColonColon,
    ColonColonLt,
    ColonColonLBracket,
    Hash,
    HashLBracket,
    Tilde,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    At,
    Dollar,
    Backslash,
    Comma,
}

impl TokenKind {
    /// True for the reserved-keyword variants (not the contextual ones,
    /// which always tokenize as `Identifier`).
    #[must_use]
    pub const fn is_reserved_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::As
                | TokenKind::Async
                | TokenKind::Await
                | TokenKind::Break
                | TokenKind::Const
                | TokenKind::Continue
                | TokenKind::Else
                | TokenKind::Enum
                | TokenKind::Extern
                | TokenKind::False
                | TokenKind::Fn
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Impl
                | TokenKind::Import
                | TokenKind::In
                | TokenKind::Is
                | TokenKind::Let
                | TokenKind::Loop
                | TokenKind::Match
                | TokenKind::Mod
                | TokenKind::Mut
                | TokenKind::Pub
                | TokenKind::Return
                | TokenKind::SelfLower
                | TokenKind::SelfUpper
                | TokenKind::Static
                | TokenKind::Struct
                | TokenKind::Trait
                | TokenKind::True
                | TokenKind::Type
                | TokenKind::Use
                | TokenKind::Where
                | TokenKind::While
                | TokenKind::Yield
        )
    }

    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharacterLiteral
                | TokenKind::Identifier
        )
    }
}
