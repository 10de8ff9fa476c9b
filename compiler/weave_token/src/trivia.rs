//! Trivia: lexical content preserved but not part of any token body.

use weave_source::Span;

/// The kind of a single trivia element.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    Whitespace,
    EndOfLine,
    SingleLineComment,
    MultiLineComment,
    SingleLineDocComment,
    MultiLineDocComment,
}

impl TriviaKind {
    /// Whether this trivia kind is one of the two documentation-comment
    /// kinds (`///`, `//!`, `/**`, `/*!`).
    #[must_use]
    pub const fn is_documentation(self) -> bool {
        matches!(
            self,
            TriviaKind::SingleLineDocComment | TriviaKind::MultiLineDocComment
        )
    }
}

/// A single piece of trivia: its kind and source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub span: Span,
}

impl Trivia {
    #[must_use]
    pub const fn new(kind: TriviaKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Leading and trailing trivia attached to a token.
///
/// Both slices share a single process-wide empty-range sentinel when they
/// are both empty, so the (extremely common) no-trivia case allocates
/// nothing — see [`TriviaRange::EMPTY`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TriviaRange<'a> {
    pub leading: &'a [Trivia],
    pub trailing: &'a [Trivia],
}

impl<'a> TriviaRange<'a> {
    /// The shared empty range: both slices are empty static slices, so no
    /// arena allocation is needed to construct it.
    pub const EMPTY: TriviaRange<'static> = TriviaRange {
        leading: &[],
        trailing: &[],
    };

    #[must_use]
    pub const fn new(leading: &'a [Trivia], trailing: &'a [Trivia]) -> Self {
        Self { leading, trailing }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

impl Default for TriviaRange<'_> {
    fn default() -> Self {
        TriviaRange::EMPTY
    }
}
