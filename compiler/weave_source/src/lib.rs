//! Source text indexing and UTF-8 decoding for the Weave compiler front-end.
//!
//! Standalone, zero `weave_*` dependencies: components C (source text), D
//! (source cursor), and E (character classifier) from the lexical core
//! design. Everything here is a pure function of the bytes it is given —
//! no arena, no interning, no diagnostics sink. Those live one layer up in
//! `weave_token`/`weave_lexer`.

pub mod char_traits;
mod cursor;
mod source_text;
mod span;

pub use cursor::SourceCursor;
pub use source_text::SourceText;
pub use span::{LinePosition, LineSpan, Position, Span};
