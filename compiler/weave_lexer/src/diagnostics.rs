//! Caller-facing diagnostic reporting.
//!
//! Kept deliberately separate from [`crate::lex_error::LexError`]: the
//! latter is the lexer's own internal accumulator (plain data, one variant
//! per recoverable condition), while `DiagnosticSink` is the narrow surface
//! callers implement for whatever diagnostic-rendering layer sits above the
//! lexer.

use weave_source::Span;

/// How serious a reported diagnostic is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

/// A caller-supplied collector for lexer diagnostics.
///
/// Every [`crate::lex_error::LexError`] the tokenizer accumulates while
/// producing a token is forwarded here before the token is returned. A test
/// suite can implement this for `Vec<(Severity, Span, String)>`; a full
/// compiler driver implements it for whatever rendering pipeline it already
/// has.
pub trait DiagnosticSink {
    fn report(&mut self, severity: Severity, span: Span, message: String);
}

/// A `DiagnosticSink` that discards everything, for callers that only want
/// tokens and don't care about diagnostics (e.g. a syntax highlighter that
/// re-lexes speculatively).
impl DiagnosticSink for () {
    fn report(&mut self, _severity: Severity, _span: Span, _message: String) {}
}

impl DiagnosticSink for Vec<(Severity, Span, String)> {
    fn report(&mut self, severity: Severity, span: Span, message: String) {
        self.push((severity, span, message));
    }
}
