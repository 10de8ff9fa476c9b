//! Per-token metadata flags.

use bitflags::bitflags;

bitflags! {
    /// A handful of independent per-token booleans, stored as one bitset
    /// rather than a hand-rolled `u8` with manual bit twiddling.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TokenFlags: u8 {
        /// Zero-width token synthesized by the parser to stand in for a
        /// token that was expected but absent. The lexer itself never sets
        /// this flag; the model exists so parser-layer code can share the
        /// `Token` type.
        const MISSING = 1 << 0;
        /// At least one recoverable diagnostic was recorded while
        /// producing this token.
        const HAS_ERRORS = 1 << 1;
    }
}
