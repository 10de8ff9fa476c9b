//! Punctuation maximal-munch scanning. Each operator's longest spelling
//! wins: `+=` is scanned as one token, never as `+` followed by `=`.

use weave_source::SourceCursor;
use weave_token::TokenKind;

/// Try to scan one punctuation token starting at the cursor's current
/// position. Each character consumed greedily extends the match to the
/// longest operator starting with it; `None` means the current code point
/// opens no punctuation token at all.
#[must_use]
pub(crate) fn try_punctuation(cursor: &mut SourceCursor<'_>) -> Option<TokenKind> {
    let kind = match cursor.peek() {
        '!' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::BangEq
            } else if cursor.first('[') {
                TokenKind::BangLBracket
            } else {
                TokenKind::Bang
            }
        }
        '+' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::PlusEq
            } else if cursor.first('+') {
                TokenKind::PlusPlus
            } else {
                TokenKind::Plus
            }
        }
        '-' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::MinusEq
            } else if cursor.first('-') {
                TokenKind::MinusMinus
            } else if cursor.first('>') {
                TokenKind::Arrow
            } else {
                TokenKind::Minus
            }
        }
        '*' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::StarEq
            } else {
                TokenKind::Star
            }
        }
        '/' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::SlashEq
            } else {
                TokenKind::Slash
            }
        }
        '%' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::PercentEq
            } else {
                TokenKind::Percent
            }
        }
        '&' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::AmpEq
            } else if cursor.first('&') {
                TokenKind::AmpAmp
            } else {
                TokenKind::Amp
            }
        }
        '|' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::PipeEq
            } else if cursor.first('|') {
                TokenKind::PipePipe
            } else {
                TokenKind::Pipe
            }
        }
        '^' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::CaretEq
            } else {
                TokenKind::Caret
            }
        }
        '=' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::EqEq
            } else if cursor.first('>') {
                TokenKind::FatArrow
            } else {
                TokenKind::Eq
            }
        }
        '<' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::LtEq
            } else if cursor.first('<') {
                if cursor.first('=') {
                    TokenKind::LtLtEq
                } else {
                    TokenKind::LtLt
                }
            } else {
                TokenKind::Lt
            }
        }
        '>' => {
            cursor.advance();
            if cursor.first('=') {
                TokenKind::GtEq
            } else if cursor.first('>') {
                if cursor.first('=') {
                    TokenKind::GtGtEq
                } else {
                    TokenKind::GtGt
                }
            } else {
                TokenKind::Gt
            }
        }
        '?' => {
            cursor.advance();
            if cursor.first('?') {
                if cursor.first('=') {
                    TokenKind::QuestionQuestionEq
                } else {
                    TokenKind::QuestionQuestion
                }
            } else {
                TokenKind::Question
            }
        }
        '.' => {
            cursor.advance();
            if cursor.first('.') {
                if cursor.first('.') {
                    TokenKind::DotDotDot
                } else {
                    TokenKind::DotDot
                }
            } else {
                TokenKind::Dot
            }
        }
        ':' => {
            cursor.advance();
            if cursor.first(':') {
                if cursor.first('<') {
                    TokenKind::ColonColonLt
                } else if cursor.first('[') {
                    TokenKind::ColonColonLBracket
                } else {
                    TokenKind::ColonColon
                }
            } else {
                TokenKind::Colon
            }
        }
        '#' => {
            cursor.advance();
            if cursor.first('[') {
                TokenKind::HashLBracket
            } else {
                TokenKind::Hash
            }
        }
        '~' => {
            cursor.advance();
            TokenKind::Tilde
        }
        '(' => {
            cursor.advance();
            TokenKind::LParen
        }
        ')' => {
            cursor.advance();
            TokenKind::RParen
        }
        '{' => {
            cursor.advance();
            TokenKind::LBrace
        }
        '}' => {
            cursor.advance();
            TokenKind::RBrace
        }
        '[' => {
            cursor.advance();
            TokenKind::LBracket
        }
        ']' => {
            cursor.advance();
            TokenKind::RBracket
        }
        ';' => {
            cursor.advance();
            TokenKind::Semicolon
        }
        '@' => {
            cursor.advance();
            TokenKind::At
        }
        '$' => {
            cursor.advance();
            TokenKind::Dollar
        }
        '\\' => {
            cursor.advance();
            TokenKind::Backslash
        }
        ',' => {
            cursor.advance();
            TokenKind::Comma
        }
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> TokenKind {
        let mut cursor = SourceCursor::new(src.as_bytes());
        try_punctuation(&mut cursor).expect("expected a punctuation token")
    }

    #[test]
    fn single_character_operators() {
        assert_eq!(scan("+"), TokenKind::Plus);
        assert_eq!(scan(","), TokenKind::Comma);
        assert_eq!(scan("~"), TokenKind::Tilde);
    }

    #[test]
    fn maximal_munch_prefers_longest_match() {
        assert_eq!(scan("=="), TokenKind::EqEq);
        assert_eq!(scan("=>"), TokenKind::FatArrow);
        assert_eq!(scan("="), TokenKind::Eq);
        assert_eq!(scan("<<="), TokenKind::LtLtEq);
        assert_eq!(scan("<<"), TokenKind::LtLt);
        assert_eq!(scan("<"), TokenKind::Lt);
    }

    #[test]
    fn triple_dot_and_double_dot_and_single_dot() {
        assert_eq!(scan("..."), TokenKind::DotDotDot);
        assert_eq!(scan(".."), TokenKind::DotDot);
        assert_eq!(scan("."), TokenKind::Dot);
    }

    #[test]
    fn colon_forms() {
        assert_eq!(scan("::<"), TokenKind::ColonColonLt);
        assert_eq!(scan("::["), TokenKind::ColonColonLBracket);
        assert_eq!(scan("::"), TokenKind::ColonColon);
        assert_eq!(scan(":"), TokenKind::Colon);
    }

    #[test]
    fn hash_forms() {
        assert_eq!(scan("#["), TokenKind::HashLBracket);
        assert_eq!(scan("#"), TokenKind::Hash);
    }

    #[test]
    fn question_forms() {
        assert_eq!(scan("??="), TokenKind::QuestionQuestionEq);
        assert_eq!(scan("??"), TokenKind::QuestionQuestion);
        assert_eq!(scan("?"), TokenKind::Question);
    }

    #[test]
    fn non_punctuation_returns_none() {
        let mut cursor = SourceCursor::new(b"x");
        assert_eq!(try_punctuation(&mut cursor), None);
    }
}
