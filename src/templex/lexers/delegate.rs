//! Embedded-code delegation
//!
//! Code found inside template delimiters is handed to the embedded-language
//! tokenizer, whose output is relative to the span it was given. This module
//! rebases that output into the coordinate space of the full document.

use crate::templex::token::{SpanTokenizer, Token};

/// Tokenize `span` with `tokenizer` and shift every offset by `base`.
///
/// Ordering and classifications of the inner tokenizer are preserved
/// verbatim; this function owns no state.
pub fn delegate_span(tokenizer: &dyn SpanTokenizer, base: usize, span: &str) -> Vec<Token> {
    tokenizer
        .tokenize_span(span)
        .into_iter()
        .map(|token| Token {
            offset: token.offset + base,
            ..token
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templex::testing::mk_tokens;
    use crate::templex::token::TokenKind;

    /// Canned tokenizer returning a fixed word/whitespace/word split.
    struct Canned;

    impl SpanTokenizer for Canned {
        fn tokenize_span(&self, source: &str) -> Vec<Token> {
            assert_eq!(source, "a b");
            mk_tokens(&[
                (0, TokenKind::Name, "a"),
                (1, TokenKind::Whitespace, " "),
                (2, TokenKind::Name, "b"),
            ])
        }
    }

    #[test]
    fn test_rebases_offsets_and_preserves_order() {
        let tokens = delegate_span(&Canned, 10, "a b");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (10, TokenKind::Name, "a"),
                (11, TokenKind::Whitespace, " "),
                (12, TokenKind::Name, "b"),
            ])
        );
    }

    #[test]
    fn test_empty_span_yields_nothing() {
        struct Empty;
        impl SpanTokenizer for Empty {
            fn tokenize_span(&self, _source: &str) -> Vec<Token> {
                Vec::new()
            }
        }
        assert_eq!(delegate_span(&Empty, 5, ""), Vec::new());
    }
}
