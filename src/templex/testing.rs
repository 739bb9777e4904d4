//! Testing utilities for token assertions
//!
//! # Tokenizer Testing Guidelines
//!
//! Tests of the template machine and the composite lexer should assert two
//! things, and this module provides a tool for each:
//!
//! 1. **Exact token sequences** via [mk_tokens]: offset, kind and text of
//!    every emitted token, pinned. Asserting generalities like token counts
//!    is not informative; the offsets are where the bugs live.
//! 2. **The re-tiling invariants** via [assert_tiling]: every byte of the
//!    input covered, in order, with no gaps and no overlaps. Any test that
//!    tokenizes something should also assert tiling; it is cheap and it
//!    catches offset drift long before a display layer would.
//!
//! [StubTokenizer] stands in for the injected markup and embedded-language
//! tokenizers so tests stay independent of any real grammar: each span comes
//! back as a single token of a fixed kind.

use crate::templex::token::{SpanTokenizer, Token, TokenKind};

/// Build a token list from `(offset, kind, text)` tuples.
pub fn mk_tokens(entries: &[(usize, TokenKind, &str)]) -> Vec<Token> {
    entries
        .iter()
        .map(|(offset, kind, text)| Token::new(*offset, *kind, *text))
        .collect()
}

/// Span tokenizer emitting each non-empty span as one token of a fixed kind.
pub struct StubTokenizer {
    kind: TokenKind,
}

impl StubTokenizer {
    pub fn new(kind: TokenKind) -> StubTokenizer {
        StubTokenizer { kind }
    }

    /// Stub standing in for an embedded-language tokenizer
    pub fn code() -> StubTokenizer {
        StubTokenizer::new(TokenKind::Name)
    }

    /// Stub standing in for a markup tokenizer
    pub fn markup() -> StubTokenizer {
        StubTokenizer::new(TokenKind::Other)
    }
}

impl SpanTokenizer for StubTokenizer {
    fn tokenize_span(&self, source: &str) -> Vec<Token> {
        if source.is_empty() {
            return Vec::new();
        }
        vec![Token::new(0, self.kind, source)]
    }
}

/// Render tokens one per line in a stable format for snapshot assertions.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {:?} {:?}\n", token.offset, token.kind, token.text))
        .collect()
}

/// Assert the re-tiling invariants: concatenated texts reproduce `source`
/// exactly, and every token starts where the previous one ended.
pub fn assert_tiling(source: &str, tokens: &[Token]) {
    let mut expected_offset = 0usize;
    let mut rebuilt = String::new();
    for token in tokens {
        assert_eq!(
            token.offset, expected_offset,
            "token {:?} does not start where the previous one ended",
            token
        );
        expected_offset = token.end();
        rebuilt.push_str(&token.text);
    }
    assert_eq!(rebuilt, source, "tokens do not re-tile the source");
}
