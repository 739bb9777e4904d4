//! Core token types shared across the scanner, state machine, and tooling.
//!
//!     Every stage of the pipeline speaks the same shape: a flat list of
//!     tokens, each carrying the absolute byte offset where it starts, a
//!     classification, and the exact source text it covers. Concatenating
//!     the texts of a token list in order reproduces the tokenized source
//!     byte for byte, and the tooling relies on this to re-tile documents.
//!
//! Classifications
//!
//!     Classifications are purely descriptive metadata for display layers.
//!     The template machine itself only produces Other, Marker, Comment and
//!     Error; the remaining kinds come from the span tokenizers that handle
//!     markup regions and embedded code spans.

use std::fmt;

/// Classification attached to an emitted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// Literal text outside any template construct
    Other,
    /// A template delimiter marker such as `{%` or `%>`
    Marker,
    /// The body of a template comment
    Comment,
    /// A closing marker found where an opening marker was expected
    Error,
    /// Whitespace inside embedded code
    Whitespace,
    /// Embedded-language keyword
    Keyword,
    /// Embedded-language identifier or variable
    Name,
    /// Numeric literal
    Number,
    /// String literal
    Str,
    /// Operator or punctuation
    Operator,
    /// Markup tag
    Tag,
    /// Markup character entity
    Entity,
}

/// A classified range of source text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Absolute byte offset of the first byte of `text` in the tokenized source
    pub offset: usize,
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(offset: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            offset,
            kind,
            text: text.into(),
        }
    }

    /// End offset (exclusive) of the range this token covers.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {:<10} {:?}",
            self.offset,
            format!("{:?}", self.kind),
            self.text
        )
    }
}

/// Capability interface for the external tokenizers the template machine
/// composes with: one for markup regions, one for embedded code spans.
///
/// Offsets in the returned tokens are relative to the start of `source` and
/// must be rebased by the caller when composed into a larger document.
/// Implementations must be lossless (the returned texts, concatenated in
/// order, reproduce `source` exactly) and shareable across threads so lexers
/// can be handed around behind `Arc`.
pub trait SpanTokenizer: Send + Sync {
    fn tokenize_span(&self, source: &str) -> Vec<Token>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_end() {
        let token = Token::new(4, TokenKind::Marker, "{%");
        assert_eq!(token.end(), 6);
    }

    #[test]
    fn test_empty_token_end() {
        let token = Token::new(7, TokenKind::Other, "");
        assert_eq!(token.end(), 7);
    }

    #[test]
    fn test_display_format() {
        let token = Token::new(2, TokenKind::Comment, " hi ");
        assert_eq!(format!("{}", token), "     2 Comment    \" hi \"");
    }

    #[test]
    fn test_serializes_to_json() {
        let token = Token::new(0, TokenKind::Marker, "{{");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"offset":0,"kind":"Marker","text":"{{"}"#);
    }
}
