//! Built-in span tokenizers
//!
//! Coarse, lossless tokenizers used as the default collaborators for the
//! registered template lexers. They are deliberately not grammars for any
//! particular markup or programming language; inject a real
//! [SpanTokenizer](crate::templex::token::SpanTokenizer) implementation for
//! better highlighting. Anything the patterns below don't recognize is kept
//! as literal text, so both tokenizers re-tile their input exactly.

use logos::Logos;

use crate::templex::token::{SpanTokenizer, Token, TokenKind};

/// Words classified as keywords by [GenericCode].
const KEYWORDS: &[&str] = &[
    "and", "begin", "break", "case", "class", "def", "do", "else", "elsif", "end", "ensure",
    "false", "for", "if", "in", "module", "next", "nil", "not", "or", "rescue", "return", "self",
    "then", "true", "unless", "until", "when", "while", "yield",
];

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum CodeToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    #[regex(r"#[^\n]*")]
    Comment,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Str,
    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?")]
    Number,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*[?!]?")]
    Word,
    #[regex(r"[@$][A-Za-z_][A-Za-z0-9_]*")]
    Variable,
    #[regex(r"[-+*/%=<>!&|^~?:.,;()\[\]{}]")]
    Operator,
}

/// Embedded-code tokenizer covering the lexical shapes most scripting
/// languages share: comments, strings, numbers, words, sigiled variables
/// and punctuation.
pub struct GenericCode;

impl SpanTokenizer for GenericCode {
    fn tokenize_span(&self, source: &str) -> Vec<Token> {
        let mut lexer = CodeToken::lexer(source);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let text = &source[span.start..span.end];
            let kind = match result {
                Ok(CodeToken::Whitespace) => TokenKind::Whitespace,
                Ok(CodeToken::Comment) => TokenKind::Comment,
                Ok(CodeToken::Str) => TokenKind::Str,
                Ok(CodeToken::Number) => TokenKind::Number,
                Ok(CodeToken::Word) => {
                    if KEYWORDS.contains(&text) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Name
                    }
                }
                Ok(CodeToken::Variable) => TokenKind::Name,
                Ok(CodeToken::Operator) => TokenKind::Operator,
                Err(_) => TokenKind::Other,
            };
            tokens.push(Token::new(span.start, kind, text));
        }
        tokens
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum MarkupToken {
    #[regex(r"<[!/]?[A-Za-z][^>]*>")]
    Tag,
    #[regex(r"&[A-Za-z#][A-Za-z0-9]*;")]
    Entity,
    #[regex(r"[^<&]+")]
    Text,
}

/// Markup tokenizer recognizing tags and character entities; everything
/// else stays literal text.
pub struct GenericMarkup;

impl SpanTokenizer for GenericMarkup {
    fn tokenize_span(&self, source: &str) -> Vec<Token> {
        let mut lexer = MarkupToken::lexer(source);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let text = &source[span.start..span.end];
            let kind = match result {
                Ok(MarkupToken::Tag) => TokenKind::Tag,
                Ok(MarkupToken::Entity) => TokenKind::Entity,
                Ok(MarkupToken::Text) | Err(_) => TokenKind::Other,
            };
            tokens.push(Token::new(span.start, kind, text));
        }
        tokens
    }
}
