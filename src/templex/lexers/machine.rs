//! Template tag state machine
//!
//! The machine consumes the fragment stream produced by the scanner and
//! emits classified tokens covering every byte of the input, in order, with
//! no gaps and no overlaps. A forward index walks the fragment list; the
//! running offset always equals the sum of the lengths of the tokens
//! emitted so far.
//!
//! States:
//!     Text      - the next fragment is literal text
//!     TagStart  - the next fragment opens a tag (or is a stray closer)
//!     TagEnd    - a tag payload was consumed, a closing marker is expected
//!
//! Running out of fragments is normal termination in every state, so
//! unterminated tags at end of input degrade gracefully instead of failing.
//! Nothing persists across calls.

use crate::templex::lexers::delegate::delegate_span;
use crate::templex::lexers::delimiters::DelimiterSet;
use crate::templex::lexers::scanner::split_fragments;
use crate::templex::token::{SpanTokenizer, Token, TokenKind};

/// Position of the machine relative to a template tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Text,
    TagStart,
    TagEnd,
}

/// The template half of a composite lexer.
///
/// Splits the source on its delimiter table and classifies markers, comment
/// bodies and embedded code spans. Everything outside template constructs is
/// emitted as `Other` for a markup tokenizer to refine (see
/// [CompositeLexer](crate::templex::lexers::composite::CompositeLexer)).
pub struct TemplateMachine {
    delimiters: DelimiterSet,
}

impl TemplateMachine {
    pub fn new(delimiters: DelimiterSet) -> TemplateMachine {
        TemplateMachine { delimiters }
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Tokenize `source`, delegating code spans to `embedded`.
    ///
    /// Never fails: a closer with no matching opener becomes an `Error`
    /// token, a missing closer leaves the trailing fragments as literal
    /// text, and exhaustion of the fragment stream ends the scan cleanly.
    pub fn tokenize(&self, source: &str, embedded: &dyn SpanTokenizer) -> Vec<Token> {
        let fragments = split_fragments(&self.delimiters, source);
        let mut tokens = Vec::new();
        let mut offset = 0usize;
        let mut state = ScanState::Text;
        let mut next = 0usize;

        while next < fragments.len() {
            let fragment = fragments[next];
            next += 1;

            match state {
                ScanState::Text => {
                    tokens.push(Token::new(offset, TokenKind::Other, fragment));
                    offset += fragment.len();
                    state = ScanState::TagStart;
                }
                ScanState::TagStart => {
                    if self.delimiters.is_literal_escape(fragment) {
                        tokens.push(Token::new(offset, TokenKind::Other, fragment));
                        offset += fragment.len();
                        state = ScanState::Text;
                    } else if self.delimiters.is_comment_open(fragment) {
                        tokens.push(Token::new(offset, TokenKind::Marker, fragment));
                        let body = fragments.get(next).copied().unwrap_or("");
                        next += 1;
                        tokens.push(Token::new(
                            offset + fragment.len(),
                            TokenKind::Comment,
                            body,
                        ));
                        offset += fragment.len() + body.len();
                        state = ScanState::TagEnd;
                    } else if self.delimiters.is_code_open(fragment) {
                        tokens.push(Token::new(offset, TokenKind::Marker, fragment));
                        let payload = fragments.get(next).copied().unwrap_or("");
                        next += 1;
                        tokens.extend(delegate_span(
                            embedded,
                            offset + fragment.len(),
                            payload,
                        ));
                        offset += fragment.len() + payload.len();
                        state = ScanState::TagEnd;
                    } else if self.delimiters.is_closer(fragment) {
                        // closer with no matching opener; flag it, keep going
                        tokens.push(Token::new(offset, TokenKind::Error, fragment));
                        offset += fragment.len();
                        state = ScanState::Text;
                    } else {
                        // line-anchored raw statement: blanks, %, blanks, code
                        let split = statement_prefix_len(fragment);
                        tokens.push(Token::new(offset, TokenKind::Marker, &fragment[..split]));
                        tokens.extend(delegate_span(embedded, offset + split, &fragment[split..]));
                        offset += fragment.len();
                        state = ScanState::Text;
                    }
                }
                ScanState::TagEnd => {
                    if self.delimiters.is_closer(fragment) {
                        tokens.push(Token::new(offset, TokenKind::Marker, fragment));
                    } else {
                        // the closer never showed up; keep the text visible
                        tokens.push(Token::new(offset, TokenKind::Other, fragment));
                    }
                    offset += fragment.len();
                    state = ScanState::Text;
                }
            }
        }

        tokens
    }
}

/// Length of the marker prefix of a statement-line fragment: everything up
/// to and including the first `%` and the run of blanks that follows it.
fn statement_prefix_len(fragment: &str) -> usize {
    let through_percent = match fragment.find('%') {
        Some(at) => at + 1,
        None => return 0,
    };
    let claimed = fragment[through_percent..]
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    through_percent + claimed
}
