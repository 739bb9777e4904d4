//! Composite template + markup lexer
//!
//! Regions outside template delimiters are markup; regions inside are
//! template syntax. The composite runs the template machine over the whole
//! document first, then re-tokenizes everything the machine left as `Other`
//! with the markup tokenizer.
//!
//! The `Other` text is collected into a single buffer before markup
//! tokenization, with the template tokens recorded as insertions at their
//! buffer positions. Markup constructs that span template tags (an attribute
//! value interrupted by an output tag, say) are therefore still recognized
//! as one construct; the insertions are spliced back afterwards, splitting
//! any markup token they land inside.

use std::sync::Arc;

use crate::templex::lexers::delimiters::DelimiterSet;
use crate::templex::lexers::machine::TemplateMachine;
use crate::templex::lexers::registry::{LexError, Lexer};
use crate::templex::token::{SpanTokenizer, Token, TokenKind};

/// A named pairing of the template machine with a markup tokenizer for the
/// regions between tags and an embedded-language tokenizer for the code
/// inside them.
pub struct CompositeLexer {
    name: String,
    machine: TemplateMachine,
    markup: Arc<dyn SpanTokenizer>,
    embedded: Arc<dyn SpanTokenizer>,
}

impl CompositeLexer {
    pub fn new(
        name: impl Into<String>,
        delimiters: DelimiterSet,
        markup: Arc<dyn SpanTokenizer>,
        embedded: Arc<dyn SpanTokenizer>,
    ) -> CompositeLexer {
        CompositeLexer {
            name: name.into(),
            machine: TemplateMachine::new(delimiters),
            markup,
            embedded,
        }
    }

    /// Tokenize a whole document.
    ///
    /// The output tiles `source` exactly; see the module docs for how the
    /// markup and template halves are merged.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let template = self.machine.tokenize(source, self.embedded.as_ref());

        let mut buffered = String::new();
        let mut insertions: Vec<(usize, Vec<Token>)> = Vec::new();
        let mut pending: Vec<Token> = Vec::new();
        for token in template {
            if token.kind == TokenKind::Other {
                if !pending.is_empty() {
                    insertions.push((buffered.len(), std::mem::take(&mut pending)));
                }
                buffered.push_str(&token.text);
            } else {
                pending.push(token);
            }
        }
        if !pending.is_empty() {
            insertions.push((buffered.len(), pending));
        }

        let markup = self.markup.tokenize_span(&buffered);
        splice_insertions(markup, insertions)
    }
}

impl Lexer for CompositeLexer {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        Ok(CompositeLexer::tokenize(self, source))
    }
}

/// Splice template tokens back into the markup token stream.
///
/// `insertions` holds (position in the buffered markup text, tokens) pairs
/// in ascending position order. A markup token straddling an insertion point
/// is split around it. All offsets are recomputed from a running absolute
/// position, so the output tiles the original document.
fn splice_insertions(markup: Vec<Token>, insertions: Vec<(usize, Vec<Token>)>) -> Vec<Token> {
    let mut out = Vec::new();
    let mut absolute = 0usize;
    let mut buffered_pos = 0usize;
    let mut pending = insertions.into_iter().peekable();

    for token in markup {
        let mut text: &str = &token.text;
        while let Some((at, _)) = pending.peek() {
            if *at > buffered_pos + text.len() {
                break;
            }
            let (head, tail) = text.split_at(at - buffered_pos);
            if !head.is_empty() {
                out.push(Token::new(absolute, token.kind, head));
                absolute += head.len();
                buffered_pos += head.len();
            }
            let (_, inserted) = pending.next().expect("peeked insertion vanished");
            for mut template_token in inserted {
                template_token.offset = absolute;
                absolute += template_token.text.len();
                out.push(template_token);
            }
            text = tail;
        }
        if !text.is_empty() {
            out.push(Token::new(absolute, token.kind, text));
            absolute += text.len();
            buffered_pos += text.len();
        }
    }

    // insertions past the end of the markup stream (unterminated tags, or a
    // document that is nothing but template syntax)
    for (_, inserted) in pending {
        for mut template_token in inserted {
            template_token.offset = absolute;
            absolute += template_token.text.len();
            out.push(template_token);
        }
    }

    out
}
