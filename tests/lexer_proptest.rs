//! Property-based tests for the template lexers
//!
//! These ensure the machine and the composite lexer uphold the re-tiling
//! invariants on arbitrary input, not just on well-formed templates: every
//! byte classified, offsets gap-free, and identical output across repeated
//! runs.

use proptest::prelude::*;
use std::sync::Arc;
use templex::templex::lexers::fallback::{GenericCode, GenericMarkup};
use templex::templex::lexers::{CompositeLexer, DelimiterSet, TemplateMachine};
use templex::templex::testing::{assert_tiling, StubTokenizer};

fn flavors() -> Vec<DelimiterSet> {
    vec![DelimiterSet::curly(), DelimiterSet::angle()]
}

fn composite(delimiters: DelimiterSet) -> CompositeLexer {
    CompositeLexer::new(
        "test",
        delimiters,
        Arc::new(GenericMarkup),
        Arc::new(GenericCode),
    )
}

/// Text interleaved with template constructs, including malformed ones
fn template_shaped() -> impl Strategy<Value = String> {
    let constructs = proptest::sample::select(vec![
        "{{ user.name }}",
        "{%- if logged_in -%}",
        "{# note #}",
        "<%= item %>",
        "<%# hidden %>",
        "<%% raw %%>",
        "\n% puts 1\n",
        "{%",
        "%}",
        "%>",
        "%%",
    ])
    .prop_map(String::from);
    let piece = prop_oneof!["[a-z <>&\"\n]{0,8}", constructs];
    proptest::collection::vec(piece, 0..8).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn machine_retiles_arbitrary_input(source in ".*") {
        for delimiters in flavors() {
            let machine = TemplateMachine::new(delimiters);
            let tokens = machine.tokenize(&source, &StubTokenizer::code());
            assert_tiling(&source, &tokens);
        }
    }

    #[test]
    fn machine_retiles_template_shaped_input(source in template_shaped()) {
        for delimiters in flavors() {
            let machine = TemplateMachine::new(delimiters);
            let tokens = machine.tokenize(&source, &StubTokenizer::code());
            assert_tiling(&source, &tokens);
        }
    }

    #[test]
    fn composite_retiles_arbitrary_input(source in ".*") {
        for delimiters in flavors() {
            let tokens = composite(delimiters).tokenize(&source);
            assert_tiling(&source, &tokens);
        }
    }

    #[test]
    fn composite_retiles_template_shaped_input(source in template_shaped()) {
        for delimiters in flavors() {
            let tokens = composite(delimiters).tokenize(&source);
            assert_tiling(&source, &tokens);
        }
    }

    #[test]
    fn tokenization_is_idempotent(source in template_shaped()) {
        for delimiters in flavors() {
            let lexer = composite(delimiters);
            let first = lexer.tokenize(&source);
            let second = lexer.tokenize(&source);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn offsets_are_cumulative_lengths(source in template_shaped()) {
        for delimiters in flavors() {
            let tokens = composite(delimiters).tokenize(&source);
            let mut sum = 0usize;
            for token in &tokens {
                prop_assert_eq!(token.offset, sum);
                sum += token.text.len();
            }
            prop_assert_eq!(sum, source.len());
        }
    }
}
