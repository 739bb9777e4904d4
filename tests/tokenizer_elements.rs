//! Element-level integration tests for the composite template lexers
//!
//! These pin exact token sequences for small documents going through the
//! full pipeline (machine + fallback collaborators), and run a battery of
//! malformed inputs through both flavors to check the re-tiling invariants
//! always hold.

use rstest::rstest;
use std::sync::Arc;
use templex::templex::lexers::fallback::{GenericCode, GenericMarkup};
use templex::templex::lexers::{CompositeLexer, DelimiterSet};
use templex::templex::testing::{assert_tiling, mk_tokens};
use templex::templex::token::TokenKind::{
    Comment, Entity, Error, Keyword, Marker, Name, Number, Operator, Other, Tag, Whitespace,
};

fn curly_lexer() -> CompositeLexer {
    CompositeLexer::new(
        "template",
        DelimiterSet::curly(),
        Arc::new(GenericMarkup),
        Arc::new(GenericCode),
    )
}

fn angle_lexer() -> CompositeLexer {
    CompositeLexer::new(
        "erb",
        DelimiterSet::angle(),
        Arc::new(GenericMarkup),
        Arc::new(GenericCode),
    )
}

#[test]
fn test_output_tag_between_text() {
    let source = "a{{ x }}b";
    let tokens = curly_lexer().tokenize(source);
    assert_tiling(source, &tokens);
    assert_eq!(
        tokens,
        mk_tokens(&[
            (0, Other, "a"),
            (1, Marker, "{{"),
            (3, Whitespace, " "),
            (4, Name, "x"),
            (5, Whitespace, " "),
            (6, Marker, "}}"),
            (8, Other, "b"),
        ])
    );
}

#[test]
fn test_markup_tag_interrupted_by_output_tag() {
    let source = "<li><%= item %></li>";
    let tokens = angle_lexer().tokenize(source);
    assert_tiling(source, &tokens);
    assert_eq!(
        tokens,
        mk_tokens(&[
            (0, Tag, "<li>"),
            (4, Marker, "<%="),
            (7, Whitespace, " "),
            (8, Name, "item"),
            (12, Whitespace, " "),
            (13, Marker, "%>"),
            (15, Tag, "</li>"),
        ])
    );
}

#[test]
fn test_statement_line_keywords_and_numbers() {
    let source = "% x = 2 if ok\n<b>done</b>";
    let tokens = curly_lexer().tokenize(source);
    assert_tiling(source, &tokens);
    assert_eq!(
        tokens,
        mk_tokens(&[
            (0, Marker, "% "),
            (2, Name, "x"),
            (3, Whitespace, " "),
            (4, Operator, "="),
            (5, Whitespace, " "),
            (6, Number, "2"),
            (7, Whitespace, " "),
            (8, Keyword, "if"),
            (10, Whitespace, " "),
            (11, Name, "ok"),
            (13, Other, "\n"),
            (14, Tag, "<b>"),
            (17, Other, "done"),
            (21, Tag, "</b>"),
        ])
    );
}

#[test]
fn test_comment_with_entity_around_it() {
    let source = "&amp;{# note #}";
    let tokens = curly_lexer().tokenize(source);
    assert_tiling(source, &tokens);
    assert_eq!(
        tokens,
        mk_tokens(&[
            (0, Entity, "&amp;"),
            (5, Marker, "{#"),
            (7, Comment, " note "),
            (13, Marker, "#}"),
        ])
    );
}

#[test]
fn test_stray_closer_is_flagged() {
    let source = "text %} more";
    let tokens = curly_lexer().tokenize(source);
    assert_tiling(source, &tokens);
    assert_eq!(
        tokens,
        mk_tokens(&[
            (0, Other, "text "),
            (5, Error, "%}"),
            (7, Other, " more"),
        ])
    );
}

#[test]
fn test_erb_literal_escape_is_plain_text() {
    let source = "<%% raw %%>";
    let tokens = angle_lexer().tokenize(source);
    assert_tiling(source, &tokens);
    // escapes and the text between them all land in the markup region
    assert!(tokens.iter().all(|t| t.kind == Other));
    assert_eq!(
        tokens.iter().map(|t| t.text.as_str()).collect::<String>(),
        source
    );
}

#[rstest]
#[case::empty("")]
#[case::lone_opener("{%")]
#[case::lone_closer("-}}")]
#[case::nested_opener("{% a {{ b }} c %}")]
#[case::comment_never_closed("{#- dangling")]
#[case::closer_storm("%} }} #} -%}")]
#[case::statement_at_eof("% puts 1")]
#[case::percent_only_line("%\n")]
#[case::double_percent_line("%% not code\n")]
#[case::unicode_text("héllo {{ wörld }} ✓")]
fn test_curly_retiles_malformed_input(#[case] source: &str) {
    let tokens = curly_lexer().tokenize(source);
    assert_tiling(source, &tokens);
}

#[rstest]
#[case::empty("")]
#[case::lone_opener("<%")]
#[case::lone_closer("%>")]
#[case::escape_only("<%%")]
#[case::escape_pair("<%%%%>")]
#[case::nested_opener("<% a <%= b %> c %>")]
#[case::comment_never_closed("<%# dangling")]
#[case::statement_at_eof("% puts 1")]
#[case::unicode_text("héllo <%= wörld %> ✓")]
fn test_angle_retiles_malformed_input(#[case] source: &str) {
    let tokens = angle_lexer().tokenize(source);
    assert_tiling(source, &tokens);
}
