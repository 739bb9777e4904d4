//! # templex
//!
//! A syntax-highlighting tokenizer for templated markup.
//!
//! Templates mix markup with an embedded programming language inside
//! delimiter tags. This crate classifies every byte of such a document into
//! (offset, kind, text) spans for display purposes: markup regions, template
//! delimiters, comment bodies and embedded code. It never parses or executes
//! the templates it highlights, and it never rejects input: malformed
//! delimiters degrade to error-classified or literal spans.
//!
//! Two delimiter flavors ship built in, `{{ }}`/`{% %}`/`{# #}` and
//! ERB-style `<% %>`, as configurations of a single engine; custom delimiter
//! tables can be loaded from YAML. See the [lexers module](templex::lexers).

pub mod templex;
