//! Fragment splitting
//!
//! Splits template source into alternating literal-text and delimiter
//! fragments by matching the delimiter regex and keeping the matched
//! markers in the output. This is the raw step that feeds the state
//! machine; it performs no classification of its own.

use crate::templex::lexers::delimiters::DelimiterSet;

/// Split `source` into alternating text and delimiter fragments.
///
/// The returned list always starts and ends with a (possibly empty) text
/// fragment, with delimiter fragments at the odd positions, in source order.
/// Concatenating the fragments reproduces `source` exactly.
pub fn split_fragments<'a>(set: &DelimiterSet, source: &'a str) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut last = 0;
    for m in set.pattern().find_iter(source) {
        fragments.push(&source[last..m.start()]);
        fragments.push(m.as_str());
        last = m.end();
    }
    fragments.push(&source[last..]);
    fragments
}
