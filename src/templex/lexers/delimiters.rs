//! Delimiter tables
//!
//! A `DelimiterSet` is the data that turns the generic template machine into
//! a concrete delimiter flavor: the marker tokens grouped by role, plus the
//! compiled regex that splits source text on them.
//!
//! Alternation order in the split regex is load-bearing. The regex crate
//! prefers earlier alternatives at the same position, so marker tokens are
//! listed longest first (`{{-` must win over `{{`) and the line-anchored
//! statement pattern comes last (`%}` at line start must be recognized as a
//! closer, and `%%`-leading lines must fall to the literal-escape tokens
//! where the flavor has them).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::templex::lexers::registry::LexError;

/// Line-anchored raw statement pattern: a line whose first non-blank
/// character is `%` (but not `%%`), captured from line start to line end.
/// A lone `%` with nothing after it is left as literal text.
const LINE_STATEMENT: &str = r"^[ \t]*%[^%\n][^\n]*";

static CURLY: Lazy<DelimiterSet> = Lazy::new(|| {
    DelimiterSet::from_parts(
        &["{#-", "{#"],
        &["{{-", "{{", "{%-", "{%"],
        &["-}}", "-#}", "-%}", "%}", "}}", "#}"],
        &[],
        true,
    )
    .expect("curly delimiter table failed to compile")
});

static ANGLE: Lazy<DelimiterSet> = Lazy::new(|| {
    DelimiterSet::from_parts(
        &["<%#"],
        &["<%=", "<%-", "<%"],
        &["-%>", "%>"],
        &["<%%", "%%>"],
        true,
    )
    .expect("angle delimiter table failed to compile")
});

/// The marker tokens of one delimiter flavor and the regex that splits
/// source text on them.
#[derive(Debug, Clone)]
pub struct DelimiterSet {
    comment_open: Vec<String>,
    code_open: Vec<String>,
    closers: Vec<String>,
    literal_escapes: Vec<String>,
    pattern: Regex,
}

impl DelimiterSet {
    /// The `{{ }}` / `{% %}` / `{# #}` flavor, with `-` trim variants and
    /// line-leading `%` statements.
    pub fn curly() -> DelimiterSet {
        CURLY.clone()
    }

    /// The ERB-style `<% %>` flavor, with `<%%` / `%%>` literal escapes and
    /// line-leading `%` statements.
    pub fn angle() -> DelimiterSet {
        ANGLE.clone()
    }

    /// Build a delimiter set from raw marker token lists.
    ///
    /// Literal escapes take the highest precedence, then the remaining
    /// markers longest first, then (optionally) the line statement pattern.
    /// Fails if the table contains no marker tokens at all.
    pub fn from_parts(
        comment_open: &[&str],
        code_open: &[&str],
        closers: &[&str],
        literal_escapes: &[&str],
        line_statements: bool,
    ) -> Result<DelimiterSet, LexError> {
        let mut markers: Vec<&str> = Vec::new();
        markers.extend(comment_open);
        markers.extend(code_open);
        markers.extend(closers);
        if markers.is_empty() && literal_escapes.is_empty() && !line_statements {
            return Err(LexError::InvalidConfig(
                "delimiter table has no marker tokens".to_string(),
            ));
        }
        markers.sort_by_key(|marker| std::cmp::Reverse(marker.len()));

        let mut alternatives: Vec<String> =
            literal_escapes.iter().map(|tok| regex::escape(tok)).collect();
        alternatives.extend(markers.iter().map(|tok| regex::escape(tok)));
        if line_statements {
            alternatives.push(LINE_STATEMENT.to_string());
        }
        let pattern = format!("(?m){}", alternatives.join("|"));
        let pattern = Regex::new(&pattern)
            .map_err(|e| LexError::InvalidConfig(format!("invalid delimiter table: {}", e)))?;

        Ok(DelimiterSet {
            comment_open: to_owned(comment_open),
            code_open: to_owned(code_open),
            closers: to_owned(closers),
            literal_escapes: to_owned(literal_escapes),
            pattern,
        })
    }

    /// The compiled split regex over all marker tokens.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn is_comment_open(&self, fragment: &str) -> bool {
        self.comment_open.iter().any(|tok| tok == fragment)
    }

    pub fn is_code_open(&self, fragment: &str) -> bool {
        self.code_open.iter().any(|tok| tok == fragment)
    }

    pub fn is_closer(&self, fragment: &str) -> bool {
        self.closers.iter().any(|tok| tok == fragment)
    }

    pub fn is_literal_escape(&self, fragment: &str) -> bool {
        self.literal_escapes.iter().any(|tok| tok == fragment)
    }
}

fn to_owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|tok| tok.to_string()).collect()
}
