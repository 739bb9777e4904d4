//! Delimiter table configuration
//!
//! Custom delimiter flavors can be described in a YAML file and compiled
//! into a [DelimiterSet] at runtime, so templates with house delimiter
//! conventions highlight without code changes. The built-in flavors never
//! go through this path.
//!
//! ```yaml
//! name: square
//! comment_open: ["[#"]
//! code_open: ["[[", "[%"]
//! closers: ["]]", "%]", "#]"]
//! line_statements: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::templex::lexers::delimiters::DelimiterSet;
use crate::templex::lexers::registry::LexError;

/// A delimiter table as described in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelimiterConfig {
    /// Name the assembled lexer reports
    pub name: String,
    #[serde(default)]
    pub comment_open: Vec<String>,
    #[serde(default)]
    pub code_open: Vec<String>,
    #[serde(default)]
    pub closers: Vec<String>,
    #[serde(default)]
    pub literal_escapes: Vec<String>,
    /// Recognize line-leading `%` raw statements
    #[serde(default = "default_line_statements")]
    pub line_statements: bool,
}

fn default_line_statements() -> bool {
    true
}

impl DelimiterConfig {
    /// Load a delimiter table description from a YAML file.
    pub fn load(path: &Path) -> Result<DelimiterConfig, LexError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| LexError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        DelimiterConfig::parse(&raw)
    }

    /// Parse a delimiter table description from YAML text.
    pub fn parse(raw: &str) -> Result<DelimiterConfig, LexError> {
        serde_yaml::from_str(raw).map_err(|e| LexError::InvalidConfig(e.to_string()))
    }

    /// Compile this description into a usable delimiter table.
    pub fn to_delimiter_set(&self) -> Result<DelimiterSet, LexError> {
        DelimiterSet::from_parts(
            &as_refs(&self.comment_open),
            &as_refs(&self.code_open),
            &as_refs(&self.closers),
            &as_refs(&self.literal_escapes),
            self.line_statements,
        )
    }
}

fn as_refs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
